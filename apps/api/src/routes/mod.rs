pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist::handlers as assist;
use crate::catalog::handlers as catalog;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::stories::handlers as stories;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Competency API
        .route(
            "/api/v1/competencies",
            get(catalog::handle_list_competencies),
        )
        .route(
            "/api/v1/competencies/:name",
            get(catalog::handle_get_competency),
        )
        .route(
            "/api/v1/competencies/:name/questions",
            get(catalog::handle_get_questions),
        )
        .route(
            "/api/v1/competencies/:name/tips/:section",
            get(catalog::handle_get_section_tips),
        )
        .route(
            "/api/v1/competencies/:name/example",
            get(catalog::handle_get_example),
        )
        // Role API
        .route("/api/v1/roles", get(catalog::handle_list_roles))
        .route("/api/v1/roles/:role", get(catalog::handle_get_role))
        .route(
            "/api/v1/roles/:role/questions",
            get(catalog::handle_get_role_questions),
        )
        .route(
            "/api/v1/roles/:role/relevant",
            get(catalog::handle_relevant_competencies),
        )
        .route(
            "/api/v1/roles/:role/guidance/:competency/:section",
            get(catalog::handle_get_role_guidance),
        )
        .route("/api/v1/labels", get(scoring::handle_list_labels))
        // Story API
        .route("/api/v1/stories/score", post(scoring::handle_score_story))
        .route(
            "/api/v1/stories/progress",
            post(scoring::handle_story_progress),
        )
        .route(
            "/api/v1/stories/feedback",
            post(scoring::handle_feedback_for_label),
        )
        .route(
            "/api/v1/stories",
            get(stories::handle_list_stories).post(stories::handle_save_story),
        )
        .route(
            "/api/v1/stories/:key",
            get(stories::handle_get_story_history),
        )
        .route(
            "/api/v1/stories/:key/latest",
            get(stories::handle_get_latest_story),
        )
        // Assist API
        .route(
            "/api/v1/assist/section",
            post(assist::handle_suggest_section),
        )
        .route("/api/v1/assist/grammar", post(assist::handle_check_grammar))
        .route("/api/v1/assist/tone", post(assist::handle_check_tone))
        .route("/api/v1/assist/review", post(assist::handle_review_story))
        .route("/api/v1/assist/chat", post(assist::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::assist::WritingAssistant;
    use crate::catalog::CompetencyCatalog;
    use crate::config::Config;
    use crate::llm_client::DisabledGenerator;
    use crate::scoring::ScoringEngine;
    use crate::stories::store::StoryStore;

    fn test_state(stories_dir: &Path) -> AppState {
        let catalog = Arc::new(CompetencyCatalog::builtin());
        AppState {
            engine: ScoringEngine::new(catalog.clone()),
            catalog,
            store: StoryStore::new(stories_dir),
            assistant: WritingAssistant::new(Arc::new(DisabledGenerator)),
            config: Config {
                anthropic_api_key: None,
                stories_dir: stories_dir.to_path_buf(),
                competency_catalog_path: None,
                llm_timeout_secs: 30,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn words(n: usize) -> String {
        vec!["work"; n].join(" ")
    }

    fn story_json() -> Value {
        json!({
            "competency": "Drives Results",
            "question": "Tell me about a stretch goal.",
            "situation": words(25),
            "task": words(25),
            "action": format!("I {}", words(59)),
            "result": format!("{} 42", words(24)),
        })
    }

    #[tokio::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let (status, body) = send(build_router(test_state(dir.path())), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["competencies"], 8);
        assert_eq!(body["ai_assist"], false);
    }

    #[tokio::test]
    async fn test_competency_routes() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(dir.path()));

        let (status, body) = send(app.clone(), "GET", "/api/v1/competencies", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 8);

        let (status, body) =
            send(app.clone(), "GET", "/api/v1/competencies/Collaborates", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Collaborates");
        assert!(body["skilled_signs"].as_array().unwrap().len() >= 4);

        let (status, body) = send(
            app.clone(),
            "GET",
            "/api/v1/competencies/Customer%20Focus/tips/action",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["section"], "action");

        let (status, _) = send(
            app.clone(),
            "GET",
            "/api/v1/competencies/Collaborates/tips/epilogue",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(app, "GET", "/api/v1/competencies/Juggling/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "UNKNOWN_COMPETENCY");
    }

    #[tokio::test]
    async fn test_score_returns_label_and_labelled_story() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(dir.path()));

        let (status, body) = send(app, "POST", "/api/v1/stories/score", Some(story_json())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["label"], "Skilled");
        assert_eq!(body["story"]["score"], "Skilled");
        assert!(!body["feedback"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_score_incomplete_story_is_unprocessable() {
        let dir = TempDir::new().unwrap();
        let mut story = story_json();
        story["action"] = json!("");

        let (status, body) = send(
            build_router(test_state(dir.path())),
            "POST",
            "/api/v1/stories/score",
            Some(story),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INCOMPLETE_STORY");
    }

    #[tokio::test]
    async fn test_progress_counts_filled_sections() {
        let dir = TempDir::new().unwrap();
        let (status, body) = send(
            build_router(test_state(dir.path())),
            "POST",
            "/api/v1/stories/progress",
            Some(json!({"situation": "Context", "task": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filled_sections"], 1);
        assert_eq!(body["fraction"], 0.25);
    }

    #[tokio::test]
    async fn test_save_list_and_load_story() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(dir.path()));

        let (status, body) = send(app.clone(), "POST", "/api/v1/stories", Some(story_json())).await;
        assert_eq!(status, StatusCode::CREATED);
        let key = body["key"].as_str().unwrap().to_string();
        assert_eq!(key, "Tell_me_about_a_stretch_goal_Drives_Results");
        assert_eq!(body["attempts"], 1);
        assert_eq!(body["story"]["score"], "Skilled");

        let (_, body) = send(app.clone(), "GET", "/api/v1/stories", None).await;
        assert_eq!(body["keys"], json!([key.clone()]));

        let (status, body) = send(app, "GET", &format!("/api/v1/stories/{key}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stories"].as_array().unwrap().len(), 1);
        assert!(body["stories"][0]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_latest_attempt_and_feedback_for_label() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(dir.path()));

        let (_, body) = send(app.clone(), "POST", "/api/v1/stories", Some(story_json())).await;
        let key = body["key"].as_str().unwrap().to_string();
        let mut second = story_json();
        second["result"] = json!(words(10));
        send(app.clone(), "POST", "/api/v1/stories", Some(second)).await;

        let (status, body) =
            send(app.clone(), "GET", &format!("/api/v1/stories/{key}/latest"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], words(10));
        assert_eq!(body["score"], "Unskilled");

        let (status, body) = send(
            app.clone(),
            "POST",
            "/api/v1/stories/feedback",
            Some(json!({"story": story_json(), "label": "Overused"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["label"], "Overused");
        assert!(!body["feedback"].as_array().unwrap().is_empty());

        let mut incomplete = story_json();
        incomplete["task"] = json!("");
        let (status, body) = send(
            app.clone(),
            "POST",
            "/api/v1/stories/feedback",
            Some(json!({"story": incomplete, "label": "Skilled"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INCOMPLETE_STORY");

        let (status, _) = send(app, "GET", "/api/v1/stories/nothing_here/latest", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_role_routes() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(dir.path()));

        let (status, body) = send(app.clone(), "GET", "/api/v1/roles", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 8);

        let (status, body) = send(app.clone(), "GET", "/api/v1/roles/Genius", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["competencies"].as_array().unwrap().len(), 6);
        assert_eq!(body["competencies"][2]["name"], "Tech Savvy");
        assert!(body["competencies"][2]["description"].is_string());
        assert!(body["competencies"][0]["description"].is_null());

        let (status, body) = send(
            app.clone(),
            "GET",
            "/api/v1/roles/Software%20Engineer/questions",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "Software Engineer");
        assert_eq!(body["questions"].as_array().unwrap().len(), 5);

        let (status, body) = send(
            app.clone(),
            "GET",
            "/api/v1/roles/Genius/relevant?question=Tell%20me%20about%20a%20complex%20challenge",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["competencies"],
            json!(["Action Oriented", "Being Resilient", "Managing Complexity"])
        );

        let (status, _) =
            send(app.clone(), "GET", "/api/v1/roles/Genius/relevant?question=", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(app.clone(), "GET", "/api/v1/roles/Astronaut", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "UNKNOWN_ROLE");
    }

    #[tokio::test]
    async fn test_role_guidance_is_scoped_to_the_role() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(dir.path()));

        let (status, body) = send(
            app.clone(),
            "GET",
            "/api/v1/roles/Software%20Engineer/guidance/Innovation/situation",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["prompt"]
            .as_str()
            .unwrap()
            .starts_with("Suggested guidance for Innovation situations:"));
        assert_eq!(body["clarifying_questions"].as_array().unwrap().len(), 2);

        let (status, body) = send(
            app.clone(),
            "GET",
            "/api/v1/roles/Genius/guidance/Innovation/task",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(
            app,
            "GET",
            "/api/v1/roles/Genius/guidance/Tech%20Savvy/epilogue",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_requires_question() {
        let dir = TempDir::new().unwrap();
        let mut story = story_json();
        story["question"] = json!("");

        let (status, _) = send(
            build_router(test_state(dir.path())),
            "POST",
            "/api/v1/stories",
            Some(story),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_story_key_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (status, _) = send(
            build_router(test_state(dir.path())),
            "GET",
            "/api/v1/stories/nothing_here",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assist_without_key_reports_error_reply() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(dir.path()));

        let (status, body) = send(
            app.clone(),
            "POST",
            "/api/v1/assist/grammar",
            Some(json!({"section": "task", "text": "I has a task."})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_error"], true);
        assert!(body["text"].as_str().unwrap().starts_with("[AI Error: "));

        let (status, _) = send(
            app.clone(),
            "POST",
            "/api/v1/assist/tone",
            Some(json!({"section": "task", "text": " "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            app,
            "POST",
            "/api/v1/assist/chat",
            Some(json!({"message": "How long should my answer be?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["text"].as_str().unwrap().starts_with("[AI Chat Error: "));
    }
}
