//! Append-only JSON story store.
//!
//! One file per question + competency pair, each holding every scored attempt
//! at that question in the order it was saved. Appends are serialized across
//! clones of a store and land through a temp file + rename, so readers never
//! see a partial file.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::story::Story;

const QUESTION_SLUG_MAX: usize = 80;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("story is incomplete; missing: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("story has not been scored")]
    Unscored,

    #[error("invalid story key '{0}'")]
    InvalidKey(String),

    #[error("no stories saved under '{0}'")]
    NotFound(String),

    #[error("story history {0} is neither a list nor a story object")]
    Malformed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedStory {
    pub key: String,
    pub story: Story,
    pub attempts: usize,
}

#[derive(Debug, Clone)]
pub struct StoryStore {
    root: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl StoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File stem used for a question + competency pair.
    pub fn key_for(question: &str, competency: &str) -> String {
        let question: String = slug(question).chars().take(QUESTION_SLUG_MAX).collect();
        format!("{}_{}", question, slug(competency))
    }

    /// Stamps the story and appends it to its question + competency file.
    pub fn append(&self, story: &Story) -> Result<SavedStory, StoreError> {
        let missing = missing_for_save(story);
        if !missing.is_empty() {
            return Err(StoreError::Incomplete(missing));
        }
        if story.score.is_none() {
            return Err(StoreError::Unscored);
        }

        // Held across read, push and write so concurrent saves cannot drop records.
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        std::fs::create_dir_all(&self.root)?;

        let key = Self::key_for(&story.question, &story.competency);
        let path = self.path_for(&key);

        // Existing records stay raw JSON so ones this version cannot type survive the append.
        let mut history = if path.exists() {
            read_history_lenient(&path)?
        } else {
            Vec::new()
        };

        let stored = Story {
            timestamp: Some(Utc::now().to_rfc3339()),
            ..story.clone()
        };
        history.push(serde_json::to_value(&stored)?);

        write_atomic(&self.root, &path, &serde_json::to_string_pretty(&history)?)?;
        info!("Saved story #{} to {}", history.len(), path.display());

        Ok(SavedStory {
            key,
            story: stored,
            attempts: history.len(),
        })
    }

    /// Keys of all saved files, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Every story saved under `key`, oldest first.
    pub fn load(&self, key: &str) -> Result<Vec<Story>, StoreError> {
        validate_key(key)?;
        let path = self.path_for(key);
        if !path.exists() {
            return Err(StoreError::NotFound(key.to_string()));
        }
        let raw = std::fs::read_to_string(&path)?;
        parse_history(&raw).map_err(StoreError::Json)
    }

    pub fn latest(&self, key: &str) -> Result<Story, StoreError> {
        self.load(key)?
            .pop()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

fn missing_for_save(story: &Story) -> Vec<&'static str> {
    let mut missing = story.missing_for_scoring();
    if story.question.is_empty() {
        missing.insert(0, "question");
    }
    missing
}

/// Accepts either a list of stories or a single legacy story object.
fn parse_history(raw: &str) -> Result<Vec<Story>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

// Only text that is not JSON at all is replaced by a fresh history. Valid
// JSON is kept record by record, whatever its fields hold.
fn read_history_lenient(path: &Path) -> Result<Vec<Value>, StoreError> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Discarding unreadable story history {}: {e}",
                path.display()
            );
            return Ok(Vec::new());
        }
    };
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(record) => Ok(vec![Value::Object(record)]),
        _ => Err(StoreError::Malformed(path.display().to_string())),
    }
}

fn write_atomic(dir: &Path, path: &Path, contents: &str) -> Result<(), StoreError> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

/// Joins whitespace-separated words with `_`, keeping only alphanumerics,
/// `-` and `_`. Keys built this way always pass `validate_key`.
fn slug(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && !key.contains("..")
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
