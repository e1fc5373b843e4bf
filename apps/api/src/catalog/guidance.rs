//! Coaching guidance: behavioral prompts, per-section tips and worked examples.
//!
//! Static reference text; none of it feeds the scoring rubric.

use serde::Serialize;

use crate::catalog::CompetencyCatalog;
use crate::models::story::StarSection;

/// Prompts offered for a competency. Falls back to generic prompts when the
/// competency is unknown or carries no questions of its own.
pub fn behavioral_prompts(catalog: &CompetencyCatalog, name: &str) -> Vec<String> {
    match catalog.lookup(name) {
        Ok(entry) if !entry.questions.is_empty() => entry.questions.clone(),
        _ => generic_prompts(name),
    }
}

fn generic_prompts(name: &str) -> Vec<String> {
    vec![
        format!("Describe a time you demonstrated {name} in a challenging situation."),
        format!("Share an experience when your {name} skills made a difference."),
        format!("Give an example of how you used {name} to achieve a positive outcome."),
        format!("Tell me about a situation where {name} was critical to your success."),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionTips {
    pub section: StarSection,
    pub heading: &'static str,
    pub competency_tips: Vec<&'static str>,
    pub general_tips: Vec<&'static str>,
}

pub fn section_tips(competency: &str, section: StarSection) -> SectionTips {
    let (heading, general_tips) = match section {
        StarSection::Situation => (
            "S - SITUATION: Set the scene and provide context",
            vec![
                "Describe the specific context/background",
                "Explain when and where this happened",
                "Identify key stakeholders involved",
                "Be concise yet detailed enough to set the stage",
            ],
        ),
        StarSection::Task => (
            "T - TASK: Explain your responsibility or challenge",
            vec![
                "Clarify your specific role or responsibility",
                "Explain what you were trying to accomplish",
                "Highlight challenges or constraints you faced",
                "Focus on YOUR task, not the team's general task",
            ],
        ),
        StarSection::Action => (
            "A - ACTION: Detail the specific steps you took",
            vec![
                "Focus on YOUR actions (use 'I' statements)",
                "Be specific about the steps you took",
                "Explain your thought process and decisions",
                "Highlight skills relevant to the competency",
                "Describe how you overcame obstacles",
            ],
        ),
        StarSection::Result => (
            "R - RESULT: Share the outcomes of your actions",
            vec![
                "Quantify results whenever possible (%, $, time saved)",
                "Describe the impact on the organization/team/customers",
                "Include what you learned from the experience",
                "Connect the outcome back to the original situation/task",
            ],
        ),
    };

    SectionTips {
        section,
        heading,
        competency_tips: competency_section_tips(competency, section),
        general_tips,
    }
}

// Only some competencies have bespoke section tips.
fn competency_section_tips(competency: &str, section: StarSection) -> Vec<&'static str> {
    match (competency, section) {
        ("Action Oriented", StarSection::Situation) => vec![
            "Describe a time when you faced a new or urgent challenge.",
            "What was at stake if you didn't act quickly?",
        ],
        ("Action Oriented", StarSection::Task) => vec![
            "What was your specific responsibility in taking action?",
            "Were you expected to lead or just participate?",
        ],
        ("Action Oriented", StarSection::Action) => vec![
            "How did you take initiative?",
            "What did you do differently from others?",
        ],
        ("Action Oriented", StarSection::Result) => vec![
            "What was the outcome of your quick action?",
            "Did you exceed expectations or set a new standard?",
        ],
        ("Customer Focus", StarSection::Situation) => vec![
            "Describe a situation where customer needs were unclear or changing.",
            "What was the customer's main concern?",
        ],
        ("Customer Focus", StarSection::Task) => {
            vec!["What was your responsibility in addressing the customer's needs?"]
        }
        ("Customer Focus", StarSection::Action) => vec![
            "How did you listen and adapt to the customer?",
            "What steps did you take to ensure satisfaction?",
        ],
        ("Customer Focus", StarSection::Result) => vec![
            "How did your actions impact the customer?",
            "Did you receive feedback or recognition?",
        ],
        _ => vec![],
    }
}

/// A worked STAR story used as a model answer.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleStory {
    pub question: &'static str,
    pub situation: &'static str,
    pub task: &'static str,
    pub action: &'static str,
    pub result: &'static str,
}

pub fn example_story(competency: &str) -> Option<ExampleStory> {
    let example = match competency {
        "Drives Results" => ExampleStory {
            question: "Tell me about a time you got results that far exceeded your own expectations.",
            situation: "Last quarter, our team was struggling to meet our sales targets due to a sudden market downturn.",
            task: "As the team lead, I was responsible for motivating the team and finding new ways to generate leads despite the challenging environment.",
            action: "I organized daily stand-ups to share quick wins, introduced a new lead-tracking system, and personally coached team members on outreach techniques.",
            result: "Within six weeks, our team exceeded the revised target by 30%, and two team members received company awards for their performance.",
        },
        "Customer Focus" => ExampleStory {
            question: "Tell me about a time you went the extra mile for a challenging customer.",
            situation: "A long-term client was unhappy with a recent product update and threatened to switch to a competitor.",
            task: "I needed to address their concerns, restore their confidence, and retain their business.",
            action: "I scheduled a face-to-face meeting, listened to their feedback, and worked with our product team to implement a custom solution.",
            result: "The client renewed their contract for another year and provided a positive testimonial that helped us win new business.",
        },
        "Action Oriented" => ExampleStory {
            question: "Tell me about a time you were the first person to take action on something.",
            situation: "Our project was delayed because no one wanted to take the lead on a critical task.",
            task: "I decided to step up and coordinate the team to get things moving.",
            action: "I quickly organized a kickoff meeting, delegated tasks, and set clear deadlines.",
            result: "The project was back on track within a week and delivered ahead of schedule.",
        },
        "Being Resilient" => ExampleStory {
            question: "Tell me about a time when you felt under extreme pressure but managed to carry on.",
            situation: "During a major system outage, I was responsible for restoring service under tight time constraints.",
            task: "I had to troubleshoot the issue while keeping stakeholders informed and calm.",
            action: "I methodically diagnosed the problem, communicated updates, and coordinated with the IT team.",
            result: "Service was restored within two hours, and I received recognition for my composure and leadership.",
        },
        "Collaborates" => ExampleStory {
            question: "Describe a time you had to build partnerships to achieve a shared objective.",
            situation: "Our department needed to launch a new product, but we lacked marketing expertise.",
            task: "I was tasked with building a cross-functional team to ensure a successful launch.",
            action: "I reached out to the marketing team, set up regular meetings, and encouraged open communication.",
            result: "The product launch exceeded sales targets, and both teams received positive feedback from leadership.",
        },
        "Communicates Effectively" => ExampleStory {
            question: "Tell me about a time when you had to explain something important to someone who did not understand your industry or function's language or work.",
            situation: "I had to present a technical solution to a group of non-technical stakeholders.",
            task: "My goal was to ensure everyone understood the benefits and risks of the proposed solution.",
            action: "I used simple analogies, visual aids, and encouraged questions throughout the presentation.",
            result: "The stakeholders approved the solution, and the project moved forward smoothly.",
        },
        "Decision Quality" => ExampleStory {
            question: "Describe a time you had to make a quick decision and gather a lot of information in a short time frame.",
            situation: "A key supplier suddenly went out of business, threatening our production schedule.",
            task: "I needed to find an alternative supplier quickly to avoid delays.",
            action: "I gathered information from multiple vendors, evaluated their capabilities, and negotiated terms.",
            result: "We secured a new supplier within 48 hours, and production continued without interruption.",
        },
        "Strategic Mindset" => ExampleStory {
            question: "Give me an example of working with a team and creating a new vision and strategy.",
            situation: "Our company was facing increased competition and declining market share.",
            task: "I was part of a task force to develop a new growth strategy.",
            action: "We analyzed market trends, identified new opportunities, and created a three-year strategic plan.",
            result: "The new strategy led to a 20% increase in market share over two years.",
        },
        _ => return None,
    };
    Some(example)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_come_from_catalog_when_present() {
        let catalog = CompetencyCatalog::builtin();
        let prompts = behavioral_prompts(&catalog, "Collaborates");
        assert_eq!(prompts.len(), 8);
        assert!(prompts[0].contains("built strong relationships"));
    }

    #[test]
    fn test_prompts_fall_back_to_generic() {
        let catalog = CompetencyCatalog::builtin();
        let prompts = behavioral_prompts(&catalog, "Invents and Simplifies");
        assert_eq!(prompts.len(), 4);
        assert!(prompts.iter().all(|p| p.contains("Invents and Simplifies")));
    }

    #[test]
    fn test_bespoke_tips_for_action_oriented() {
        let tips = section_tips("Action Oriented", StarSection::Action);
        assert_eq!(tips.competency_tips, vec![
            "How did you take initiative?",
            "What did you do differently from others?",
        ]);
        assert_eq!(tips.general_tips.len(), 5);
    }

    #[test]
    fn test_general_tips_only_for_other_competencies() {
        let tips = section_tips("Decision Quality", StarSection::Result);
        assert!(tips.competency_tips.is_empty());
        assert!(tips.heading.starts_with("R - RESULT"));
    }

    #[test]
    fn test_every_builtin_competency_has_an_example() {
        for name in CompetencyCatalog::builtin().names() {
            assert!(example_story(&name).is_some(), "missing example for {name}");
        }
        assert!(example_story("Unknown").is_none());
    }
}
