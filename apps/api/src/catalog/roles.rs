//! Role-specific builder: which competencies a role is interviewed on, sample
//! questions per role, and section prompts plus clarifying questions that
//! help draft a story for one of those competencies.
//!
//! Role competencies are a separate vocabulary from the scoring catalog and
//! are never looked up there.

use serde::Serialize;
use thiserror::Error;

use crate::models::story::StarSection;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown role '{name}'. Valid roles: {}", known.join(", "))]
pub struct UnknownRole {
    pub name: String,
    pub known: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleProfile {
    pub name: &'static str,
    pub competencies: &'static [&'static str],
}

/// Drafting guidance for one competency across the four sections.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCompetencyDetail {
    pub description: &'static str,
    pub situation: &'static str,
    pub task: &'static str,
    pub action: &'static str,
    pub result: &'static str,
}

impl RoleCompetencyDetail {
    fn section(&self, section: StarSection) -> &'static str {
        match section {
            StarSection::Situation => self.situation,
            StarSection::Task => self.task,
            StarSection::Action => self.action,
            StarSection::Result => self.result,
        }
    }
}

const ROLES: &[RoleProfile] = &[
    RoleProfile {
        name: "Technical Specialist",
        competencies: &[
            "Customer Focus",
            "Manages Ambiguity",
            "Tech Savvy",
            "Action Oriented",
            "Manages Conflict",
            "Manages Complexity",
        ],
    },
    RoleProfile {
        name: "Technical Expert",
        competencies: &[
            "Drives Results",
            "Communicates Effectively",
            "Tech Savvy",
            "Decision Quality",
            "Manages Complexity",
            "Collaborates",
        ],
    },
    RoleProfile {
        name: "Genius",
        competencies: &[
            "Being Resilient",
            "Decision Quality",
            "Tech Savvy",
            "Action Oriented",
            "Situational Adaptability",
            "Managing Complexity",
        ],
    },
    RoleProfile {
        name: "Software Engineer",
        competencies: &[
            "Technical Problem Solving",
            "Innovation",
            "Collaboration",
            "Communication",
            "Customer Focus",
        ],
    },
    RoleProfile {
        name: "Product Manager",
        competencies: &[
            "Strategic Thinking",
            "User-Centered Design",
            "Cross-Functional Leadership",
            "Business Acumen",
            "Execution Excellence",
        ],
    },
    RoleProfile {
        name: "UX Designer",
        competencies: &[
            "User Empathy",
            "Design Thinking",
            "Visual Communication",
            "Prototyping Skills",
            "Collaborative Problem Solving",
        ],
    },
    RoleProfile {
        name: "Data Scientist",
        competencies: &[
            "Analytical Thinking",
            "Statistical Modeling",
            "Programming Skills",
            "Business Impact",
            "Communication of Complex Ideas",
        ],
    },
    RoleProfile {
        name: "Operations",
        competencies: &[
            "Process Improvement",
            "Attention to Detail",
            "Problem Solving",
            "Adaptability",
            "Time Management",
        ],
    },
];

const DETAILS: &[(&str, RoleCompetencyDetail)] = &[
    (
        "Customer Focus",
        RoleCompetencyDetail {
            description: "Building strong customer relationships and delivering customer-centric solutions.",
            situation: "Look for situations where you identified customer needs or addressed customer issues.",
            task: "Focus on tasks where you were responsible for improving customer experience or satisfaction.",
            action: "Highlight actions that demonstrate how you listened to customers and tailored solutions.",
            result: "Emphasize measurable improvements in customer satisfaction, retention, or feedback.",
        },
    ),
    (
        "Tech Savvy",
        RoleCompetencyDetail {
            description: "Anticipating and adopting innovations in business-building digital and technology applications.",
            situation: "Describe situations requiring technical innovation or digital solutions.",
            task: "Explain your responsibility to implement or leverage technology effectively.",
            action: "Detail how you researched, learned, or applied new technologies.",
            result: "Quantify the impact of your technical solution on efficiency, performance, or user experience.",
        },
    ),
    (
        "Technical Problem Solving",
        RoleCompetencyDetail {
            description: "Applying analytical thinking to break down complex technical problems and develop effective solutions.",
            situation: "Describe complex technical challenges you faced.",
            task: "Explain the technical requirements and constraints you needed to work within.",
            action: "Detail your systematic approach to analyzing and solving the problem.",
            result: "Quantify improvements in performance, reliability, or other technical metrics.",
        },
    ),
    (
        "Innovation",
        RoleCompetencyDetail {
            description: "Developing breakthrough ideas and implementing them to create value.",
            situation: "Describe situations requiring creative thinking or novel approaches.",
            task: "Explain why conventional solutions wouldn't work for your task.",
            action: "Detail your creative process and how you developed your innovative solution.",
            result: "Highlight how your innovation created value or solved problems in new ways.",
        },
    ),
];

// Question keyword -> competencies it suggests. Scanned in this order.
const KEYWORDS: &[(&str, &[&str])] = &[
    ("customer", &["Customer Focus"]),
    ("relationship", &["Customer Focus", "Interpersonal Savvy"]),
    ("uncertain", &["Manages Ambiguity"]),
    ("ambiguous", &["Manages Ambiguity"]),
    ("technology", &["Tech Savvy"]),
    ("innovation", &["Tech Savvy"]),
    ("challenge", &["Action Oriented", "Being Resilient"]),
    ("conflict", &["Manages Conflict"]),
    ("complex", &["Manages Complexity", "Managing Complexity"]),
    ("result", &["Drives Results"]),
    ("communicate", &["Communicates Effectively"]),
    ("decision", &["Decision Quality"]),
    ("collaborate", &["Collaborates"]),
    ("team", &["Collaborates", "Interpersonal Savvy"]),
    ("resilient", &["Being Resilient"]),
    ("adapt", &["Situational Adaptability"]),
    ("resource", &["Resourcefulness"]),
    ("business", &["Business Insight"]),
    ("plan", &["Plans and Aligns"]),
    ("persuade", &["Persuades"]),
    ("influence", &["Persuades"]),
    ("learn", &["Nimble Learning", "Self Development"]),
    ("accountability", &["Ensures Accountability"]),
    ("process", &["Optimizes Work Processes"]),
    ("grow", &["Self Development"]),
];

const MAX_RELEVANT: usize = 3;

pub fn roles() -> &'static [RoleProfile] {
    ROLES
}

/// Exact-name role lookup.
pub fn role(name: &str) -> Result<&'static RoleProfile, UnknownRole> {
    ROLES.iter().find(|r| r.name == name).ok_or_else(|| UnknownRole {
        name: name.to_string(),
        known: ROLES.iter().map(|r| r.name).collect(),
    })
}

pub fn competency_detail(competency: &str) -> Option<&'static RoleCompetencyDetail> {
    DETAILS
        .iter()
        .find(|(name, _)| *name == competency)
        .map(|(_, detail)| detail)
}

/// Sample interview questions for a role; generic questions for any other role.
pub fn role_questions(role: &str) -> &'static [&'static str] {
    match role {
        "Software Engineer" => &[
            "Tell me about a time you solved a complex technical problem.",
            "Describe a situation where you had to learn a new technology quickly.",
            "Give an example of when you improved the performance of an application.",
            "Tell me about a time you collaborated with a difficult team member.",
            "Describe a situation where you had to make a technical trade-off.",
        ],
        "Product Manager" => &[
            "Tell me about a time you identified a user need that led to a successful product feature.",
            "Describe how you prioritized competing product features.",
            "Give an example of when you had to influence stakeholders without authority.",
            "Tell me about a product launch that didn't go as planned and what you learned.",
            "Describe how you've used data to make product decisions.",
        ],
        "UX Designer" => &[
            "Tell me about a time you advocated for the user despite business pushback.",
            "Describe a project where you improved a user experience significantly.",
            "How have you incorporated user feedback into your design process?",
            "Tell me about a time you had to simplify a complex design problem.",
            "Describe how you've collaborated with engineers to implement your designs.",
        ],
        "Data Scientist" => &[
            "Tell me about a project where your analysis led to a business impact.",
            "Describe a time you had to explain complex technical findings to non-technical stakeholders.",
            "How have you handled a situation with incomplete or messy data?",
            "Tell me about a time you built a model that failed and what you learned.",
            "Describe a project where you had to balance statistical rigor with business needs.",
        ],
        "Operations" => &[
            "Tell me about a time you improved an operational process.",
            "Describe a situation where you had to handle a crisis or unexpected problem.",
            "How have you ensured quality in your work?",
            "Tell me about a time you had to meet a tight deadline.",
            "Describe how you've handled competing priorities.",
        ],
        _ => &[
            "Tell me about a time you demonstrated excellence in your work.",
            "Describe a situation where you had to solve a problem creatively.",
            "Give an example of when you collaborated effectively with others.",
            "Tell me about a time you had to adapt to change.",
            "Describe a situation where you went above and beyond expectations.",
        ],
    }
}

/// Up to three of `competencies` that the question's keywords point at, in
/// keyword order. Falls back to the first three when nothing matches.
pub fn relevant_competencies<'a>(question: &str, competencies: &[&'a str]) -> Vec<&'a str> {
    let question = question.to_lowercase();
    let mut matched: Vec<&'a str> = Vec::new();

    for (keyword, related) in KEYWORDS {
        if !question.contains(keyword) {
            continue;
        }
        for candidate in *related {
            if let Some(&comp) = competencies.iter().find(|c| *c == candidate) {
                if !matched.contains(&comp) {
                    matched.push(comp);
                }
            }
        }
    }

    if matched.is_empty() {
        return competencies.iter().take(MAX_RELEVANT).copied().collect();
    }
    matched.truncate(MAX_RELEVANT);
    matched
}

/// What to think about while drafting `section` for `competency`.
pub fn section_prompt(competency: &str, section: StarSection) -> String {
    if let Some(detail) = competency_detail(competency) {
        return format!(
            "Suggested guidance for {competency} {}s:\n{}",
            section.as_str(),
            detail.section(section)
        );
    }
    bespoke_prompt(competency, section)
        .unwrap_or_else(|| default_prompt(section))
        .to_string()
}

fn bespoke_prompt(competency: &str, section: StarSection) -> Option<&'static str> {
    let prompt = match (section, competency) {
        (StarSection::Situation, "Drives Results") => "Describe a challenging situation with clear objectives. What obstacles were you facing?",
        (StarSection::Result, "Collaboration") => "What did your collaborative approach achieve? How did working together lead to better outcomes than working alone?",
        (StarSection::Result, "Communication") => "What was the impact of your communication? How did it improve understanding or influence others?",
        (StarSection::Result, "Strategic Thinking") => "What strategic outcomes resulted? How did your approach contribute to long-term goals or vision?",
        (StarSection::Result, "User-Centered Design") => "How did users respond to your design? What improvements in user experience or metrics can you point to?",
        (StarSection::Result, "Cross-Functional Leadership") => "What did your leadership across teams achieve? How did it overcome organizational silos?",
        (StarSection::Result, "Business Acumen") => "What business results did you achieve? Can you quantify the impact in terms of revenue, cost savings, or efficiency?",
        (StarSection::Result, "Execution Excellence") => "What quality outcomes resulted from your execution? How did you meet or exceed expectations?",
        (StarSection::Result, "Analytical Thinking") => "What insights or conclusions did your analysis produce? How did these findings drive decisions or actions?",
        (StarSection::Result, "Statistical Modeling") => "How accurate or useful was your model? What business decisions did it enable?",
        (StarSection::Result, "Programming Skills") => "How did your code perform? What improvements in functionality, performance, or reliability resulted?",
        (StarSection::Result, "Process Improvement") => "How much more efficient or effective was the process after your changes? Can you quantify the improvement?",
        (StarSection::Result, "Attention to Detail") => "How did your thoroughness contribute to quality outcomes? What errors or issues were prevented?",
        (StarSection::Result, "Adaptability") => "How did your flexibility lead to positive outcomes? What would have happened without your adaptability?",
        (StarSection::Result, "Design Thinking") => "What resulted from your design thinking approach? How did the solution meet user needs in a unique way?",
        (StarSection::Result, "Visual Communication") => "How effective was your visual communication? What feedback or metrics show it achieved its purpose?",
        (StarSection::Result, "Prototyping Skills") => "What did you learn from your prototypes? How did they influence the final product?",
        (StarSection::Result, "User Empathy") => "How did your empathetic approach improve the solution for users? What positive user feedback resulted?",
        (StarSection::Result, "Time Management") => "How did you meet your deadlines? What would have happened without your effective time management?",
        (StarSection::Result, "Problem Solving") => "What was the outcome of your solution? How effective was it in addressing the core problem?",
        (StarSection::Result, "Communication of Complex Ideas") => "How did your audience respond to your communication? Did they understand and act on the complex information?",
        (StarSection::Result, "Business Impact") => "What specific business results did you achieve? How did these results align with organizational goals?",
        _ => return None,
    };
    Some(prompt)
}

fn default_prompt(section: StarSection) -> &'static str {
    match section {
        StarSection::Situation => "Consider:\n- What was the context?\n- When and where did this happen?\n- Who was involved?\n- What challenges existed?",
        StarSection::Task => "Consider:\n- What was your specific responsibility?\n- What goals were you trying to achieve?\n- What challenges did you face?",
        StarSection::Action => "Consider:\n- What specific actions did YOU take?\n- How did you approach the problem?\n- What skills or tools did you use?",
        StarSection::Result => "Consider:\n- What was the outcome?\n- What impact did you have?\n- Can you quantify the results?\n- What did you learn?",
    }
}

/// Follow-up questions that draw more detail out of a drafted section.
pub fn clarifying_questions(competency: &str, section: StarSection) -> &'static [&'static str] {
    match (section, competency) {
        (StarSection::Situation, "Technical Problem Solving") => &[
            "What technologies or systems were specifically involved?",
            "What made this problem particularly challenging from a technical perspective?",
        ],
        (StarSection::Situation, "Innovation") => &[
            "What aspects of the situation required fresh thinking?",
            "What constraints or limitations were you working with?",
        ],
        (StarSection::Situation, "Collaboration") => &[
            "Who were the key stakeholders or team members involved?",
            "What were the team dynamics or challenges that existed?",
        ],
        (StarSection::Situation, "Communication") => &[
            "What communication challenges existed in this situation?",
            "Who was your audience or who did you need to communicate with?",
        ],
        (StarSection::Situation, "Customer Focus") => &[
            "What customer needs or pain points were present in this situation?",
            "What was at stake for the customer experience?",
        ],
        (StarSection::Situation, _) => &["Can you add more specifics about the context and challenges?"],

        (StarSection::Task, "Technical Problem Solving") => &[
            "What specific technical requirements or constraints did you need to consider?",
            "What was the technical goal you needed to achieve?",
        ],
        (StarSection::Task, "Innovation") => &[
            "Why couldn't this task be solved with conventional approaches?",
            "What objectives required creative thinking?",
        ],
        (StarSection::Task, "Collaboration") => &[
            "What was your specific role within the team?",
            "What dependencies existed between your work and others'?",
        ],
        (StarSection::Task, "Strategic Thinking") => &[
            "What business objectives were you trying to support?",
            "What was the strategic importance of this task?",
        ],
        (StarSection::Task, "User-Centered Design") => &[
            "What user needs were you specifically responsible for addressing?",
            "What user experience goals were you tasked with achieving?",
        ],
        (StarSection::Task, _) => &["What specific responsibility or goal was assigned to you?"],

        (StarSection::Action, "Technical Problem Solving") => &[
            "What specific technical approach or methodology did you use?",
            "How did you test or validate your solution?",
        ],
        (StarSection::Action, "Innovation") => &[
            "What made your approach innovative or different from conventional solutions?",
            "How did you develop or refine your innovative idea?",
        ],
        (StarSection::Action, "Collaboration") => &[
            "How did you specifically facilitate collaboration or overcome collaboration challenges?",
            "What communication strategies did you employ?",
        ],
        (StarSection::Action, "Communication") => &[
            "How did you tailor your communication to your audience?",
            "What specific communication techniques did you use?",
        ],
        (StarSection::Action, "User-Centered Design") => &[
            "How did you incorporate user feedback or research into your actions?",
            "What design methodologies did you employ?",
        ],
        (StarSection::Action, _) => &[
            "What specific steps did you personally take?",
            "How did you overcome challenges?",
        ],

        (StarSection::Result, "Technical Problem Solving") => &[
            "Can you quantify the technical improvements (speed, reliability, etc.)?",
            "What long-term technical benefits resulted from your solution?",
        ],
        (StarSection::Result, "Innovation") => &[
            "How was your innovation received by users or stakeholders?",
            "Did your innovation lead to any broader changes or improvements?",
        ],
        (StarSection::Result, "Collaboration") => &[
            "How did your collaborative approach contribute to the team's success?",
            "What feedback did you receive about your collaboration skills?",
        ],
        (StarSection::Result, "Business Impact") => &[
            "Can you quantify the business impact in terms of revenue, cost savings, or efficiency?",
            "How did your work align with broader business goals?",
        ],
        (StarSection::Result, "User-Centered Design") => &[
            "How did users respond to your solution?",
            "What measurable improvements in user experience resulted from your work?",
        ],
        (StarSection::Result, _) => &[
            "Can you quantify the impact or results?",
            "What did you personally learn from this experience?",
        ],
    }
}
