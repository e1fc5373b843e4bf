// Built-in general competency framework.

use std::collections::BTreeMap;

use crate::models::competency::CompetencyEntry;

struct BuiltinCompetency {
    name: &'static str,
    description: &'static str,
    questions: &'static [&'static str],
    skilled_signs: &'static [&'static str],
    unskilled_signs: &'static [&'static str],
}

const BUILTIN: &[BuiltinCompetency] = &[
    BuiltinCompetency {
        name: "Action Oriented",
        description: "Taking on new opportunities and tough challenges with a sense of urgency, high energy, and enthusiasm.",
        questions: &[
            "Explain what you did when faced with a difficult and urgent problem.",
            "Tell me about a time you had to take over someone else's challenging project.",
            "Tell me about a situation that required an enormous amount of energy and effort.",
            "Describe a time you seized an opportunity and moved forward with purpose.",
            "Tell me about a time you were the first person to take action on something.",
            "Describe a time when you were proactive in addressing a potential problem.",
            "Tell me about a time you took a calculated risk and it paid off.",
            "Explain a situation where you had to juggle multiple high-priority tasks.",
        ],
        skilled_signs: &[
            "Readily takes action on challenges, without unnecessary planning",
            "Identifies and seizes new opportunities",
            "Displays a can-do attitude in good and bad times",
            "Steps up to handle tough issues",
        ],
        unskilled_signs: &[
            "Is slow to act on an opportunity",
            "Spends too much time planning and looking for information",
            "May be overly methodical, taking too long to act on a problem",
            "Is reluctant to step up to challenges; waits for someone else to take action",
        ],
    },
    BuiltinCompetency {
        name: "Being Resilient",
        description: "Rebounding from setbacks and adversity when facing difficult situations.",
        questions: &[
            "Describe a crisis you had to handle.",
            "Give me an example of how you managed an emergency situation.",
            "Tell me about a time when you felt under extreme pressure but managed to carry on.",
            "Tell me about a time when a project or initiative seemed like it was going nowhere.",
            "Tell me about a time when someone or something caught you by surprise and caused you to be blocked.",
            "Describe a time when you had to adapt to a significant change at work.",
            "Tell me about a time you received constructive criticism and how you handled it.",
            "Explain a situation where you had to maintain your composure in a challenging circumstance.",
        ],
        skilled_signs: &[
            "Is confident under pressure",
            "Handles and manages crises effectively",
            "Maintains a positive attitude despite adversity",
            "Bounces back from setbacks",
            "Grows from hardships and negative experiences",
        ],
        unskilled_signs: &[
            "Gets easily rattled in high-pressure situations",
            "Exhibits low energy and motivation during times of stress and worry",
            "Acts defensively when faced with criticism or roadblocks",
            "Takes too long to recover from setbacks",
        ],
    },
    BuiltinCompetency {
        name: "Collaborates",
        description: "Building partnerships and working collaboratively with others to meet shared objectives.",
        questions: &[
            "Tell me about a time when you built strong relationships where none previously existed.",
            "Describe a time you had to build partnerships to achieve a shared objective.",
            "Tell me about a successful experience you had implementing something across organizational boundaries.",
            "Describe a time when a team or group did not get their share of credit.",
            "Tell me about a time you succeeded in an initiative by collaborating with others.",
            "Explain a situation where you had to work with a difficult colleague and how you handled it.",
            "Describe a time when you had to coordinate with multiple teams to achieve a goal.",
            "Tell me about a time you had to manage conflicting priorities from different stakeholders.",
        ],
        skilled_signs: &[
            "Works cooperatively with others across the organization to achieve shared objectives",
            "Represents own interests while being fair to others and their areas",
            "Partners with others to get work done and recognizes their contributions",
            "Gains trust and support of others",
        ],
        unskilled_signs: &[
            "Overlooks opportunities to work collaboratively with others",
            "Puts own interests above others'",
            "Shuts down lines of communication across groups",
            "Prefers to work alone and be accountable only for individual contributions",
        ],
    },
    BuiltinCompetency {
        name: "Communicates Effectively",
        description: "Developing and delivering multi-mode communications that convey a clear understanding of the unique needs of different audiences.",
        questions: &[
            "Tell me about a time when you had to explain something important to someone who did not understand your industry or function's language or work.",
            "Describe the best presentation you've ever given.",
            "Tell me about a time when others were missing the key points in a discussion and you helped get things back on track.",
            "Tell me about a time you had to shut off a person in the middle of a meeting or who was talking too much or interrupting.",
            "Describe a time you had to convey the same message through different methods of communication.",
            "Explain a situation where you had to adjust your communication style to suit the audience.",
            "Tell me about a time when you used data or evidence to support your message.",
            "Describe a time when you had to persuade someone to see things your way.",
        ],
        skilled_signs: &[
            "Is effective in a variety of communication settings",
            "Attentively listens to others",
            "Adjusts to fit the audience and the message",
            "Provides timely and helpful information to others",
            "Encourages the open expression of diverse ideas and opinions",
        ],
        unskilled_signs: &[
            "Has difficulty communicating clear written and verbal messages",
            "Tends to always communicate the same way without adjusting to diverse audiences",
            "Doesn't take the time to listen or understand others' viewpoints",
            "Doesn't consistently share information others need to do their jobs",
        ],
    },
    BuiltinCompetency {
        name: "Customer Focus",
        description: "Building strong customer relationships and delivering customer-centric solutions.",
        questions: &[
            "Describe a time you obtained up-to-date information from a customer, and what you did with it.",
            "Tell me about a time when you went the extra mile for a challenging customer.",
            "Tell me about a time you were confronted with an internal or external customer problem.",
            "Tell me about a time when you almost lost a customer and had to win them back.",
            "Tell me about a time when you changed your approach to better meet a customer's needs.",
            "Describe a time when you gathered customer feedback and how you used it.",
            "Tell me about a time you had to manage a customer's expectations.",
            "Explain a situation where you turned an unhappy customer into a satisfied one.",
        ],
        skilled_signs: &[
            "Gains insight into customer needs",
            "Identifies opportunities that benefit both the customer and the organization",
            "Builds and delivers solutions that meet customer expectations",
            "Establishes and maintains effective customer relationships",
        ],
        unskilled_signs: &[
            "Thinks they already know what the customer needs",
            "Doesn't consider customer feedback important",
            "Doesn't dedicate enough time to building relationships with customers",
            "Focuses on internal activities instead of the customer",
        ],
    },
    BuiltinCompetency {
        name: "Decision Quality",
        description: "Making good and timely decisions that keep the organization moving forward.",
        questions: &[
            "Describe a time you had to make a quick decision and gather a lot of information in a short time frame.",
            "Give me an example of a difficult problem you worked on and walk me through your decision-making process.",
            "Describe a time when you made a major decision and were really pleased with the outcome.",
            "Tell me about a quick decision you made that turned out to be a good one.",
            "Describe a time when you received useful feedback on a decision you made.",
            "Tell me about a time when you had to decide between two equally qualified candidates.",
            "Explain a situation where you had to make a decision with incomplete information.",
            "Describe a time when you changed your mind about a decision and what prompted the change.",
        ],
        skilled_signs: &[
            "Makes sound decisions, even in the absence of complete information",
            "Relies on experience, analysis, and judgment when making decisions",
            "Considers all relevant factors and uses appropriate decision-making criteria",
            "Recognizes when a quick 80% solution will suffice",
        ],
        unskilled_signs: &[
            "Approaches decisions haphazardly or delays decision making",
            "Makes decisions based on incomplete data or inaccurate assumptions",
            "Ignores different points of view",
            "Makes decisions that impact short-term results at the expense of longer-term goals",
        ],
    },
    BuiltinCompetency {
        name: "Drives Results",
        description: "Consistently achieving results, even under tough circumstances.",
        questions: &[
            "Describe a time you championed a cause that others had abandoned.",
            "Tell me about a time you got results that far exceeded your own expectations.",
            "Tell me about a time you got results even though some major factor changed, such as a budget cut.",
            "Describe a time when you drove yourself harder than you were driving others.",
            "Talk about a time you were assigned to a fix-it or turnaround project.",
            "Explain a situation where you had to overcome significant obstacles to achieve a goal.",
            "Describe a time when your persistence paid off in achieving a difficult objective.",
            "Tell me about a time you had to motivate others to achieve results.",
        ],
        skilled_signs: &[
            "Has a strong bottom-line orientation",
            "Persists in accomplishing objectives despite obstacles and setbacks",
            "Has a track record of exceeding goals successfully",
            "Pushes self and helps others achieve results",
        ],
        unskilled_signs: &[
            "Is reluctant to push for results",
            "Does the least to get by",
            "Is an inconsistent performer",
            "Gives up easily",
            "Often misses deadlines",
        ],
    },
    BuiltinCompetency {
        name: "Strategic Mindset",
        description: "Seeing ahead to future possibilities and translating them into breakthrough strategies.",
        questions: &[
            "Give me an example of working with a team and creating a new vision and strategy.",
            "Give me an example of exploring various scenarios and possibilities when charting a course for the future.",
            "Tell me about a time when your strategic vision or big-picture thinking was an asset.",
            "Tell me about a time you were implementing a strategy and had to revise it mid-process due to changes in the environment.",
            "Describe a time you had to develop a strategy that would create value for your organization or customers.",
            "Explain a situation where you had to align your team's goals with the organization's strategic objectives.",
            "Tell me about a time when you identified a long-term opportunity and acted on it.",
            "Describe a time when you had to convince others to buy into your strategic vision.",
        ],
        skilled_signs: &[
            "Anticipates future trends and implications accurately",
            "Readily poses future scenarios",
            "Articulates credible pictures and visions of possibilities",
            "Creates competitive and breakthrough strategies",
        ],
        unskilled_signs: &[
            "Is more comfortable in the tactical here and now",
            "Spends little time thinking about strategic issues",
            "Contributes little to strategic discussions",
            "Lacks the disciplined thought processes to develop a coherent view",
        ],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_entries() -> BTreeMap<String, CompetencyEntry> {
    BUILTIN
        .iter()
        .map(|c| {
            (
                c.name.to_string(),
                CompetencyEntry {
                    description: c.description.to_string(),
                    questions: owned(c.questions),
                    skilled_signs: owned(c.skilled_signs),
                    unskilled_signs: owned(c.unskilled_signs),
                },
            )
        })
        .collect()
}
