//! Builtin phrase pools the synthesizer draws from. Pools are fixed for the
//! process lifetime; selection is uniform with replacement, so repeated
//! fragments across calls are expected.

const COMMENT_STARTERS: &[&str] = &[
    "I know",
    "I think",
    "In my opinion",
    "Based on my analysis",
    "After reviewing this",
    "Looking at the details",
    "From my perspective",
    "Considering the scope",
    "Having examined this",
    "Upon careful review",
    "From what I can see",
    "After discussion with the team",
    "Based on initial assessment",
];

const COMMENT_OPINIONS: &[&str] = &[
    "this is a solid proposal",
    "this looks promising",
    "this needs more work",
    "this is well thought out",
    "this requires further discussion",
    "this aligns with our goals",
    "this raises some concerns",
    "this is exactly what we need",
    "this could use some refinement",
    "this is a step in the right direction",
    "this needs clarification",
];

const COMMENT_CONCERNS: &[&str] = &[
    "you are so wrong it hurts",
    "the timeline seems tight",
    "we should consider the budget implications",
    "the resource allocation needs review",
    "dependencies aren't clearly defined",
    "we need more stakeholder input",
    "the testing strategy is unclear",
    "migration path should be documented",
    "rollback plan is missing",
    "performance impact needs assessment",
    "security considerations are important",
    "we should validate with the architecture team",
    "documentation requirements are unclear",
];

const COMMENT_QUESTIONS: &[&str] = &[
    "What's the expected timeline?",
    "Who will be responsible for implementation?",
    "Have we considered alternatives?",
    "What are the success metrics?",
    "How does this affect existing workflows?",
    "What's the estimated cost?",
    "Are there any blockers?",
    "What's the rollback strategy?",
    "How will this be tested?",
    "What about backwards compatibility?",
    "Have stakeholders been consulted?",
    "What's the maintenance plan?",
];

const COMMENT_ACTIONS: &[&str] = &[
    "I would propose you quit.",
    "Let's schedule a meeting to discuss.",
    "I'll review this in detail and follow up.",
    "We should get input from other teams.",
    "I can help with the implementation.",
    "Let me check with the management team.",
    "I'll prepare a detailed analysis.",
    "We need to document this better.",
    "Let's create a proof of concept first.",
    "I'll coordinate with the relevant stakeholders.",
    "We should break this into smaller tasks.",
];

const REPLY_ACKNOWLEDGMENTS: &[&str] = &[
    "Now get back to work.",
    "Thanks for the feedback!",
    "Good point!",
    "I appreciate your input.",
    "That's a valid concern.",
    "Great observation!",
    "Thanks for raising this.",
    "I'm glad you mentioned that.",
    "Excellent question!",
    "Fair point.",
    "You're absolutely right.",
    "Thanks for the detailed review!",
];

const REPLY_RESPONSES: &[&str] = &[
    "I've updated the proposal to address this",
    "Let me clarify that section",
    "That's already covered in the documentation",
    "I'll add more details about this",
    "We discussed this with the team and",
    "I've been working on that aspect",
    "That's on our roadmap for the next phase",
    "We can definitely include that",
    "I'll coordinate with the relevant team on this",
    "Let me investigate and get back to you",
];

const REPLY_FOLLOW_UPS: &[&str] = &[
    "You are lucky if I respond.",
    "I'll share an update by end of week.",
    "Let me know if you need more information.",
    "Feel free to reach out if you have questions.",
    "I'll schedule a follow-up meeting.",
    "We can discuss this in more detail offline.",
    "I'll prepare a detailed document.",
    "Happy to hop on a call to discuss.",
    "I'll keep you posted on progress.",
    "Let me know your thoughts on the revised version.",
    "Looking forward to your feedback.",
];

const TECHNICAL_TOPICS: &[&str] = &[
    "deleting prod",
    "force pushing master",
    "addign a bitcoin miner to the code",
    "database migration",
    "API integration",
    "authentication flow",
    "caching strategy",
    "error handling",
    "logging infrastructure",
    "monitoring setup",
    "deployment pipeline",
    "data validation",
    "permission model",
    "search functionality",
    "notification system",
    "indexing strategy",
    "backup procedures",
    "scalability concerns",
    "load balancing",
];

/// Named fragment pools, built once at startup and borrowed by the
/// synthesizer for the rest of the run.
#[derive(Debug, Clone)]
pub struct PhraseBank {
    pub starters: &'static [&'static str],
    pub opinions: &'static [&'static str],
    pub concerns: &'static [&'static str],
    pub questions: &'static [&'static str],
    pub actions: &'static [&'static str],
    pub acknowledgments: &'static [&'static str],
    pub responses: &'static [&'static str],
    pub follow_ups: &'static [&'static str],
    pub topics: &'static [&'static str],
}

impl PhraseBank {
    pub fn builtin() -> Self {
        Self {
            starters: COMMENT_STARTERS,
            opinions: COMMENT_OPINIONS,
            concerns: COMMENT_CONCERNS,
            questions: COMMENT_QUESTIONS,
            actions: COMMENT_ACTIONS,
            acknowledgments: REPLY_ACKNOWLEDGMENTS,
            responses: REPLY_RESPONSES,
            follow_ups: REPLY_FOLLOW_UPS,
            topics: TECHNICAL_TOPICS,
        }
    }
}
