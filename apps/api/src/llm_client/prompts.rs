// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt used for every single-shot assist call.
pub const COACH_SYSTEM: &str = "You are an expert interview coach specializing in the STAR method \
    (Situation, Task, Action, Result). Write in plain text without markdown headings.";

/// System prompt for the free-form coaching conversation.
pub const CHAT_SYSTEM: &str = "You are a helpful interview coach specializing in the STAR method. \
    Answer the user's questions concisely and provide actionable advice related to crafting STAR stories.";
