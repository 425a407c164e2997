// Brand voice: analysis of free text into a profile, profile into a Markdown
// guide, and guide + request into on-brand content.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
