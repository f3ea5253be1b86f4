// Tone conversion service: persona selection, upstream call, post-processing and
// error classification. All LLM calls go through llm_client.

pub mod classify;
pub mod cleanup;
pub mod converter;
pub mod feedback;
pub mod handlers;
pub mod persona;
pub mod prompts;
