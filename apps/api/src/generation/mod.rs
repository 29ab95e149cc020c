// Generation Adapter: prompt construction, LLM call and typed parsing for
// life timelines and career roadmaps, plus the HTTP handlers that drive it.
// All LLM calls go through llm_client; nothing here talks to a vendor API.

pub mod career;
pub mod handlers;
pub mod prompts;
pub mod timeline;
