// Post generation: prompt rendering, completion call, post-processing.
// All completion calls go through llm_client.

pub mod formatter;
pub mod generator;
pub mod prompts;
pub mod tone;
