pub mod client;
pub mod llm;
