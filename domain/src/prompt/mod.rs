//! Prompt construction for panel and synthesis calls

pub mod template;

pub use template::PromptTemplate;
