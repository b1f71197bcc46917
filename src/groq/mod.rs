// Groq completion API client
// OpenAI-compatible chat completions, no streaming, single candidate

mod client;
mod types;

pub use client::GroqClient;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, Usage};
