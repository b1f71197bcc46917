// HTTP client for the Groq API

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::types::{ChatCompletionRequest, ChatCompletionResponse};

const GROQ_API_BASE_URL: &str = "https://api.groq.com/openai/v1";
const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, GROQ_API_BASE_URL.to_string())
    }

    /// Client against a non-default endpoint. Used by tests to point at a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Send a chat completion request and return the assistant's reply text.
    pub async fn chat_completion(&self, request: &ChatCompletionRequest) -> Result<String> {
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to Groq API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Groq API request failed: status {}, body: {}", status, error_body);
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse Groq API response")?;

        tracing::debug!(id = %completion.id, "Received completion");

        completion
            .text()
            .map(str::to_string)
            .context("Groq API response contained no completion choices")
    }
}
