// Turn handling
//
// One invocation per inbound user message: append the user turn, send the
// system instruction plus the full transcript to the completion API, append
// whatever comes back. Failures become ordinary assistant content so the
// conversation never crashes; the error kind rides along for the UI layer.

mod transcript;

pub use transcript::{Role, Transcript, Turn};

use serde::Serialize;

use crate::groq::{ChatCompletionRequest, ChatMessage, GroqClient};

/// Reply shown to the user when no API key was available at startup.
pub const CLIENT_NOT_INITIALIZED_REPLY: &str =
    "The Groq client is not initialized. Cannot generate a response.";

/// Failure class of a turn, for notification styling. The reply text itself
/// is already in the transcript either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnErrorKind {
    /// No API key at startup; every turn short-circuits
    ClientNotInitialized,
    /// The completion call failed (network, auth, quota)
    Api,
}

/// Outcome of one turn. `text` has already been appended to the transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TurnReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TurnErrorKind>,
}

/// Shared per-process chat engine: the optional client, the model id, and
/// the system instruction computed once at startup.
pub struct ChatEngine {
    client: Option<GroqClient>,
    model: String,
    system_prompt: String,
}

impl ChatEngine {
    pub fn new(client: Option<GroqClient>, model: String, system_prompt: String) -> Self {
        Self {
            client,
            model,
            system_prompt,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Handle one user submission.
    ///
    /// Always appends exactly two turns: the user's input and the reply (or
    /// failure text). Never returns an error — the never-crash guarantee of
    /// the chat surface lives here.
    pub async fn handle_turn(&self, transcript: &mut Transcript, user_input: &str) -> TurnReply {
        transcript.push(Turn::user(user_input));

        let reply = match &self.client {
            None => TurnReply {
                text: CLIENT_NOT_INITIALIZED_REPLY.to_string(),
                error: Some(TurnErrorKind::ClientNotInitialized),
            },
            Some(client) => {
                let request =
                    ChatCompletionRequest::new(&self.model, self.build_messages(transcript));
                match client.chat_completion(&request).await {
                    Ok(text) => TurnReply { text, error: None },
                    Err(e) => {
                        tracing::error!("Completion call failed: {e:#}");
                        TurnReply {
                            text: format!(
                                "An error occurred while communicating with the Groq API. \
                                 This could be a connectivity issue or an invalid API key. \
                                 Error: {e}"
                            ),
                            error: Some(TurnErrorKind::Api),
                        }
                    }
                }
            }
        };

        transcript.push(Turn::assistant(reply.text.clone()));
        reply
    }

    /// The full message list for one API call: the system instruction
    /// followed by every stored turn, unfiltered. No truncation of long
    /// histories.
    fn build_messages(&self, transcript: &Transcript) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(ChatMessage::system(&self.system_prompt));
        for turn in transcript.turns() {
            messages.push(ChatMessage::new(turn.role.as_str(), &turn.content));
        }
        messages
    }
}
