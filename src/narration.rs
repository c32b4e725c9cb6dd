//! Narration request client for the AI gateway.
//!
//! Sends resolved site text plus a per-language instruction to the
//! chat-completions gateway and returns the generated narration. Exactly one
//! attempt is made per invocation; retry policy belongs to the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::GuideError;
use crate::i18n::Language;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Narration generated for one language, cached per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationResult {
    pub language: Language,
    pub narrated_text: String,
}

/// Build the system prompt steering the gateway toward spoken narration.
///
/// Hindi and Telugu prompts also ask for translation; English content is
/// narrated as-is.
fn build_narration_system_prompt(language: Language) -> &'static str {
    match language {
        Language::English => {
            "You are a helpful tour guide. Provide a natural, conversational narration \
             of the following text suitable for audio playback."
        }
        Language::Hindi => {
            "You are a helpful tour guide. Translate the following text to Hindi and \
             provide a natural, conversational narration suitable for audio playback."
        }
        Language::Telugu => {
            "You are a helpful tour guide. Translate the following text to Telugu and \
             provide a natural, conversational narration suitable for audio playback."
        }
    }
}

/// Request generated narration for `text` in `language`.
///
/// All failure modes surface as [`GuideError::NarrationFailed`] carrying the
/// underlying cause: missing credential (checked before any network use),
/// network failure, non-success status, or a response without choices.
pub async fn narrate(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    language: Language,
) -> std::result::Result<String, GuideError> {
    request_narration(client, config, text, language)
        .await
        .map_err(GuideError::NarrationFailed)
}

async fn request_narration(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    language: Language,
) -> Result<String> {
    let api_key = config
        .narration_api_key
        .as_deref()
        .context("NARRATION_API_KEY is not configured")?;

    let request = ChatRequest {
        model: config.narration_model.clone(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: build_narration_system_prompt(language).to_string(),
            },
            Message {
                role: "user".to_string(),
                content: text.to_string(),
            },
        ],
    };

    debug!(
        "Requesting {} narration from {}",
        language.name(),
        config.narration_api_url
    );

    let response = client
        .post(&config.narration_api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .context("Failed to send narration request to AI gateway")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        anyhow::bail!("AI gateway error ({}): {}", status, body);
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .context("Failed to parse narration response")?;

    let narrated = chat_response
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .context("Narration response contained no choices")?;

    Ok(narrated)
}
