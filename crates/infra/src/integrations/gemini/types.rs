//! Wire types for the Gemini `generateContent` endpoint

use rizzmaster_domain::{BioDraft, ReplySuggestions, RizzError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Errors from the generation adapter
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Transport failure (connect, timeout, retries exhausted)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limit exceeded")]
    RateLimit,

    /// Missing or rejected API key
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The prompt or the answer was blocked by the provider's safety filter.
    #[error("Response blocked: {0}")]
    Blocked(String),

    /// Body or candidate text doesn't match the requested schema
    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),
}

impl From<GenerationError> for RizzError {
    fn from(value: GenerationError) -> Self {
        RizzError::Generation(value.to_string())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationSettings,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), inline_data: None }
    }

    pub fn image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type: mime_type.into(), data: data.into() }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    /// Base64 payload without the `data:` prefix.
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationSettings {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn text(self) -> Result<String, GenerationError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenerationError::Blocked(reason));
        }
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidSchema("Response contained no candidates".into()))?;

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_default();
            if matches!(reason.as_str(), "SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST") {
                return Err(GenerationError::Blocked(reason));
            }
            return Err(GenerationError::InvalidSchema("Candidate contained no text".into()));
        }
        Ok(text)
    }
}

/// Candidate JSON for chat mode. The score is taken as any integer and
/// clamped, since the model does not always respect the stated range.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawReplies {
    pub tease: String,
    pub smooth: String,
    pub chaotic: String,
    #[serde(default)]
    pub analysis: String,
    pub love_score: i64,
    pub potential_status: String,
}

impl From<RawReplies> for ReplySuggestions {
    fn from(raw: RawReplies) -> Self {
        Self {
            tease: raw.tease,
            smooth: raw.smooth,
            chaotic: raw.chaotic,
            analysis: raw.analysis,
            love_score: raw.love_score.clamp(0, 100) as u8,
            potential_status: raw.potential_status,
        }
    }
}

pub(crate) fn parse_replies(text: &str) -> Result<ReplySuggestions, GenerationError> {
    serde_json::from_str::<RawReplies>(text)
        .map(ReplySuggestions::from)
        .map_err(|e| GenerationError::InvalidSchema(format!("Failed to parse replies: {e}")))
}

pub(crate) fn parse_bio(text: &str) -> Result<BioDraft, GenerationError> {
    serde_json::from_str(text)
        .map_err(|e| GenerationError::InvalidSchema(format!("Failed to parse bio: {e}")))
}
