//! Gemini client producing reply suggestions and bios
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use rizzmaster_core::GenerationService;
use rizzmaster_domain::{
    GenerationConfig, GenerationRequest, GenerationResult, Result as DomainResult, RizzError,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::types::{
    parse_bio, parse_replies, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationError, GenerationSettings, Part,
};
use crate::http::{error_detail, HttpClient};

const SYSTEM_INSTRUCTION: &str = r#"Act as a world-class social coach and "Rizz" expert.
Your goal is to help users generate witty, charming, and high-engagement replies for dating apps (Tinder, Hinge, Bumble).

Tone & Style Guidelines:
- Be Human: Never sound like an AI. Use lowercase occasionally, modern slang (sparingly), and avoid "perfect" grammar.
- Be Witty: Prioritize humor, playful teasing (push-pull), and curiosity.
- Be Concise: Keep replies under 15 words. Short and punchy is better.
- Avoid Cringe: No cheesy pickup lines or overused compliments.

Love Meter Guidelines:
- loveScore: 0-100 based on the romantic tension and engagement in the conversation.
- potentialStatus: A short, witty 2-3 word label for the current vibe (e.g., "Ice Cold", "Spark Detected", "Nuclear Chemistry").

If the user asks for anything other than dating/social advice, politely decline and say: "I'm just the wingman, I don't do the heavy lifting. Give me a chat to look at!""#;

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// `GenerationService` backed by the Gemini REST API
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, http_client: HttpClient) -> Self {
        let defaults = GenerationConfig::default();
        Self { http_client, api_key: api_key.into(), model: defaults.model, api_url: defaults.api_url }
    }

    /// Build from config; fails when no API key is set.
    pub fn from_config(config: &GenerationConfig) -> DomainResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RizzError::Config("Generation API key is not configured".into()))?;
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .max_attempts(config.max_attempts.max(1) as usize)
            .build()?;
        Ok(Self::new(api_key, http_client)
            .with_model(config.model.clone())
            .with_api_url(config.api_url.clone()))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url.trim_end_matches('/'), self.model)
    }

    async fn generate_text(&self, parts: Vec<Part>, schema: Value) -> Result<String, GenerationError> {
        let payload = GenerateContentRequest {
            system_instruction: Content { role: None, parts: vec![Part::text(SYSTEM_INSTRUCTION)] },
            contents: vec![Content { role: Some("user".into()), parts }],
            generation_config: GenerationSettings {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let builder = self
            .http_client
            .request(Method::POST, self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload);

        let response = self.http_client.send(builder).await.map_err(|err| match err {
            RizzError::Network(msg) | RizzError::Internal(msg) => GenerationError::Network(msg),
            other => GenerationError::Network(other.to_string()),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), model = %self.model, "generation.response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_detail(&body).unwrap_or(body);
            return Err(match status.as_u16() {
                401 | 403 => GenerationError::Authentication(message),
                429 => GenerationError::RateLimit,
                code => GenerationError::Api { status: code, message },
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidSchema(format!("Failed to parse response: {e}")))?;
        body.text()
    }

    async fn generate_replies(
        &self,
        text: &str,
        image: Option<&str>,
    ) -> Result<GenerationResult, GenerationError> {
        let mut parts = vec![Part::text(format!(
            "Analyze this chat. Provide 3 replies AND a romantic potential analysis. Input: {text}"
        ))];
        if let Some((mime, data)) = image.and_then(split_data_url) {
            parts.push(Part::image(mime, data));
        }

        let raw = self.generate_text(parts, replies_schema()).await?;
        let replies = parse_replies(&raw)?;
        info!(love_score = replies.love_score, "generation.replies_ready");
        Ok(GenerationResult::Chat(replies))
    }

    async fn generate_bio(&self, about: &str) -> Result<GenerationResult, GenerationError> {
        let prompt = format!(
            "Write a dating app bio based on this info: {about}. Focus on \"Show, Don't Tell\"."
        );
        let raw = self.generate_text(vec![Part::text(prompt)], bio_schema()).await?;
        Ok(GenerationResult::Bio(parse_bio(&raw)?))
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> DomainResult<GenerationResult> {
        let result = match request {
            GenerationRequest::Chat { text, image } => {
                self.generate_replies(text, image.as_deref()).await
            }
            GenerationRequest::Bio { about } => self.generate_bio(about).await,
        };
        result.map_err(RizzError::from)
    }
}

/// Split `data:<mime>;base64,<payload>` into mime and payload. A bare
/// payload is taken as JPEG; blank input yields `None`.
fn split_data_url(image: &str) -> Option<(String, String)> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    match image.strip_prefix("data:").and_then(|rest| rest.split_once(',')) {
        Some((meta, payload)) => {
            let mime = meta.split(';').next().filter(|m| !m.is_empty()).unwrap_or(DEFAULT_IMAGE_MIME);
            Some((mime.to_string(), payload.to_string()))
        }
        None => Some((DEFAULT_IMAGE_MIME.to_string(), image.to_string())),
    }
}

fn replies_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tease": { "type": "STRING", "description": "A playful and slightly challenging reply." },
            "smooth": { "type": "STRING", "description": "A charming and direct reply." },
            "chaotic": { "type": "STRING", "description": "A funny, weird, or unexpected reply." },
            "analysis": { "type": "STRING", "description": "Short analysis of the vibe." },
            "loveScore": { "type": "INTEGER", "description": "0-100 score of romantic potential." },
            "potentialStatus": { "type": "STRING", "description": "Witty status label for the connection." }
        },
        "required": ["tease", "smooth", "chaotic", "loveScore", "potentialStatus"]
    })
}

fn bio_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "bio": { "type": "STRING", "description": "The crafted bio." },
            "analysis": { "type": "STRING", "description": "Why this bio works." }
        },
        "required": ["bio", "analysis"]
    })
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(api_url: String) -> GeminiClient {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .max_attempts(1)
            .build()
            .expect("http client");

        GeminiClient::new("test-api-key", http_client).with_api_url(api_url)
    }

    fn candidate(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        assert_eq!(
            split_data_url("data:image/png;base64,iVBORw0"),
            Some(("image/png".to_string(), "iVBORw0".to_string()))
        );
        assert_eq!(split_data_url("/9j/4AAQ"), Some(("image/jpeg".into(), "/9j/4AAQ".into())));
        assert_eq!(split_data_url("  "), None);
    }

    #[tokio::test]
    async fn chat_request_sends_inline_image_and_parses_replies() {
        let server = MockServer::start().await;
        let replies = r#"{"tease":"bold of you","smooth":"dinner?","chaotic":"i own 4 ducks","analysis":"warm","loveScore":72,"potentialStatus":"Spark Detected"}"#;
        Mock::given(method("POST"))
            .and(path("/models/gemini-3-flash-preview:generateContent"))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_partial_json(json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "text": "Analyze this chat. Provide 3 replies AND a romantic potential analysis. Input: hey" },
                        { "inlineData": { "mimeType": "image/jpeg", "data": "QUJD" } }
                    ]
                }],
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate(replies)))
            .expect(1)
            .mount(&server)
            .await;

        let request = GenerationRequest::Chat {
            text: "hey".into(),
            image: Some("data:image/jpeg;base64,QUJD".into()),
        };
        let result = test_client(server.uri()).generate(&request).await.unwrap();

        match result {
            GenerationResult::Chat(replies) => {
                assert_eq!(replies.love_score, 72);
                assert_eq!(replies.potential_status, "Spark Detected");
            }
            other => panic!("expected chat result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bio_request_parses_draft() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-3-flash-preview:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate(
                r#"{"bio":"climbs rocks, loses at chess","analysis":"shows range"}"#,
            )))
            .mount(&server)
            .await;

        let request = GenerationRequest::Bio { about: "climber".into() };
        let result = test_client(server.uri()).generate(&request).await.unwrap();

        assert!(matches!(result, GenerationResult::Bio(draft) if draft.bio.starts_with("climbs")));
    }

    #[tokio::test]
    async fn rejected_key_is_a_generation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
            })))
            .mount(&server)
            .await;

        let request = GenerationRequest::Bio { about: "x".into() };
        let err = test_client(server.uri()).generate(&request).await.unwrap_err();

        assert!(matches!(err, RizzError::Generation(msg) if msg.starts_with("Authentication failed")));
    }

    #[tokio::test]
    async fn malformed_candidate_is_a_schema_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate("not json")))
            .mount(&server)
            .await;

        let request = GenerationRequest::Chat { text: "hi".into(), image: None };
        let err = test_client(server.uri()).generate(&request).await.unwrap_err();

        assert!(matches!(err, RizzError::Generation(msg) if msg.contains("Invalid response schema")));
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = GenerationConfig::default();
        assert!(matches!(GeminiClient::from_config(&config), Err(RizzError::Config(_))));
    }
}
