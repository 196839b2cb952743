//! Gemini backend for the oracle
//!
//! Plain HTTP POSTs to the `generateContent` endpoint. Text and image
//! requests differ only in the model and in which response part is read.

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::backend::OracleBackend;
use super::config::OracleConfig;
use super::types::{GeneratedImage, TextRequest};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Clamp for `timeout_seconds`; generation needs time
const MIN_TIMEOUT_SECONDS: u64 = 5;

pub struct GeminiBackend {
    client: reqwest::Client,
    model: String,
    image_model: String,
    api_key: String,
}

impl GeminiBackend {
    /// Build a backend, reading the API key from `config.api_key_env`
    pub fn new(config: &OracleConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| {
                format!(
                    "Oracle requires the {} environment variable to be set",
                    config.api_key_env
                )
            })?;

        let timeout_seconds = if config.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                config.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            MIN_TIMEOUT_SECONDS
        } else {
            config.timeout_seconds
        };

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            model: config.model.clone(),
            image_model: config.image_model.clone(),
            api_key,
        })
    }

    async fn generate(&self, model: &str, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{API_BASE}/{model}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API error: {} - {}", status, body);
            return Err(anyhow::anyhow!("Gemini API error: {} - {}", status, body));
        }

        response
            .json()
            .await
            .context("Failed to parse Gemini response")
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    /// base64
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .into_iter()
            .flat_map(|c| c.content.parts.iter())
    }

    /// Concatenated text parts of the first candidate
    fn text(&self) -> String {
        self.parts()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }

    fn inline_data(&self) -> Option<&InlineData> {
        self.parts().find_map(|p| p.inline_data.as_ref())
    }
}

#[async_trait]
impl OracleBackend for GeminiBackend {
    async fn generate_text(&self, request: TextRequest) -> Result<String> {
        debug!("Oracle text request via Gemini ({})", self.model);

        let body = GenerateRequest {
            contents: vec![Content::text(&request.prompt)],
            system_instruction: request.system.as_deref().map(Content::text),
            generation_config: request.response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        };

        let response = self.generate(&self.model, &body).await?;
        let text = response.text();
        debug!("Oracle raw response: {}", text);
        Ok(text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        debug!("Oracle image request via Gemini ({})", self.image_model);

        let body = GenerateRequest {
            contents: vec![Content::text(prompt)],
            system_instruction: None,
            generation_config: None,
        };

        let response = self.generate(&self.image_model, &body).await?;
        let inline = response
            .inline_data()
            .context("No image data returned from generation service")?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .context("Image payload is not valid base64")?;

        Ok(GeneratedImage {
            mime_type: inline.mime_type.clone(),
            data,
        })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn override_model(&mut self, model: String) {
        self.model = model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let body = GenerateRequest {
            contents: vec![Content::text("hello")],
            system_instruction: Some(Content::text("be brief")),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({"type": "OBJECT"}),
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_none());
    }

    #[test]
    fn test_response_text_and_image_extraction() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Flux "},
                        {"text": "stable."},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw=="}}
                    ]
                }
            }]
        }))
        .unwrap();
        assert_eq!(response.text(), "Flux stable.");
        assert_eq!(response.inline_data().unwrap().mime_type, "image/png");
    }

    #[test]
    fn test_empty_response() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        assert!(response.inline_data().is_none());
    }
}
