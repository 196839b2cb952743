//! Oracle backend trait - abstraction over generative providers
//!
//! - Gemini (HTTP API)
//! - Mock (testing)

use anyhow::Result;
use async_trait::async_trait;

use super::types::{GeneratedImage, TextRequest};

/// Trait for generative backends
///
/// Implementations handle their own timeouts and report failures as errors;
/// the [`Oracle`](super::Oracle) turns those into fail-soft results.
#[async_trait]
pub trait OracleBackend: Send + Sync {
    /// Generate text; JSON text when the request carries a schema
    async fn generate_text(&self, request: TextRequest) -> Result<String>;

    /// Generate a single image from a prompt
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;

    /// Override the text model at runtime (e.g. from a CLI flag)
    fn override_model(&mut self, model: String);
}

/// Mock backend for testing
#[cfg(test)]
pub struct MockBackend {
    /// `Err` strings become backend failures
    pub text: std::result::Result<String, String>,
    pub image: std::result::Result<GeneratedImage, String>,
}

#[cfg(test)]
impl MockBackend {
    pub fn answering(text: &str) -> Self {
        Self {
            text: Ok(text.to_string()),
            image: Ok(GeneratedImage {
                mime_type: "image/png".to_string(),
                data: vec![0x89, b'P', b'N', b'G'],
            }),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            text: Err(message.to_string()),
            image: Err(message.to_string()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl OracleBackend for MockBackend {
    async fn generate_text(&self, _request: TextRequest) -> Result<String> {
        self.text.clone().map_err(|e| anyhow::anyhow!(e))
    }

    async fn generate_image(&self, _prompt: &str) -> Result<GeneratedImage> {
        self.image.clone().map_err(|e| anyhow::anyhow!(e))
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn override_model(&mut self, _model: String) {
        // Mock doesn't use models
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend() {
        let backend = MockBackend::answering("Steam pressure nominal.");
        let text = backend
            .generate_text(TextRequest::new("anything"))
            .await
            .unwrap();
        assert_eq!(text, "Steam pressure nominal.");
        assert_eq!(backend.generate_image("x").await.unwrap().extension(), "png");

        let broken = MockBackend::failing("timeout");
        assert!(broken.generate_text(TextRequest::new("x")).await.is_err());
    }
}
