//! Oracle types - requests to backends and the fail-soft results callers see

use serde::{Deserialize, Serialize};

/// Shown in place of generated text when no credentials are configured
pub const OFFLINE_MESSAGE: &str = "System Offline. Connect API Key to retrieve archive data.";

/// Lore fallback when the backend answers with nothing
pub const LORE_EMPTY_MESSAGE: &str = "Data corrupted.";

/// Lore fallback when the backend call fails
pub const LORE_FAILED_MESSAGE: &str = "Connection to mainframe interrupted.";

/// Scope fallback when the backend call fails
pub const SCOPE_FAILED_MESSAGE: &str = "Scope generation failed. Draft the narrative manually.";

/// A text generation request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextRequest {
    /// Optional system instruction
    pub system: Option<String>,
    pub prompt: String,
    /// When set, the backend must answer with JSON matching this schema
    pub response_schema: Option<serde_json::Value>,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Raw image bytes from an image backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// e.g. `image/png`
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl GeneratedImage {
    /// File extension matching the mime type
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}

/// Meaning of a land-surveying field code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCodeDecoding {
    /// Human-readable meaning
    pub description: String,
    /// Broad class: Monumentation, Topography, Utilities, ...
    pub category: String,
    /// 1-100, how standard the code is; 0 when decoding did not happen
    pub confidence: f64,
}

impl FieldCodeDecoding {
    /// Result when the backend failed or answered with something unusable
    pub fn failed() -> Self {
        Self {
            description: "Decryption Failed: Unknown Code Protocol".to_string(),
            category: "ERROR".to_string(),
            confidence: 0.0,
        }
    }

    /// Result when no backend is configured
    pub fn offline() -> Self {
        Self {
            description: OFFLINE_MESSAGE.to_string(),
            category: "OFFLINE".to_string(),
            confidence: 0.0,
        }
    }

    /// Result in dry_run mode; nothing was sent
    pub fn dry_run(code: &str) -> Self {
        Self {
            description: format!("dry_run: field code '{code}' would be decoded but the API call was skipped"),
            category: "DRY_RUN".to_string(),
            confidence: 0.0,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == "ERROR"
    }
}

/// Avatar generation never raises; callers get one of these
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarResult {
    Image(GeneratedImage),
    /// No image; the message says why
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_decoding_shape() {
        let failed = FieldCodeDecoding::failed();
        assert!(failed.is_error());
        assert_eq!(failed.confidence, 0.0);
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["description"], "Decryption Failed: Unknown Code Protocol");
    }

    #[test]
    fn test_decoding_parses_backend_json() {
        let parsed: FieldCodeDecoding = serde_json::from_str(
            r#"{"description": "Top of Curb", "category": "Topography", "confidence": 95}"#,
        )
        .unwrap();
        assert_eq!(parsed.category, "Topography");
        assert_eq!(parsed.confidence, 95.0);
    }

    #[test]
    fn test_image_extension() {
        let image = GeneratedImage {
            mime_type: "image/jpeg".to_string(),
            data: vec![],
        };
        assert_eq!(image.extension(), "jpg");
    }
}
