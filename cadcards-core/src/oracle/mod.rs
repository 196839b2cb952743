//! Cadcards Oracle - optional generative flavor content
//!
//! Four functions sit on top of a text/image backend:
//! - category lore (a two-sentence boot log shown under each tab)
//! - field-code decoding (surveyor shorthand to plain language)
//! - project scope narratives
//! - staff avatar images
//!
//! None of them fail. Without an API key every function returns a visible
//! "offline" result; backend errors become inline failure messages.
//!
//! ## Configuration
//!
//! Settings in `~/.config/cadcards/oracle/config.json`:
//! ```json
//! {"model": "gemini-2.5-flash", "api_key_env": "API_KEY", "timeout_seconds": 10}
//! ```

pub mod backend;
pub mod config;
pub mod prompts;
pub mod types;

#[cfg(feature = "oracle")]
pub mod gemini;

pub use backend::OracleBackend;
pub use config::{default_oracle_dir, OracleConfig};
pub use types::{
    AvatarResult, FieldCodeDecoding, GeneratedImage, TextRequest, LORE_EMPTY_MESSAGE,
    LORE_FAILED_MESSAGE, OFFLINE_MESSAGE, SCOPE_FAILED_MESSAGE,
};

use tracing::{debug, info, warn};

use crate::catalog::Category;
use crate::directory::{Department, Project};

/// Generative service front door
pub struct Oracle {
    config: OracleConfig,
    backend: Option<Box<dyn OracleBackend>>,
}

impl Oracle {
    /// Build from configuration
    ///
    /// Never fails: a disabled config, an unknown backend or a missing API
    /// key all leave the oracle offline.
    pub fn new(config: OracleConfig) -> Self {
        if !config.enabled {
            debug!("Oracle is disabled");
            return Self::offline(config);
        }

        if config.dry_run {
            info!(
                "Oracle resolved config (dry_run=true): backend={}, model={}, image_model={}, timeout={}s, api_key_env={}",
                config.backend, config.model, config.image_model, config.timeout_seconds, config.api_key_env
            );
            return Self::offline(config);
        }

        #[cfg(feature = "oracle")]
        {
            let backend: anyhow::Result<Box<dyn OracleBackend>> = match config.backend.as_str() {
                "gemini" => gemini::GeminiBackend::new(&config)
                    .map(|b| Box::new(b) as Box<dyn OracleBackend>),
                other => Err(anyhow::anyhow!("Unknown oracle backend: {other}")),
            };

            match backend {
                Ok(backend) => {
                    info!(
                        "Oracle online with {} backend (model: {})",
                        backend.name(),
                        config.model
                    );
                    Self {
                        config,
                        backend: Some(backend),
                    }
                }
                Err(e) => {
                    info!("Oracle offline: {e}");
                    Self::offline(config)
                }
            }
        }

        #[cfg(not(feature = "oracle"))]
        {
            warn!("Oracle is enabled in config but the 'oracle' feature is not compiled in");
            Self::offline(config)
        }
    }

    /// Use a specific backend regardless of configuration
    pub fn with_backend(config: OracleConfig, backend: Box<dyn OracleBackend>) -> Self {
        Self {
            config,
            backend: Some(backend),
        }
    }

    fn offline(config: OracleConfig) -> Self {
        Self {
            config,
            backend: None,
        }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Whether calls will reach a backend
    pub fn is_online(&self) -> bool {
        self.backend.is_some()
    }

    fn is_dry_run(&self) -> bool {
        self.config.enabled && self.config.dry_run
    }

    fn log_dry_run(&self, what: &str, prompt: &str) {
        info!(
            "Oracle dry_run: would send {what} request ({} chars): {}...",
            prompt.len(),
            prompt.chars().take(200).collect::<String>()
        );
    }

    /// Override the text model at runtime
    pub fn override_model(&mut self, model: String) {
        if let Some(backend) = self.backend.as_mut() {
            backend.override_model(model.clone());
        }
        self.config.model = model;
    }

    /// Two-sentence boot log for a category
    pub async fn category_lore(&self, category: Category) -> String {
        let request = prompts::lore_request(category);
        if self.is_dry_run() {
            self.log_dry_run("lore", &request.prompt);
            return format!("dry_run: lore for {category} would be generated");
        }
        let Some(backend) = &self.backend else {
            return OFFLINE_MESSAGE.to_string();
        };

        match backend.generate_text(request).await {
            Ok(text) if text.trim().is_empty() => LORE_EMPTY_MESSAGE.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Oracle lore error: {e}");
                LORE_FAILED_MESSAGE.to_string()
            }
        }
    }

    /// Translate a surveying field code; blank input is not sent
    pub async fn decode_field_code(&self, code: &str) -> Option<FieldCodeDecoding> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }

        let request = prompts::decode_request(code);
        if self.is_dry_run() {
            self.log_dry_run("decode", &request.prompt);
            return Some(FieldCodeDecoding::dry_run(code));
        }
        let Some(backend) = &self.backend else {
            return Some(FieldCodeDecoding::offline());
        };

        let decoded = match backend.generate_text(request).await {
            Ok(text) => serde_json::from_str::<FieldCodeDecoding>(prompts::strip_code_fences(&text))
                .map_err(|e| anyhow::anyhow!("unparseable decode response: {e}")),
            Err(e) => Err(e),
        };

        Some(decoded.unwrap_or_else(|e| {
            warn!("Oracle decode error: {e}");
            FieldCodeDecoding::failed()
        }))
    }

    /// Scope-of-work narrative for a project
    pub async fn project_scope(&self, project: &Project) -> String {
        let request = prompts::scope_request(project);
        if self.is_dry_run() {
            self.log_dry_run("scope", &request.prompt);
            return format!("dry_run: scope for {} would be generated", project.id);
        }
        let Some(backend) = &self.backend else {
            return OFFLINE_MESSAGE.to_string();
        };

        match backend.generate_text(request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => SCOPE_FAILED_MESSAGE.to_string(),
            Err(e) => {
                warn!("Oracle scope error: {e}");
                SCOPE_FAILED_MESSAGE.to_string()
            }
        }
    }

    /// Stylized avatar for a staff member
    pub async fn avatar(&self, description: &str, department: Option<Department>) -> AvatarResult {
        let prompt = prompts::avatar_prompt(description, department);
        if self.is_dry_run() {
            self.log_dry_run("avatar", &prompt);
            return AvatarResult::Unavailable("dry_run: image generation skipped".to_string());
        }
        let Some(backend) = &self.backend else {
            return AvatarResult::Unavailable(OFFLINE_MESSAGE.to_string());
        };

        match backend.generate_image(&prompt).await {
            Ok(image) => AvatarResult::Image(image),
            Err(e) => {
                warn!("Oracle avatar error: {e}");
                AvatarResult::Unavailable(format!("Avatar generation failed: {e}"))
            }
        }
    }
}
