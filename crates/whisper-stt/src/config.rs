//! Configuration for WhisperStt.

use std::env;

/// Default OpenAI API URL.
pub const DEFAULT_API_URL: &str = "https://api.openai.com";

/// Default transcription model.
pub const DEFAULT_MODEL: &str = "whisper-1";

/// Default language hint; the companion converses in Korean.
pub const DEFAULT_LANGUAGE: &str = "ko";

/// Configuration for WhisperStt.
#[derive(Debug, Clone)]
pub struct WhisperSttConfig {
    /// OpenAI API URL.
    pub api_url: String,

    /// API key for authentication. Empty means no credential, which puts
    /// transcription in canned-transcript mode.
    pub api_key: String,

    /// Transcription model id.
    pub model: String,

    /// ISO-639-1 language hint passed with every request.
    pub language: String,
}

impl Default for WhisperSttConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl WhisperSttConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `OPENAI_API_KEY` - API key; when unset, transcription returns a
    ///   canned transcript instead of calling out
    /// - `OPENAI_API_URL` - API URL (default: https://api.openai.com)
    /// - `WHISPER_MODEL` - Transcription model (default: whisper-1)
    /// - `WHISPER_LANGUAGE` - Language hint (default: ko)
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

        let api_url = env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("WHISPER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let language = env::var("WHISPER_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        Self {
            api_url,
            api_key,
            model,
            language,
        }
    }

    /// Whether an API credential is configured.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Create a new config builder.
    pub fn builder() -> WhisperSttConfigBuilder {
        WhisperSttConfigBuilder::default()
    }
}

/// Builder for WhisperSttConfig.
#[derive(Debug, Default)]
pub struct WhisperSttConfigBuilder {
    config: WhisperSttConfig,
}

impl WhisperSttConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the transcription model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the language hint.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> WhisperSttConfig {
        self.config
    }
}
