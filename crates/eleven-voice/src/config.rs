//! Configuration for ElevenVoice.

use std::env;

/// Default ElevenLabs API URL.
pub const DEFAULT_API_URL: &str = "https://api.elevenlabs.io";

/// Default synthesis model; multilingual, handles Korean.
pub const DEFAULT_TTS_MODEL: &str = "eleven_multilingual_v2";

/// Configuration for ElevenVoice.
#[derive(Debug, Clone)]
pub struct ElevenVoiceConfig {
    /// ElevenLabs API URL.
    pub api_url: String,

    /// API key for authentication. Empty means no credential: synthesis
    /// returns silent clips and cloning is refused.
    pub api_key: String,

    /// Synthesis model id.
    pub tts_model: String,

    /// Voice stability setting (0.0 - 1.0).
    pub stability: f32,

    /// Similarity boost setting (0.0 - 1.0).
    pub similarity_boost: f32,
}

impl Default for ElevenVoiceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

impl ElevenVoiceConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ELEVENLABS_API_KEY` - API key; when unset, synthesis degrades to
    ///   silent clips and cloning is refused
    /// - `ELEVENLABS_API_URL` - API URL (default: https://api.elevenlabs.io)
    /// - `ELEVENLABS_TTS_MODEL` - Synthesis model (default: eleven_multilingual_v2)
    pub fn from_env() -> Self {
        let api_key = env::var("ELEVENLABS_API_KEY").unwrap_or_default();

        let api_url =
            env::var("ELEVENLABS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let tts_model =
            env::var("ELEVENLABS_TTS_MODEL").unwrap_or_else(|_| DEFAULT_TTS_MODEL.to_string());

        Self {
            api_url,
            api_key,
            tts_model,
            ..Self::default()
        }
    }

    /// Whether an API credential is configured.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Create a new config builder.
    pub fn builder() -> ElevenVoiceConfigBuilder {
        ElevenVoiceConfigBuilder::default()
    }
}

/// Builder for ElevenVoiceConfig.
#[derive(Debug, Default)]
pub struct ElevenVoiceConfigBuilder {
    config: ElevenVoiceConfig,
}

impl ElevenVoiceConfigBuilder {
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

    /// Set the synthesis model.
    pub fn tts_model(mut self, model: impl Into<String>) -> Self {
        self.config.tts_model = model.into();
        self
    }

    /// Set the voice stability.
    pub fn stability(mut self, stability: f32) -> Self {
        self.config.stability = stability;
        self
    }

    /// Set the similarity boost.
    pub fn similarity_boost(mut self, boost: f32) -> Self {
        self.config.similarity_boost = boost;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ElevenVoiceConfig {
        self.config
    }
}
