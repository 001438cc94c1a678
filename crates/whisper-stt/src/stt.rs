//! WhisperStt implementation using the OpenAI transcription API.

use care_core::{async_trait, ProviderError, Transcriber};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::WhisperSttConfig;

/// Canned transcript served when no API credential is configured.
pub const MOCK_TRANSCRIPT: &str = "엄마, 오늘 날씨가 참 좋네요. 산책 다녀오셨어요?";

/// File name attached to the transcription upload.
const AUDIO_FILE_NAME: &str = "audio.webm";

/// Transcription response body.
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Speech-to-text backed by OpenAI Whisper.
pub struct WhisperStt {
    client: Client,
    config: WhisperSttConfig,
}

impl WhisperStt {
    /// Create a new WhisperStt with the given configuration.
    pub fn new(config: WhisperSttConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().build().map_err(|e| {
            ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
        })?;

        if config.has_credentials() {
            info!("WhisperStt initialized, model: {}", config.model);
        } else {
            info!("WhisperStt initialized without credentials, serving canned transcripts");
        }

        Ok(Self { client, config })
    }

    /// Create a WhisperStt from environment variables.
    ///
    /// See [`WhisperSttConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(WhisperSttConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &WhisperSttConfig {
        &self.config
    }
}

#[async_trait]
impl Transcriber for WhisperStt {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, ProviderError> {
        if !self.config.has_credentials() {
            debug!("No API credential configured, returning canned transcript");
            return Ok(MOCK_TRANSCRIPT.to_string());
        }

        let url = format!("{}/v1/audio/transcriptions", self.config.api_url);

        let form = Form::new()
            .part(
                "file",
                Part::bytes(audio.to_vec()).file_name(AUDIO_FILE_NAME),
            )
            .text("model", self.config.model.clone())
            .text("language", self.config.language.clone());

        debug!("Transcribing {} bytes of audio", audio.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Transcription failed with HTTP {}: {}", status, message);
            return Err(ProviderError::from_status(status.as_u16(), message));
        }

        let transcription: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("Failed to parse response: {}", e)))?;

        debug!("Transcribed to {} chars", transcription.text.len());
        Ok(transcription.text)
    }
}
