//! ElevenVoice implementation of synthesis and cloning.

use care_core::{async_trait, AudioClip, ProviderError, VoiceCloner, VoiceSynthesizer};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{AddVoiceResponse, ApiError, TtsRequest, VoiceSettings};
use crate::config::ElevenVoiceConfig;

/// File name attached to the cloning upload.
const SAMPLE_FILE_NAME: &str = "voice_sample.webm";

/// Voice cloning and text-to-speech backed by ElevenLabs.
///
/// Without a credential, [`synthesize`](VoiceSynthesizer::synthesize) returns
/// an empty clip (the caller's playback path skips empty clips) and
/// [`clone_voice`](VoiceCloner::clone_voice) fails with
/// [`ProviderError::NotConfigured`] before touching the network.
pub struct ElevenVoice {
    client: Client,
    config: ElevenVoiceConfig,
}

impl ElevenVoice {
    /// Create a new ElevenVoice with the given configuration.
    pub fn new(config: ElevenVoiceConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().build().map_err(|e| {
            ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
        })?;

        if config.has_credentials() {
            info!("ElevenVoice initialized, model: {}", config.tts_model);
        } else {
            info!("ElevenVoice initialized without credentials, synthesis returns silent clips");
        }

        Ok(Self { client, config })
    }

    /// Create an ElevenVoice from environment variables.
    ///
    /// See [`ElevenVoiceConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(ElevenVoiceConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ElevenVoiceConfig {
        &self.config
    }

    /// Read the error message out of an API failure body, preferring the
    /// structured envelope when the body has one.
    async fn error_message(response: reqwest::Response) -> String {
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiError>(&text) {
            Ok(api_error) => api_error.detail.message,
            Err(_) => text,
        }
    }
}

#[async_trait]
impl VoiceSynthesizer for ElevenVoice {
    async fn synthesize(
        &self,
        text: &str,
        voice_model_id: &str,
    ) -> Result<AudioClip, ProviderError> {
        if !self.config.has_credentials() {
            debug!("No API credential configured, returning silent clip");
            return Ok(AudioClip::empty());
        }

        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.api_url, voice_model_id
        );

        let request = TtsRequest {
            text: text.to_string(),
            model_id: self.config.tts_model.clone(),
            voice_settings: VoiceSettings {
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };

        debug!("Synthesizing {} chars with voice {}", text.len(), voice_model_id);

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            warn!("TTS request failed with HTTP {}: {}", status, message);
            return Err(ProviderError::from_status(status.as_u16(), message));
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to read audio body: {}", e)))?;

        debug!("Received {} bytes of {}", bytes.len(), mime);
        Ok(AudioClip::new(bytes.to_vec(), mime))
    }
}

#[async_trait]
impl VoiceCloner for ElevenVoice {
    async fn clone_voice(
        &self,
        sample: &[u8],
        name: &str,
        description: &str,
    ) -> Result<String, ProviderError> {
        if !self.config.has_credentials() {
            return Err(ProviderError::NotConfigured(
                "ElevenLabs API key not found".to_string(),
            ));
        }

        let url = format!("{}/v1/voices/add", self.config.api_url);

        let mut form = Form::new().text("name", name.to_string());
        if !description.is_empty() {
            form = form.text("description", description.to_string());
        }
        form = form.part(
            "files",
            Part::bytes(sample.to_vec()).file_name(SAMPLE_FILE_NAME),
        );

        info!("Cloning voice '{}' from {} byte sample", name, sample.len());

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            warn!("Voice cloning failed with HTTP {}: {}", status, message);
            return Err(ProviderError::from_status(status.as_u16(), message));
        }

        let created: AddVoiceResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("Failed to parse response: {}", e)))?;

        info!("Voice '{}' cloned as model {}", name, created.voice_id);
        Ok(created.voice_id)
    }
}
