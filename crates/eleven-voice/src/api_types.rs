//! ElevenLabs API request and response types.

use serde::{Deserialize, Serialize};

/// Voice settings sent with every synthesis request.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceSettings {
    /// Voice stability (0.0 - 1.0)
    pub stability: f32,
    /// Similarity boost (0.0 - 1.0)
    pub similarity_boost: f32,
}

/// Text-to-speech request body.
#[derive(Debug, Clone, Serialize)]
pub struct TtsRequest {
    /// Text to render as speech
    pub text: String,
    /// Synthesis model id
    pub model_id: String,
    /// Voice settings
    pub voice_settings: VoiceSettings,
}

/// Response from the voice-add (cloning) endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AddVoiceResponse {
    /// Provider-assigned id of the new voice model
    pub voice_id: String,
}

/// Error envelope returned by the API on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub detail: ApiErrorDetail,
}

/// Error detail within the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub status: String,
    pub message: String,
}
