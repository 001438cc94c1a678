//! Error types for capability provider operations.

use thiserror::Error;

/// Errors that can occur while calling a capability provider.
///
/// The variants carry a structured classification so callers never have to
/// inspect message text: [`ProviderError::is_retryable`] tells a fallback
/// chain whether to advance to the next model or abort.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested model is missing or over quota (HTTP 404/429).
    /// A fallback chain should advance to the next model.
    #[error("model unavailable (HTTP {status}): {message}")]
    Unavailable { status: u16, message: String },

    /// The provider answered 2xx but the completion carried no content.
    /// Treated like [`ProviderError::Unavailable`] by fallback chains.
    #[error("empty completion from {model}")]
    EmptyCompletion { model: String },

    /// The completion text could not be parsed into the expected payload
    /// (e.g. the analysis JSON). Fallback chains advance past this.
    #[error("unparseable completion from {model}: {reason}")]
    UnparseableCompletion { model: String, reason: String },

    /// The provider rejected the request with a non-retryable status.
    #[error("provider rejected request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Transport-level failure (connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response envelope did not match the provider's wire shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The provider has no credential configured and the operation has no
    /// mock branch (voice cloning).
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// Every model in the fallback chain failed; carries the last error seen.
    #[error("all models in the fallback chain failed: {last}")]
    ChainExhausted { last: String },
}

impl ProviderError {
    /// Whether a fallback chain may recover from this error by trying the
    /// next model in its priority list.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::Unavailable { .. }
                | ProviderError::EmptyCompletion { .. }
                | ProviderError::UnparseableCompletion { .. }
        )
    }

    /// Classify an HTTP error status: 404 (model not found) and 429 (quota
    /// exceeded) are retryable, everything else is fatal for the attempt.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 404 || status == 429 {
            ProviderError::Unavailable { status, message }
        } else {
            ProviderError::Rejected { status, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(ProviderError::from_status(404, "no such model").is_retryable());
        assert!(ProviderError::from_status(429, "quota exceeded").is_retryable());
        assert!(!ProviderError::from_status(500, "server error").is_retryable());
        assert!(!ProviderError::from_status(401, "bad key").is_retryable());
    }

    #[test]
    fn test_empty_completion_is_retryable() {
        let err = ProviderError::EmptyCompletion {
            model: "claude-3-haiku-20240307".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_fatal_variants() {
        assert!(!ProviderError::Network("connection refused".to_string()).is_retryable());
        assert!(!ProviderError::Malformed("not json".to_string()).is_retryable());
        assert!(!ProviderError::NotConfigured("no key".to_string()).is_retryable());
        let exhausted = ProviderError::ChainExhausted {
            last: "quota".to_string(),
        };
        assert!(!exhausted.is_retryable());
    }
}
