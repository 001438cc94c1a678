//! Model fallback chain.
//!
//! Operations walk a prioritized model list: retryable failures (missing
//! model, exhausted quota, empty or unparseable completions) advance to the
//! next model, anything else aborts the attempt outright.

use std::future::Future;

use care_core::ProviderError;
use tracing::warn;

/// Try `attempt` against each model in priority order.
///
/// Returns the first success. Retryable errors advance the chain; a fatal
/// error is returned as-is. When every model fails retryably the result is
/// [`ProviderError::ChainExhausted`] carrying the last error seen.
pub(crate) async fn walk_chain<T, F, Fut>(
    models: &[String],
    mut attempt: F,
) -> Result<T, ProviderError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut last = None;
    for model in models {
        match attempt(model.clone()).await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() => {
                warn!("Model {} failed ({}), trying next", model, e);
                last = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(ProviderError::ChainExhausted {
        last: last
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no models configured".to_string()),
    })
}
