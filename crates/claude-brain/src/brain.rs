//! ClaudeBrain implementation using the Anthropic Messages API.

use care_core::{async_trait, AnalysisResult, Brain, ProviderError};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ApiError, MessageParam, MessagesRequest, MessagesResponse, ANTHROPIC_VERSION};
use crate::chain::walk_chain;
use crate::config::ClaudeBrainConfig;
use crate::json::extract_json;

/// Canned persona reply served when no API credential is configured.
pub const MOCK_REPLY: &str =
    "네, 날씨가 정말 좋아서 공원에 다녀왔어요. 우리 아들도 밥 잘 챙겨 먹고 있지?";

/// Prefix prepended to the transcript in analysis requests.
const ANALYSIS_REQUEST_PREFIX: &str = "다음 대화 내용을 분석해주세요:\n\n";

/// A brain implementation backed by Anthropic's Claude models.
///
/// Each operation walks the configured model chain in priority order:
/// missing models (404), exhausted quota (429), empty completions, and
/// unparseable analysis JSON advance to the next model, while any other
/// failure aborts the whole attempt. Without a credential the brain serves
/// canned responses and never touches the network.
pub struct ClaudeBrain {
    client: Client,
    config: ClaudeBrainConfig,
}

impl ClaudeBrain {
    /// Create a new ClaudeBrain with the given configuration.
    pub fn new(config: ClaudeBrainConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().build().map_err(|e| {
            ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
        })?;

        if config.has_credentials() {
            info!(
                "ClaudeBrain initialized with {} models, primary: {}",
                config.models.len(),
                config.models.first().map(String::as_str).unwrap_or("none")
            );
        } else {
            info!("ClaudeBrain initialized without credentials, serving canned responses");
        }

        Ok(Self { client, config })
    }

    /// Create a ClaudeBrain from environment variables.
    ///
    /// See [`ClaudeBrainConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(ClaudeBrainConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClaudeBrainConfig {
        &self.config
    }

    /// Make one Messages request against a single model.
    async fn send_once(
        &self,
        model: &str,
        system: &str,
        user_content: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/v1/messages", self.config.api_url);

        let request = MessagesRequest {
            model: model.to_string(),
            max_tokens,
            temperature,
            system: system.to_string(),
            messages: vec![MessageParam::user(user_content)],
        };

        debug!("Sending request to Anthropic API: model={}", model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured API error message when the body has one
            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => error_text,
            };

            return Err(ProviderError::from_status(status.as_u16(), message));
        }

        let completion: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("Failed to parse response: {}", e)))?;

        if let Some(ref usage) = completion.usage {
            debug!(
                "Token usage - input: {}, output: {}",
                usage.input_tokens, usage.output_tokens
            );
        }

        match completion.text() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(ProviderError::EmptyCompletion {
                model: model.to_string(),
            }),
        }
    }
}

#[async_trait]
impl Brain for ClaudeBrain {
    async fn reply(&self, utterance: &str) -> Result<String, ProviderError> {
        if !self.config.has_credentials() {
            debug!("No API credential configured, returning canned reply");
            return Ok(MOCK_REPLY.to_string());
        }

        walk_chain(&self.config.models, |model| async move {
            let text = self
                .send_once(
                    &model,
                    &self.config.persona_prompt,
                    utterance,
                    self.config.reply_max_tokens,
                    self.config.reply_temperature,
                )
                .await?;
            debug!("Reply produced by {}", model);
            Ok(text)
        })
        .await
    }

    async fn analyze(&self, transcript: &str) -> Result<AnalysisResult, ProviderError> {
        if !self.config.has_credentials() {
            debug!("No API credential configured, returning canned analysis");
            return Ok(AnalysisResult::mock());
        }

        let user_content = format!("{}{}", ANALYSIS_REQUEST_PREFIX, transcript);

        walk_chain(&self.config.models, |model| {
            let user_content = &user_content;
            async move {
                let text = self
                    .send_once(
                        &model,
                        &self.config.analysis_prompt,
                        user_content,
                        self.config.analysis_max_tokens,
                        self.config.analysis_temperature,
                    )
                    .await?;
                let result = parse_analysis(&model, &text)?;
                debug!("Analysis produced by {}", model);
                Ok(result)
            }
        })
        .await
    }

    fn name(&self) -> &str {
        "ClaudeBrain"
    }
}

/// Parse the analysis JSON out of a completion, tolerating markdown fences
/// and surrounding prose. Keywords are capped and the score clamped to the
/// documented range.
fn parse_analysis(model: &str, text: &str) -> Result<AnalysisResult, ProviderError> {
    let json = extract_json(text);
    let mut result: AnalysisResult =
        serde_json::from_str(json).map_err(|e| ProviderError::UnparseableCompletion {
            model: model.to_string(),
            reason: e.to_string(),
        })?;

    result.truncate_keywords();
    result.sentiment_score = result.sentiment_score.min(100);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_core::Sentiment;

    #[test]
    fn test_brain_name() {
        let config = ClaudeBrainConfig::builder().api_key("test-key").build();

        let brain = ClaudeBrain::new(config).unwrap();
        assert_eq!(brain.name(), "ClaudeBrain");
    }

    #[tokio::test]
    async fn test_reply_without_credentials_is_canned() {
        let brain = ClaudeBrain::new(ClaudeBrainConfig::default()).unwrap();

        let reply = brain.reply("엄마, 오늘 날씨가 참 좋네요.").await.unwrap();
        assert_eq!(reply, MOCK_REPLY);
    }

    #[tokio::test]
    async fn test_placeholder_key_serves_canned_reply() {
        let config = ClaudeBrainConfig::builder()
            .api_key(crate::config::PLACEHOLDER_API_KEY)
            .build();
        let brain = ClaudeBrain::new(config).unwrap();

        let reply = brain.reply("안녕").await.unwrap();
        assert_eq!(reply, MOCK_REPLY);
    }

    #[tokio::test]
    async fn test_analyze_without_credentials_is_canned() {
        let brain = ClaudeBrain::new(ClaudeBrainConfig::default()).unwrap();

        let result = brain.analyze("부모: 오늘 산책 다녀왔어").await.unwrap();
        assert_eq!(result.sentiment_score, 85);
        assert_eq!(result.keywords, vec!["손자", "산책", "날씨"]);
    }

    #[tokio::test]
    async fn test_empty_chain_is_exhausted() {
        let config = ClaudeBrainConfig::builder()
            .api_key("test-key")
            .models(Vec::<String>::new())
            .build();
        let brain = ClaudeBrain::new(config).unwrap();

        let result = brain.reply("안녕").await;
        assert!(matches!(
            result,
            Err(ProviderError::ChainExhausted { .. })
        ));
    }

    #[test]
    fn test_parse_analysis_valid() {
        let text = r#"{
            "sentiment": "positive",
            "sentimentScore": 90,
            "keywords": ["산책", "날씨"],
            "summary": "기분 좋게 산책을 다녀오셨습니다.",
            "riskFactors": [],
            "recommendation": "지금처럼 지내시면 됩니다."
        }"#;

        let result = parse_analysis("claude-test", text).unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.sentiment_score, 90);
    }

    #[test]
    fn test_parse_analysis_fenced() {
        let text = "```json\n{\"sentiment\": \"neutral\", \"sentimentScore\": 50, \"keywords\": [], \"summary\": \"평온한 하루였습니다.\", \"riskFactors\": [], \"recommendation\": \"안부 전화를 드려보세요.\"}\n```";

        let result = parse_analysis("claude-test", text).unwrap();
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_parse_analysis_caps_keywords_and_score() {
        let text = r#"{
            "sentiment": "positive",
            "sentimentScore": 120,
            "keywords": ["하나", "둘", "셋", "넷", "다섯", "여섯", "일곱"],
            "summary": "요약",
            "riskFactors": [],
            "recommendation": "조언"
        }"#;

        let result = parse_analysis("claude-test", text).unwrap();
        assert_eq!(result.sentiment_score, 100);
        assert_eq!(result.keywords.len(), AnalysisResult::MAX_KEYWORDS);
    }

    #[test]
    fn test_parse_analysis_garbage_is_unparseable() {
        let result = parse_analysis("claude-test", "오늘은 분석할 수 없습니다.");
        assert!(matches!(
            result,
            Err(ProviderError::UnparseableCompletion { .. })
        ));
    }
}
