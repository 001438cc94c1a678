//! Conversation analysis results.

use serde::{Deserialize, Serialize};

/// Overall emotional tone of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Structured analysis of a conversation transcript.
///
/// Produced by the language model as JSON; `keywords` is capped at five
/// entries after parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Positivity score, 0 to 100.
    pub sentiment_score: u8,
    /// Up to five salient topics.
    pub keywords: Vec<String>,
    /// One-paragraph summary of the conversation.
    pub summary: String,
    /// Free-text risk labels; empty means no concerns detected.
    pub risk_factors: Vec<String>,
    /// Suggested follow-up for the family.
    pub recommendation: String,
}

impl AnalysisResult {
    /// Maximum number of keywords retained after parsing.
    pub const MAX_KEYWORDS: usize = 5;

    /// The canned result returned when no analysis provider is available.
    pub fn mock() -> Self {
        Self {
            sentiment: Sentiment::Positive,
            sentiment_score: 85,
            keywords: vec!["손자".to_string(), "산책".to_string(), "날씨".to_string()],
            summary: "오늘 손자가 방문해서 매우 기뻐하셨으며, 날씨가 좋아 산책을 다녀오셨습니다."
                .to_string(),
            risk_factors: vec![],
            recommendation: "긍정적인 기분을 유지할 수 있도록 가족들과의 통화를 권장합니다."
                .to_string(),
        }
    }

    /// Drop keywords beyond [`Self::MAX_KEYWORDS`].
    pub fn truncate_keywords(&mut self) {
        self.keywords.truncate(Self::MAX_KEYWORDS);
    }
}
