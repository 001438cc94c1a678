//! Configuration for ClaudeBrain.

use std::env;
use std::path::Path;

/// Default Anthropic API URL.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com";

/// Default persona prompt file name.
pub const DEFAULT_PROMPT_FILE: &str = "PERSONA_PROMPT.md";

/// Placeholder value from the sample .env; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your_claude_api_key_here";

/// Model fallback chain, in priority order.
pub const DEFAULT_MODELS: [&str; 4] = [
    "claude-3-5-sonnet-20241022",
    "claude-3-opus-20240229",
    "claude-3-sonnet-20240229",
    "claude-3-haiku-20240307",
];

/// System prompt for persona replies: speak as the user's adult child,
/// warmly and briefly.
pub const PERSONA_PROMPT: &str = "당신은 자녀의 목소리로 부모님과 대화하는 따뜻하고 친근한 AI 어시스턴트입니다. 부모님께 존중하고 배려하는 말투로 자연스럽게 대화하세요. 응답은 간결하고 따뜻하게 작성해주세요.";

/// System prompt for transcript analysis: respond with the analysis JSON
/// shape and nothing else.
pub const ANALYSIS_PROMPT: &str = r#"당신은 노인 심리 분석 전문가입니다. 주어진 대화 내용을 분석하여 JSON 형식으로 응답해 주세요.

응답 필드:
- sentiment: "positive" | "neutral" | "negative"
- sentimentScore: 0~100 사이의 정수 (높을수록 긍정적)
- keywords: 주요 키워드 리스트 (최대 5개)
- summary: 대화 내용 및 심리 상태 요약 (한국어, 2~3문장)
- riskFactors: 발견된 위험 징후 리스트 (예: "우울감", "식욕 부진", "수면 장애", "고립감" 등). 없으면 빈 배열.
- recommendation: 보호자를 위한 케어 조언 (한국어, 1문장)

반드시 유효한 JSON 형식으로만 응답하세요."#;

/// Configuration for ClaudeBrain.
#[derive(Debug, Clone)]
pub struct ClaudeBrainConfig {
    /// Anthropic API URL.
    pub api_url: String,

    /// API key for authentication. Empty or placeholder means no credential,
    /// which puts the brain in canned-reply mode.
    pub api_key: String,

    /// Model fallback chain, tried in order.
    pub models: Vec<String>,

    /// System prompt for persona replies.
    pub persona_prompt: String,

    /// System prompt for transcript analysis.
    pub analysis_prompt: String,

    /// Maximum tokens for a persona reply.
    pub reply_max_tokens: u32,

    /// Temperature for persona replies.
    pub reply_temperature: f32,

    /// Maximum tokens for an analysis completion.
    pub analysis_max_tokens: u32,

    /// Temperature for analysis completions.
    pub analysis_temperature: f32,
}

impl Default for ClaudeBrainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            persona_prompt: PERSONA_PROMPT.to_string(),
            analysis_prompt: ANALYSIS_PROMPT.to_string(),
            reply_max_tokens: 200,
            reply_temperature: 0.7,
            analysis_max_tokens: 500,
            analysis_temperature: 0.5,
        }
    }
}

impl ClaudeBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CLAUDE_API_KEY` - API key; when unset (or left at the sample
    ///   placeholder) the brain serves canned replies instead of calling out
    /// - `CLAUDE_API_URL` - API URL (default: https://api.anthropic.com)
    /// - `CLAUDE_MODELS` - Comma-separated model chain (default: the
    ///   claude-3 family, newest first)
    /// - `CLAUDE_PERSONA_PROMPT` - Persona prompt (overrides prompt file)
    /// - `CLAUDE_PROMPT_FILE` - Path to persona prompt file (default: PERSONA_PROMPT.md)
    /// - `CLAUDE_ANALYSIS_PROMPT` - Analysis prompt
    /// - `CLAUDE_REPLY_MAX_TOKENS` - Max tokens for replies (default: 200)
    /// - `CLAUDE_REPLY_TEMPERATURE` - Temperature for replies (default: 0.7)
    /// - `CLAUDE_ANALYSIS_MAX_TOKENS` - Max tokens for analysis (default: 500)
    /// - `CLAUDE_ANALYSIS_TEMPERATURE` - Temperature for analysis (default: 0.5)
    ///
    /// Persona prompt priority:
    /// 1. `CLAUDE_PERSONA_PROMPT` env var (if set)
    /// 2. Contents of prompt file (if exists)
    /// 3. Built-in default
    pub fn from_env() -> Self {
        let api_key = env::var("CLAUDE_API_KEY").unwrap_or_default();

        let api_url = env::var("CLAUDE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let models = env::var("CLAUDE_MODELS")
            .ok()
            .map(|list| parse_model_list(&list))
            .filter(|models| !models.is_empty())
            .unwrap_or_else(|| DEFAULT_MODELS.iter().map(|m| m.to_string()).collect());

        // Persona prompt: env var takes precedence, then try loading from file
        let persona_prompt = if let Ok(prompt) = env::var("CLAUDE_PERSONA_PROMPT") {
            prompt
        } else {
            let prompt_file =
                env::var("CLAUDE_PROMPT_FILE").unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());
            load_prompt_file(&prompt_file).unwrap_or_else(|| PERSONA_PROMPT.to_string())
        };

        let analysis_prompt =
            env::var("CLAUDE_ANALYSIS_PROMPT").unwrap_or_else(|_| ANALYSIS_PROMPT.to_string());

        let reply_max_tokens = env::var("CLAUDE_REPLY_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(200);

        let reply_temperature = env::var("CLAUDE_REPLY_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.7);

        let analysis_max_tokens = env::var("CLAUDE_ANALYSIS_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        let analysis_temperature = env::var("CLAUDE_ANALYSIS_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.5);

        Self {
            api_url,
            api_key,
            models,
            persona_prompt,
            analysis_prompt,
            reply_max_tokens,
            reply_temperature,
            analysis_max_tokens,
            analysis_temperature,
        }
    }

    /// Whether a usable API credential is configured.
    ///
    /// The sample .env ships with a placeholder value; leaving it in place
    /// counts as having no credential.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }

    /// Create a new config builder.
    pub fn builder() -> ClaudeBrainConfigBuilder {
        ClaudeBrainConfigBuilder::default()
    }
}

/// Builder for ClaudeBrainConfig.
#[derive(Debug, Default)]
pub struct ClaudeBrainConfigBuilder {
    config: ClaudeBrainConfig,
}

impl ClaudeBrainConfigBuilder {
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

    /// Set the model fallback chain.
    pub fn models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Set the persona prompt.
    pub fn persona_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.persona_prompt = prompt.into();
        self
    }

    /// Set the analysis prompt.
    pub fn analysis_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.analysis_prompt = prompt.into();
        self
    }

    /// Set the max tokens for replies.
    pub fn reply_max_tokens(mut self, tokens: u32) -> Self {
        self.config.reply_max_tokens = tokens;
        self
    }

    /// Set the temperature for replies.
    pub fn reply_temperature(mut self, temp: f32) -> Self {
        self.config.reply_temperature = temp;
        self
    }

    /// Set the max tokens for analysis.
    pub fn analysis_max_tokens(mut self, tokens: u32) -> Self {
        self.config.analysis_max_tokens = tokens;
        self
    }

    /// Set the temperature for analysis.
    pub fn analysis_temperature(mut self, temp: f32) -> Self {
        self.config.analysis_temperature = temp;
        self
    }

    /// Load the persona prompt from a file.
    ///
    /// If the file exists and is non-empty, sets the persona prompt.
    /// Returns self for chaining.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.persona_prompt = prompt;
        }
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClaudeBrainConfig {
        self.config
    }
}

/// Parse a comma-separated model list, skipping empty entries.
fn parse_model_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|model| model.trim())
        .filter(|model| !model.is_empty())
        .map(|model| model.to_string())
        .collect()
}

/// Load a prompt file, returning None if not found or empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}
