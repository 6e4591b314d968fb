use std::time::Duration;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";
pub const GROQ_MODEL: &str = "whisper-large-v3";

#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: GROQ_API_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GroqConfig {
    pub fn new(api_key: Option<String>, endpoint: String, timeout: Duration) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            endpoint,
            timeout,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
