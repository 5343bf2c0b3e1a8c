use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub perplexity_api_key: SecretString,
    pub completion_api_url: String,
    pub completion_model: String,
    pub completion_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Empty default: an unset key fails at call time with an
            // upstream 401, not at startup.
            perplexity_api_key: SecretString::from(
                env::var("PERPLEXITY_API_KEY").unwrap_or_default(),
            ),
            completion_api_url: env::var("COMPLETION_API_URL")
                .unwrap_or_else(|_| "https://api.perplexity.ai/v1/complete".to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "perplexity-1".to_string()),
            completion_timeout_secs: env::var("COMPLETION_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            perplexity_api_key: SecretString::from("test_api_key".to_string()),
            completion_api_url: "http://127.0.0.1:1/complete".to_string(),
            completion_model: "perplexity-1".to_string(),
            completion_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
        }
    }
}
