use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret as _, SecretString};

use crate::{config::Config, constants::prompts::quiz_prompt, errors::AppResult};

/// Text-completion provider boundary. Handlers depend on this trait so tests
/// can swap in canned or failing providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Returns the provider's raw free-text reply for a quiz prompt.
    async fn complete(&self, topic: &str, num_questions: u32) -> AppResult<String>;
}

/// Perplexity-style completion client: `{prompt, model}` JSON body plus a
/// bearer token. No retries or backoff; a failed call surfaces as
/// `AppError::UpstreamError` and the handler wraps it in the error envelope.
pub struct PerplexityClient {
    client: reqwest::Client,
    api_key: SecretString,
    api_url: String,
    model: String,
}

impl PerplexityClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.completion_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.perplexity_api_key.clone(),
            api_url: config.completion_api_url.clone(),
            model: config.completion_model.clone(),
        })
    }
}

#[async_trait]
impl CompletionApi for PerplexityClient {
    async fn complete(&self, topic: &str, num_questions: u32) -> AppResult<String> {
        let prompt = quiz_prompt(topic, num_questions);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&serde_json::json!({
                "prompt": prompt,
                "model": self.model,
            }))
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;

        // The provider reply is read for its "text" field and nothing else.
        Ok(body
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string())
    }
}
