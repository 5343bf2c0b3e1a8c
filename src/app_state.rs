use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::completion_client::{CompletionApi, PerplexityClient},
};

#[derive(Clone)]
pub struct AppState {
    pub completion_client: Arc<dyn CompletionApi>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let completion_client = Arc::new(PerplexityClient::new(&config)?);

        Ok(Self {
            completion_client,
            config: Arc::new(config),
        })
    }
}
