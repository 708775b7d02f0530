use crate::api_client::{ApiClient, ApiError};
use crate::config::AppConfig;
use std::sync::Arc;

/// Shared, read-only handles for request handlers
#[derive(Clone)]
pub struct AppState {
    pub api_client: Arc<ApiClient>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let api_client = ApiClient::new(&config)?;

        Ok(Self {
            api_client: Arc::new(api_client),
            config: Arc::new(config),
        })
    }
}
