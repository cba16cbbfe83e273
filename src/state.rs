use std::time::Duration;

use crate::config::Config;
use crate::error::Result;

/// The timeout applied to outbound calls to the external APIs.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Config,
    /// The shared HTTP client for the external monitoring/registry APIs.
    pub http: reqwest::Client,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;
        tracing::info!("✅ HTTP client initialized");

        Ok(AppState {
            config: config.clone(),
            http,
        })
    }
}
