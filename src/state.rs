//! Shared application state.

use crate::config::ServerConfig;
use crate::pincode::PincodeClient;

/// Cloned into every actix worker. One reqwest client backs both outbound
/// calls (footer-logo fetch and the pincode proxy) so connections pool.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub pincode: PincodeClient,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("agencydesk-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create reqwest client");
        let pincode = PincodeClient::new(http_client.clone(), config.pincode_api_url.clone());
        Self {
            http_client,
            pincode,
            config,
        }
    }
}
