//! Server configuration from environment variables.

use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_PINCODE_API_URL: &str = "https://api.postalpincode.in";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`, default 3000).
    pub port: u16,
    /// Directory holding the built front-end bundle (`STATIC_DIR`).
    pub static_dir: String,
    /// Base URL of the postal-code service (`PINCODE_API_URL`), overridable
    /// for tests.
    pub pincode_api_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir =
            env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
        let pincode_api_url =
            env::var("PINCODE_API_URL").unwrap_or_else(|_| DEFAULT_PINCODE_API_URL.to_string());
        Self {
            port,
            static_dir,
            pincode_api_url,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            pincode_api_url: DEFAULT_PINCODE_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, "public");
        assert!(config.pincode_api_url.contains("postalpincode"));
    }
}
