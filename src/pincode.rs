//! Postal-code lookup client.
//!
//! Thin wrapper over the public `api.postalpincode.in` service used for
//! address autofill. The pin shape is checked locally first so obviously
//! malformed input never leaves the process.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum PincodeError {
    #[error("pincode lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Resolved location for a pincode.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PincodeInfo {
    pub post_office: String,
    pub district: String,
    pub state: String,
}

#[derive(Deserialize, Debug)]
struct LookupEntry {
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "PostOffice")]
    post_offices: Option<Vec<PostOffice>>,
}

#[derive(Deserialize, Debug)]
struct PostOffice {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "District")]
    district: String,
    #[serde(rename = "State")]
    state: String,
}

#[derive(Clone)]
pub struct PincodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl PincodeClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up an Indian postal code. Returns `Ok(None)` when the pin is not
    /// six digits or the service does not know it; transport and decode
    /// failures surface as [`PincodeError`].
    pub async fn lookup(&self, pin: &str) -> Result<Option<PincodeInfo>, PincodeError> {
        let pin = pin.trim();
        if pin.len() != 6 || !pin.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(None);
        }

        let url = format!("{}/pincode/{pin}", self.base_url.trim_end_matches('/'));
        let entries: Vec<LookupEntry> = self.http.get(&url).send().await?.json().await?;

        let info = entries
            .into_iter()
            .find(|entry| entry.status == "Success")
            .and_then(|entry| entry.post_offices)
            .and_then(|offices| offices.into_iter().next())
            .map(|office| PincodeInfo {
                post_office: office.name,
                district: office.district,
                state: office.state,
            });
        Ok(info)
    }
}
