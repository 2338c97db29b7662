//! Request/response bodies for the JSON endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ValidateRequest {
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ValidateResponse {
    pub value: String,
    pub valid: bool,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
