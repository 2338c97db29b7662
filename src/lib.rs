//! AgencyDesk server: serves the built dashboard bundle and hosts the
//! document-generation API (invoice PDF rendering, GSTIN/PAN validation,
//! postal-code lookup proxy).

use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod config;
pub mod invoice;
pub mod pincode;
pub mod state;
pub mod taxid;

pub use crate::config::ServerConfig;
pub use crate::state::AppState;

/// Conventional JSON error body: `{ error, message, timestamp }`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health,
        crate::api::handlers::render_invoice,
        crate::api::handlers::validate_gstin,
        crate::api::handlers::validate_pan,
        crate::api::handlers::lookup_pincode
    ),
    components(
        schemas(
            invoice::InvoiceDocument,
            invoice::LineItem,
            invoice::Party,
            invoice::PaymentRecord,
            invoice::FooterBranding,
            api::models::ValidateRequest,
            api::models::ValidateResponse,
            api::models::HealthResponse,
            pincode::PincodeInfo,
            ErrorResponse
        )
    ),
    tags(
        (name = "Invoices", description = "Invoice PDF generation."),
        (name = "Validation", description = "Tax-identifier validation and address lookup."),
        (name = "Service", description = "Health and metadata.")
    )
)]
struct ApiDoc;

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let port = config.port;
    let static_dir = config.static_dir.clone();
    let state = web::Data::new(AppState::new(config));

    log::info!("Starting agencydesk-server on port {port}, serving {static_dir}/");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(Compress::default())
            .configure(api::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
