//! HTTP API surface: invoice rendering, tax-id validation, pincode proxy.

use actix_web::web;

pub mod handlers;
pub mod models;

#[cfg(test)]
mod tests;

/// Mount the `/api` scope. Shared between [`crate::run`] and the tests so
/// both exercise the same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/invoices/render", web::post().to(handlers::render_invoice))
            .route("/validate/gstin", web::post().to(handlers::validate_gstin))
            .route("/validate/pan", web::post().to(handlers::validate_pan))
            .route("/pincode/{pin}", web::get().to(handlers::lookup_pincode)),
    );
}
