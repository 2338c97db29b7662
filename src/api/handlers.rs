//! Handlers for the `/api` scope.

use actix_web::{web, HttpResponse, Responder};

use crate::api::models::{HealthResponse, ValidateRequest, ValidateResponse};
use crate::invoice::{self, InvoiceDocument};
use crate::state::AppState;
use crate::taxid;
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Service",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/api/invoices/render",
    tag = "Invoices",
    request_body = InvoiceDocument,
    responses(
        (status = 200, description = "Rendered invoice PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn render_invoice(
    state: web::Data<AppState>,
    body: web::Json<InvoiceDocument>,
) -> impl Responder {
    let document = body.into_inner();

    // The one image-fetch boundary: a missing or broken logo never blocks
    // the invoice, it is logged and the footer renders without it.
    let logo = match document.branding.logo_url.as_deref() {
        Some(url) => fetch_logo(&state, url).await,
        None => None,
    };

    match invoice::render(&document, logo.as_deref()) {
        Ok(generated) => {
            log::info!(
                "Rendered {} ({} bytes, {} items)",
                generated.filename,
                generated.pdf.len(),
                document.items.len()
            );
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", generated.filename),
                ))
                .body(generated.pdf)
        }
        Err(err) => {
            log::error!("Invoice rendering failed: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&err.to_string()))
        }
    }
}

async fn fetch_logo(state: &web::Data<AppState>, url: &str) -> Option<Vec<u8>> {
    let response = match state.http_client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("Footer logo fetch failed, rendering without it: {err}");
            return None;
        }
    };
    match response.error_for_status() {
        Ok(response) => match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(err) => {
                log::warn!("Footer logo body read failed, rendering without it: {err}");
                None
            }
        },
        Err(err) => {
            log::warn!("Footer logo fetch returned an error status: {err}");
            None
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/validate/gstin",
    tag = "Validation",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation verdict", body = ValidateResponse)
    )
)]
pub async fn validate_gstin(body: web::Json<ValidateRequest>) -> impl Responder {
    let request = body.into_inner();
    let valid = taxid::validate_gstin(&request.value);
    HttpResponse::Ok().json(ValidateResponse {
        value: request.value,
        valid,
    })
}

#[utoipa::path(
    post,
    path = "/api/validate/pan",
    tag = "Validation",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation verdict", body = ValidateResponse)
    )
)]
pub async fn validate_pan(body: web::Json<ValidateRequest>) -> impl Responder {
    let request = body.into_inner();
    let valid = taxid::validate_pan(&request.value);
    HttpResponse::Ok().json(ValidateResponse {
        value: request.value,
        valid,
    })
}

#[utoipa::path(
    get,
    path = "/api/pincode/{pin}",
    tag = "Validation",
    params(
        ("pin" = String, Path, description = "6-digit Indian postal code")
    ),
    responses(
        (status = 200, description = "Resolved location", body = crate::pincode::PincodeInfo),
        (status = 404, description = "Unknown or malformed pincode", body = ErrorResponse),
        (status = 502, description = "Upstream lookup service failed", body = ErrorResponse)
    )
)]
pub async fn lookup_pincode(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let pin = path.into_inner();
    match state.pincode.lookup(&pin).await {
        Ok(Some(info)) => HttpResponse::Ok().json(info),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "No post office found for pincode {pin}"
        ))),
        Err(err) => {
            log::warn!("Pincode lookup failed for {pin}: {err}");
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "BadGateway",
                "Pincode lookup service is unavailable",
            ))
        }
    }
}
