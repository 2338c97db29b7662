use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;

use crate::api;
use crate::api::models::{HealthResponse, ValidateResponse};
use crate::config::ServerConfig;
use crate::state::AppState;

macro_rules! test_app {
    () => {{
        let state = web::Data::new(AppState::new(ServerConfig::default()));
        test::init_service(App::new().app_data(state).configure(api::configure)).await
    }};
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.status, "ok");
    assert!(!body.version.is_empty());
}

#[actix_web::test]
async fn test_validate_gstin_endpoint() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/validate/gstin")
        .set_json(json!({ "value": "27AAPFU0939F1ZV" }))
        .to_request();
    let body: ValidateResponse = test::call_and_read_body_json(&app, req).await;
    assert!(body.valid);

    let req = test::TestRequest::post()
        .uri("/api/validate/gstin")
        .set_json(json!({ "value": "27AAPFU0939F1ZZ" }))
        .to_request();
    let body: ValidateResponse = test::call_and_read_body_json(&app, req).await;
    assert!(!body.valid);
}

#[actix_web::test]
async fn test_validate_pan_endpoint() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/validate/pan")
        .set_json(json!({ "value": "aapfu0939f" }))
        .to_request();
    let body: ValidateResponse = test::call_and_read_body_json(&app, req).await;
    assert!(body.valid);
}

#[actix_web::test]
async fn test_render_endpoint_returns_pdf_attachment() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/render")
        .set_json(json!({
            "number": "INV-7",
            "currency": "INR",
            "billed_by": { "name": "Studio North", "address": "12 Lake Road, Mumbai" },
            "billed_to": { "name": "Acme Traders", "address": "8 Market Lane, Pune" },
            "items": [
                { "description": "Brand refresh", "quantity": 1, "unit_price": 1000 }
            ],
            "tax_rate": 18
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("Invoice_INV-7.pdf"));
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[actix_web::test]
async fn test_render_endpoint_accepts_empty_invoice() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/render")
        .set_json(json!({
            "billed_by": { "name": "Studio North" },
            "billed_to": { "name": "Acme Traders" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("Invoice.pdf"));
}

#[actix_web::test]
async fn test_pincode_shape_rejected_without_upstream_call() {
    let app = test_app!();
    let req = test::TestRequest::get()
        .uri("/api/pincode/12ab")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
