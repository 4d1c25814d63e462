// HTTP tests for POST /api/calculations
//
// Runs the real routes through actix_web::test; no port is bound.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use helpers::{configure_test_routes, configure_with_pricing};
use payterm::config::PricingConfig;
use payterm::pricing::models::CalculationResponse;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_calculation_with_string_fields() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({
            "list_price": "1000000",
            "discounts": ["10"],
            "vat_enabled": false,
            "downpayment_terms": [
                {"downpayment_percentage": "20", "payable_in_months": "12"}
            ],
            "reservation_amount": "0"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: CalculationResponse = test::read_body_json(resp).await;
    assert_eq!(body.currency, "PHP");

    let calculation = body.calculation;
    assert_eq!(calculation.discounts[0].discounted_price, dec!(900000));
    assert_eq!(calculation.discounts[0].net_list_price, dec!(100000));
    assert_eq!(calculation.total_payable, dec!(900000));
    assert_eq!(calculation.downpayments[0].downpayment_amount, dec!(180000));
    assert_eq!(calculation.downpayments[0].monthly_amount, dec!(15000));
    assert_eq!(calculation.remaining_balance_percentage, dec!(80));
    assert_eq!(calculation.remaining_balance_amount, dec!(720000));
}

#[actix_web::test]
async fn test_calculation_with_numeric_fields_and_vat() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({
            "list_price": 500000,
            "discounts": [],
            "vat_enabled": true,
            "vat_percentage": 12,
            "additional_charges_percentage": 5,
            "downpayment_terms": [],
            "reservation_amount": 10000
        }))
        .to_request();

    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;
    let calculation = body.calculation;

    assert_eq!(calculation.vat_amount, dec!(60000));
    assert_eq!(calculation.additional_charges_amount, dec!(25000));
    assert_eq!(calculation.total_payable, dec!(585000));
    assert_eq!(calculation.net_downpayment, dec!(-10000));
    assert_eq!(calculation.remaining_balance_percentage, dec!(100));
    assert_eq!(calculation.remaining_balance_amount, dec!(585000));
}

#[actix_web::test]
async fn test_monthly_amount_is_rounded_in_response() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({
            "list_price": "1000000",
            "downpayment_terms": [
                {"downpayment_percentage": "50", "payable_in_months": "6"},
                {"downpayment_percentage": "30", "payable_in_months": "0"}
            ]
        }))
        .to_request();

    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;
    let calculation = body.calculation;

    assert_eq!(calculation.downpayments[0].downpayment_amount, dec!(500000));
    assert_eq!(calculation.downpayments[0].monthly_amount, dec!(83333.33));
    assert_eq!(calculation.downpayments[1].downpayment_amount, dec!(300000));
    assert_eq!(calculation.downpayments[1].monthly_amount, Decimal::ZERO);
    assert_eq!(calculation.remaining_balance_percentage, dec!(20));
}

#[actix_web::test]
async fn test_default_vat_percentage_applies() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({
            "list_price": "100000",
            "vat_enabled": true,
            "additional_charges_percentage": "0"
        }))
        .to_request();

    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.calculation.vat_percentage, dec!(8));
    assert_eq!(body.calculation.vat_amount, dec!(8000));
    assert_eq!(body.calculation.total_payable, dec!(108000));
}

#[actix_web::test]
async fn test_invalid_list_price_is_unprocessable() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({"list_price": "abc", "discounts": ["10"]}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_LIST_PRICE");
    assert_eq!(body["error"]["status"], 422);
}

#[actix_web::test]
async fn test_out_of_range_amount_is_unprocessable() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({
            "list_price": "78500000000000000000000000000",
            "discounts": ["99", "200"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "AMOUNT_OUT_OF_RANGE");
}

#[actix_web::test]
async fn test_missing_additional_charges_with_vat_is_unprocessable() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({"list_price": "500000", "vat_enabled": true, "vat_percentage": "12"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_VAT_INPUTS");
}

#[actix_web::test]
async fn test_too_many_terms_is_bad_request() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let term = json!({"downpayment_percentage": "10", "payable_in_months": "1"});
    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({
            "list_price": "1000000",
            "downpayment_terms": [term.clone(), term.clone(), term.clone(), term]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_configured_limits_are_used() {
    let pricing = PricingConfig {
        max_discounts: 5,
        ..PricingConfig::default()
    };
    let app = test::init_service(
        App::new().configure(move |cfg| configure_with_pricing(cfg, pricing.clone())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .set_json(json!({
            "list_price": "1000000",
            "discounts": ["1", "1", "1", "1", "1"]
        }))
        .to_request();

    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.calculation.discounts.len(), 5);
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/calculations")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"list_price": "1000000", "discounts": "#)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_defaults_endpoint() {
    let app = test::init_service(App::new().configure(configure_test_routes)).await;

    let req = test::TestRequest::get()
        .uri("/api/calculations/defaults")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["currency"], "PHP");
    assert_eq!(body["default_vat_percentage"], "8");
    assert_eq!(body["max_discounts"], 3);
}
