use actix_web::{web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::pricing::{CalculationRequest, PricingCalculator};

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub calculator: String,
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub calculator: bool,
    pub application: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application can respond to requests
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            calculator: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Runs the calculator against a known request before reporting ready
pub async fn readiness_check(calculator: web::Data<PricingCalculator>) -> impl Responder {
    let checks = ReadinessChecks {
        calculator: calculator_self_check(calculator.get_ref()),
        application: true,
    };
    let ready = checks.calculator && checks.application;

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// GET / - Service banner
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "PayTerm Payment Term Generator",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

fn calculator_self_check(calculator: &PricingCalculator) -> bool {
    let request = CalculationRequest::new("1000000")
        .with_discount("10")
        .with_downpayment_term("20", "12");

    match calculator.compute(&request) {
        Ok(result) => {
            result.total_payable == Decimal::from(900_000)
                && result.remaining_balance_amount == Decimal::from(720_000)
        }
        Err(e) => {
            tracing::error!("Calculator readiness check failed: {}", e);
            false
        }
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
