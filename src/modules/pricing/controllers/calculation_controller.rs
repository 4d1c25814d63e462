//! Calculation endpoints
//!
//! The form front-end posts its raw field values here and renders the
//! returned breakdown.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::core::error::AppError;
use crate::core::money::CURRENCY_CODE;
use crate::modules::pricing::models::{CalculationResponse, CreateCalculationRequest};
use crate::modules::pricing::services::PricingCalculator;

/// Form defaults and limits
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationDefaults {
    pub currency: String,
    pub default_vat_percentage: String,
    pub max_discounts: usize,
    pub max_downpayment_terms: usize,
}

/// Compute a payment schedule
/// POST /api/calculations
pub async fn create_calculation(
    calculator: web::Data<PricingCalculator>,
    config: web::Data<PricingConfig>,
    request: web::Json<CreateCalculationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner().into_calculation(config.get_ref())?;
    let result = calculator.compute(&request)?;

    Ok(HttpResponse::Ok().json(CalculationResponse::from(&result)))
}

/// Defaults the form should start from
/// GET /api/calculations/defaults
pub async fn get_calculation_defaults(config: web::Data<PricingConfig>) -> HttpResponse {
    HttpResponse::Ok().json(CalculationDefaults {
        currency: CURRENCY_CODE.to_string(),
        default_vat_percentage: config.default_vat_percentage.clone(),
        max_discounts: config.max_discounts,
        max_downpayment_terms: config.max_downpayment_terms,
    })
}

/// Configure calculation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/calculations")
            .route("", web::post().to(create_calculation))
            .route("/defaults", web::get().to(get_calculation_defaults)),
    );
}
