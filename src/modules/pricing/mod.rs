pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{
    CalculationRequest, CalculationResult, DiscountStep, DownpaymentStep, DownpaymentTermInput,
};
pub use services::{compute, FieldValue, PricingCalculator};
