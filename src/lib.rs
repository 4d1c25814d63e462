//! PayTerm Payment Term Generator Library
//!
//! Computes real-estate payment schedules: sequential discounts, VAT and
//! additional charges, downpayment terms and the remaining balance.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::pricing;
pub use modules::pricing::{compute, CalculationRequest, CalculationResult, PricingCalculator};
pub use crate::core::{AppError, ValidationError};
