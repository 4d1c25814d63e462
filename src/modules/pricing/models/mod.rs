pub mod calculation_request;
pub mod calculation_result;

pub use calculation_request::{CalculationRequest, CreateCalculationRequest, DownpaymentTermInput};
pub use calculation_result::{
    CalculationResponse, CalculationResult, DiscountStep, DownpaymentStep,
};
