pub mod discount_calculator;
pub mod downpayment_calculator;
pub mod input_parser;
pub mod pricing_calculator;

pub use discount_calculator::{DiscountCalculator, DiscountChain};
pub use downpayment_calculator::{DownpaymentCalculator, DownpaymentSchedule};
pub use input_parser::{parse_or_zero, FieldValue};
pub use pricing_calculator::{compute, PricingCalculator};
