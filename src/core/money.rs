use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::error::ValidationError;

/// The single currency every amount is expressed in
pub const CURRENCY_CODE: &str = "PHP";

/// Decimal places shown for monetary amounts
pub const MONEY_SCALE: u32 = 2;

/// 100, the percentage base
pub const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds an amount to 2 decimal places, midpoints away from zero
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Maps an overflowed checked operation to `AmountOutOfRange`
pub fn checked(value: Option<Decimal>) -> Result<Decimal, ValidationError> {
    value.ok_or(ValidationError::AmountOutOfRange)
}

/// `amount × percentage / 100`
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Result<Decimal, ValidationError> {
    let scaled = checked(amount.checked_mul(percentage))?;
    checked(scaled.checked_div(ONE_HUNDRED))
}
