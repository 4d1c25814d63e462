use rust_decimal::Decimal;

use crate::core::error::ValidationError;
use crate::core::money::{checked, ONE_HUNDRED};
use crate::modules::pricing::models::DiscountStep;

/// Result of running a price through a sequence of discounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountChain {
    pub steps: Vec<DiscountStep>,
    /// Price after the last step, or the starting price when there are no steps
    pub final_price: Decimal,
}

impl DiscountChain {
    /// Sum of the amounts removed by every step
    pub fn total_discount(&self) -> Result<Decimal, ValidationError> {
        self.steps.iter().try_fold(Decimal::ZERO, |total, step| {
            checked(total.checked_add(step.net_list_price))
        })
    }
}

/// Applies sequential percentage discounts
pub struct DiscountCalculator;

impl DiscountCalculator {
    /// Apply one discount to `price`
    ///
    /// `discounted_price = price × (1 − percentage/100)` and the step records
    /// the difference as its net list price.
    pub fn apply(price: Decimal, percentage: Decimal) -> Result<DiscountStep, ValidationError> {
        let rate = checked(percentage.checked_div(ONE_HUNDRED))?;
        let factor = checked(Decimal::ONE.checked_sub(rate))?;
        let discounted_price = checked(price.checked_mul(factor))?;
        let net_list_price = checked(price.checked_sub(discounted_price))?;

        Ok(DiscountStep {
            discount_percentage: percentage,
            discounted_price,
            net_list_price,
        })
    }

    /// Fold `percentages` over `list_price` in order.
    ///
    /// Each step starts from the previous step's discounted price.
    pub fn apply_chain(
        list_price: Decimal,
        percentages: &[Decimal],
    ) -> Result<DiscountChain, ValidationError> {
        percentages.iter().try_fold(
            DiscountChain {
                steps: Vec::with_capacity(percentages.len()),
                final_price: list_price,
            },
            |mut chain, &percentage| {
                let step = Self::apply(chain.final_price, percentage)?;
                chain.final_price = step.discounted_price;
                chain.steps.push(step);
                Ok(chain)
            },
        )
    }
}
