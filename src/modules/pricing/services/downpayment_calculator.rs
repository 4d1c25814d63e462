use rust_decimal::Decimal;

use crate::core::error::ValidationError;
use crate::core::money::{checked, percent_of, ONE_HUNDRED};
use crate::modules::pricing::models::DownpaymentStep;

/// Downpayment breakdown over a fixed total payable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownpaymentSchedule {
    pub steps: Vec<DownpaymentStep>,
    /// Sum of every term's downpayment amount, before the reservation
    pub gross_downpayment: Decimal,
    /// Sum of every term's percentage
    pub total_percentage: Decimal,
}

impl DownpaymentSchedule {
    /// `100 - total_percentage`
    pub fn remaining_percentage(&self) -> Result<Decimal, ValidationError> {
        checked(ONE_HUNDRED.checked_sub(self.total_percentage))
    }
}

/// Splits a total payable into downpayment terms
pub struct DownpaymentCalculator;

impl DownpaymentCalculator {
    /// Compute one term.
    ///
    /// Terms with zero or negative months have no monthly amortization.
    pub fn term(
        total_payable: Decimal,
        percentage: Decimal,
        months: Decimal,
    ) -> Result<DownpaymentStep, ValidationError> {
        let downpayment_amount = percent_of(total_payable, percentage)?;
        let monthly_amount = if months > Decimal::ZERO {
            checked(downpayment_amount.checked_div(months))?
        } else {
            Decimal::ZERO
        };

        Ok(DownpaymentStep {
            downpayment_percentage: percentage,
            payable_in_months: months,
            downpayment_amount,
            monthly_amount,
        })
    }

    /// Compute every term against the same total payable.
    ///
    /// `terms` holds `(percentage, months)` pairs; terms do not affect each other.
    pub fn schedule(
        total_payable: Decimal,
        terms: &[(Decimal, Decimal)],
    ) -> Result<DownpaymentSchedule, ValidationError> {
        let mut schedule = DownpaymentSchedule {
            steps: Vec::with_capacity(terms.len()),
            gross_downpayment: Decimal::ZERO,
            total_percentage: Decimal::ZERO,
        };

        for &(percentage, months) in terms {
            let step = Self::term(total_payable, percentage, months)?;
            schedule.gross_downpayment =
                checked(schedule.gross_downpayment.checked_add(step.downpayment_amount))?;
            schedule.total_percentage =
                checked(schedule.total_percentage.checked_add(percentage))?;
            schedule.steps.push(step);
        }

        Ok(schedule)
    }
}
