use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::error::ValidationError;
use crate::core::money::{checked, percent_of, ONE_HUNDRED};
use crate::modules::pricing::models::{CalculationRequest, CalculationResult};
use crate::modules::pricing::services::discount_calculator::DiscountCalculator;
use crate::modules::pricing::services::downpayment_calculator::DownpaymentCalculator;
use crate::modules::pricing::services::input_parser::{parse_or_zero, FieldValue};

/// Computes a payment schedule from a list price, discounts, VAT and
/// downpayment terms.
///
/// Stateless. The same request always yields the same result.
pub struct PricingCalculator;

impl PricingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full calculation.
    ///
    /// Fails when the list price does not parse, or when VAT is enabled and
    /// either VAT percentage or additional charges does not parse. Every other
    /// field that does not parse counts as zero. Numbers or amounts beyond the
    /// range of `Decimal` fail with `AmountOutOfRange`.
    pub fn compute(&self, request: &CalculationRequest) -> Result<CalculationResult, ValidationError> {
        let list_price =
            FieldValue::parse(&request.list_price).require(ValidationError::InvalidListPrice)?;

        let percentages = request
            .discounts
            .iter()
            .map(|raw| parse_or_zero(raw))
            .collect::<Result<Vec<_>, _>>()?;
        let chain = DiscountCalculator::apply_chain(list_price, &percentages)?;
        let discounted_price = chain.final_price;
        let total_discount = chain.total_discount()?;

        let (vat_percentage, additional_charges_percentage) = if request.vat_enabled {
            (
                FieldValue::parse(&request.vat_percentage)
                    .require(ValidationError::InvalidVatInputs)?,
                FieldValue::parse(&request.additional_charges_percentage)
                    .require(ValidationError::InvalidVatInputs)?,
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };
        let vat_amount = percent_of(discounted_price, vat_percentage)?;
        let additional_charges_amount = percent_of(discounted_price, additional_charges_percentage)?;

        let total_payable = checked(
            discounted_price
                .checked_add(vat_amount)
                .and_then(|sum| sum.checked_add(additional_charges_amount)),
        )?;

        let terms = request
            .downpayment_terms
            .iter()
            .map(|term| -> Result<(Decimal, Decimal), ValidationError> {
                Ok((
                    parse_or_zero(&term.downpayment_percentage)?,
                    parse_or_zero(&term.payable_in_months)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let schedule = DownpaymentCalculator::schedule(total_payable, &terms)?;

        let reservation_amount = parse_or_zero(&request.reservation_amount)?;
        let net_downpayment = checked(schedule.gross_downpayment.checked_sub(reservation_amount))?;

        let remaining_balance_percentage = schedule.remaining_percentage()?;
        let remaining_balance_amount = percent_of(total_payable, remaining_balance_percentage)?;

        if schedule.total_percentage > ONE_HUNDRED {
            warn!(
                total_percentage = %schedule.total_percentage,
                "Downpayment terms exceed 100% of total payable"
            );
        }

        debug!(
            discounts = chain.steps.len(),
            terms = schedule.steps.len(),
            vat_enabled = request.vat_enabled,
            %total_payable,
            %remaining_balance_amount,
            "Computed payment schedule"
        );

        Ok(CalculationResult {
            list_price,
            total_discount,
            discounts: chain.steps,
            discounted_price,
            vat_percentage,
            vat_amount,
            additional_charges_percentage,
            additional_charges_amount,
            total_payable,
            downpayments: schedule.steps,
            net_downpayment,
            remaining_balance_percentage,
            remaining_balance_amount,
        })
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `PricingCalculator::new().compute(request)`
pub fn compute(request: &CalculationRequest) -> Result<CalculationResult, ValidationError> {
    PricingCalculator::new().compute(request)
}
