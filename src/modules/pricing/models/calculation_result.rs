use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{round_amount, CURRENCY_CODE};

/// One link of the discount chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountStep {
    pub discount_percentage: Decimal,
    /// Price after this discount
    pub discounted_price: Decimal,
    /// Amount removed by this discount
    pub net_list_price: Decimal,
}

/// Breakdown of a single downpayment term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownpaymentStep {
    pub downpayment_percentage: Decimal,
    pub payable_in_months: Decimal,
    pub downpayment_amount: Decimal,
    /// Zero when the term is not spread over a positive number of months
    pub monthly_amount: Decimal,
}

/// Full payment schedule for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub list_price: Decimal,
    pub discounts: Vec<DiscountStep>,
    pub total_discount: Decimal,
    pub discounted_price: Decimal,
    pub vat_percentage: Decimal,
    pub vat_amount: Decimal,
    pub additional_charges_percentage: Decimal,
    pub additional_charges_amount: Decimal,
    pub total_payable: Decimal,
    pub downpayments: Vec<DownpaymentStep>,
    /// Sum of downpayment amounts less the reservation; may be negative
    pub net_downpayment: Decimal,
    /// `100 - sum of downpayment percentages`; may be negative
    pub remaining_balance_percentage: Decimal,
    pub remaining_balance_amount: Decimal,
}

impl CalculationResult {
    /// Copy with every monetary amount rounded for display.
    ///
    /// Percentages and month counts are left as entered.
    pub fn rounded(&self) -> Self {
        Self {
            list_price: round_amount(self.list_price),
            discounts: self
                .discounts
                .iter()
                .map(|step| DiscountStep {
                    discount_percentage: step.discount_percentage,
                    discounted_price: round_amount(step.discounted_price),
                    net_list_price: round_amount(step.net_list_price),
                })
                .collect(),
            total_discount: round_amount(self.total_discount),
            discounted_price: round_amount(self.discounted_price),
            vat_percentage: self.vat_percentage,
            vat_amount: round_amount(self.vat_amount),
            additional_charges_percentage: self.additional_charges_percentage,
            additional_charges_amount: round_amount(self.additional_charges_amount),
            total_payable: round_amount(self.total_payable),
            downpayments: self
                .downpayments
                .iter()
                .map(|step| DownpaymentStep {
                    downpayment_percentage: step.downpayment_percentage,
                    payable_in_months: step.payable_in_months,
                    downpayment_amount: round_amount(step.downpayment_amount),
                    monthly_amount: round_amount(step.monthly_amount),
                })
                .collect(),
            net_downpayment: round_amount(self.net_downpayment),
            remaining_balance_percentage: self.remaining_balance_percentage,
            remaining_balance_amount: round_amount(self.remaining_balance_amount),
        }
    }
}

/// Body returned by `POST /api/calculations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub currency: String,
    /// Result with monetary amounts rounded to 2 decimal places
    pub calculation: CalculationResult,
}

impl From<&CalculationResult> for CalculationResponse {
    fn from(result: &CalculationResult) -> Self {
        Self {
            currency: CURRENCY_CODE.to_string(),
            calculation: result.rounded(),
        }
    }
}
