// Raw calculation inputs.
//
// Every numeric field is kept as the free text a user typed. Parsing is the
// calculator's job so that the fatal/defaulted distinction lives in one place.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::PricingConfig;
use crate::core::AppError;

/// One downpayment installment term as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownpaymentTermInput {
    /// Percentage of total payable due for this term
    #[serde(default, deserialize_with = "raw_field")]
    pub downpayment_percentage: String,

    /// Number of months the term is spread over
    #[serde(default, deserialize_with = "raw_field")]
    pub payable_in_months: String,
}

impl DownpaymentTermInput {
    pub fn new(downpayment_percentage: impl Into<String>, payable_in_months: impl Into<String>) -> Self {
        Self {
            downpayment_percentage: downpayment_percentage.into(),
            payable_in_months: payable_in_months.into(),
        }
    }
}

/// Immutable snapshot of the fields needed for one calculation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculationRequest {
    pub list_price: String,
    /// Discount percentages in application order
    pub discounts: Vec<String>,
    pub vat_enabled: bool,
    pub vat_percentage: String,
    pub additional_charges_percentage: String,
    pub downpayment_terms: Vec<DownpaymentTermInput>,
    pub reservation_amount: String,
}

impl CalculationRequest {
    /// Request with only a list price; everything else empty
    pub fn new(list_price: impl Into<String>) -> Self {
        Self {
            list_price: list_price.into(),
            ..Self::default()
        }
    }

    pub fn with_discount(mut self, percentage: impl Into<String>) -> Self {
        self.discounts.push(percentage.into());
        self
    }

    pub fn with_vat(
        mut self,
        vat_percentage: impl Into<String>,
        additional_charges_percentage: impl Into<String>,
    ) -> Self {
        self.vat_enabled = true;
        self.vat_percentage = vat_percentage.into();
        self.additional_charges_percentage = additional_charges_percentage.into();
        self
    }

    pub fn with_downpayment_term(
        mut self,
        downpayment_percentage: impl Into<String>,
        payable_in_months: impl Into<String>,
    ) -> Self {
        self.downpayment_terms
            .push(DownpaymentTermInput::new(downpayment_percentage, payable_in_months));
        self
    }

    pub fn with_reservation(mut self, amount: impl Into<String>) -> Self {
        self.reservation_amount = amount.into();
        self
    }
}

/// Body of `POST /api/calculations`
///
/// Numeric fields accept JSON strings or numbers. `vat_percentage` falls back
/// to the configured default when left out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCalculationRequest {
    #[serde(default, deserialize_with = "raw_field")]
    pub list_price: String,

    #[serde(default, deserialize_with = "raw_field_list")]
    pub discounts: Vec<String>,

    #[serde(default)]
    pub vat_enabled: bool,

    #[serde(default, deserialize_with = "optional_raw_field")]
    pub vat_percentage: Option<String>,

    #[serde(default, deserialize_with = "raw_field")]
    pub additional_charges_percentage: String,

    #[serde(default)]
    pub downpayment_terms: Vec<DownpaymentTermInput>,

    #[serde(default, deserialize_with = "raw_field")]
    pub reservation_amount: String,
}

impl CreateCalculationRequest {
    /// Apply list limits and defaults, producing the calculator input
    pub fn into_calculation(
        self,
        config: &PricingConfig,
    ) -> crate::core::Result<CalculationRequest> {
        if self.discounts.len() > config.max_discounts {
            return Err(AppError::validation(format!(
                "At most {} discounts are allowed, got {}",
                config.max_discounts,
                self.discounts.len()
            )));
        }

        if self.downpayment_terms.len() > config.max_downpayment_terms {
            return Err(AppError::validation(format!(
                "At most {} downpayment terms are allowed, got {}",
                config.max_downpayment_terms,
                self.downpayment_terms.len()
            )));
        }

        Ok(CalculationRequest {
            list_price: self.list_price,
            discounts: self.discounts,
            vat_enabled: self.vat_enabled,
            vat_percentage: self
                .vat_percentage
                .unwrap_or_else(|| config.default_vat_percentage.clone()),
            additional_charges_percentage: self.additional_charges_percentage,
            downpayment_terms: self.downpayment_terms,
            reservation_amount: self.reservation_amount,
        })
    }
}

/// Accepts a JSON string, number, or null as raw field text.
///
/// Form clients send strings; API clients tend to send numbers. Both end up
/// as the text the calculator parses.
pub fn raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_raw_field(deserializer)?.unwrap_or_default())
}

/// Same as [`raw_field`], keeping an absent or null field distinct.
pub fn optional_raw_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        // Booleans are never numbers; keep them as unparsable text.
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a number or a string, got {}",
            other
        ))),
    }
}

/// Same as [`raw_field`] for a list of fields.
pub fn raw_field_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Item(#[serde(deserialize_with = "raw_field")] String);

    let items = Option::<Vec<Item>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(|Item(text)| text)
        .collect())
}
