use crate::core::{AppError, Result};
use crate::modules::pricing::FieldValue;

/// Defaults and limits applied by the HTTP API before calculating
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// VAT percentage used when a request leaves it out
    pub default_vat_percentage: String,
    pub max_discounts: usize,
    pub max_downpayment_terms: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_vat_percentage: "8".to_string(),
            max_discounts: 3,
            max_downpayment_terms: 3,
        }
    }
}

impl PricingConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(PricingConfig {
            default_vat_percentage: lookup("DEFAULT_VAT_PERCENTAGE")
                .unwrap_or(defaults.default_vat_percentage),
            max_discounts: parse_limit(lookup, "MAX_DISCOUNTS", defaults.max_discounts)?,
            max_downpayment_terms: parse_limit(
                lookup,
                "MAX_DOWNPAYMENT_TERMS",
                defaults.max_downpayment_terms,
            )?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !FieldValue::parse(&self.default_vat_percentage).is_parsed() {
            return Err(AppError::configuration(
                "DEFAULT_VAT_PERCENTAGE must be a number",
            ));
        }

        if self.max_discounts == 0 || self.max_downpayment_terms == 0 {
            return Err(AppError::configuration(
                "MAX_DISCOUNTS and MAX_DOWNPAYMENT_TERMS must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn parse_limit<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}
