use std::str::FromStr;

use rust_decimal::Decimal;

use crate::core::error::ValidationError;

/// Outcome of parsing one free-text numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Parsed(Decimal),
    /// Well-formed number too large (or too precise) for a `Decimal`
    OutOfRange,
    Unparsable,
}

impl FieldValue {
    /// Parse a field as typed by the user.
    ///
    /// Surrounding whitespace is ignored. The whole field must be a number in
    /// plain or scientific notation using ASCII digits: an optional sign,
    /// digits with at most one decimal point, then an optional exponent.
    /// Anything else (empty text, separators, trailing text) is `Unparsable`.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        let Some(literal) = NumericLiteral::split(text) else {
            return FieldValue::Unparsable;
        };

        literal
            .to_decimal()
            .map(FieldValue::Parsed)
            .unwrap_or(FieldValue::OutOfRange)
    }

    /// Mandatory field: unparsable text fails with `error`
    pub fn require(self, error: ValidationError) -> Result<Decimal, ValidationError> {
        match self {
            FieldValue::Parsed(value) => Ok(value),
            FieldValue::OutOfRange => Err(ValidationError::AmountOutOfRange),
            FieldValue::Unparsable => Err(error),
        }
    }

    /// Optional field: unparsable text counts as zero
    pub fn or_zero(self) -> Result<Decimal, ValidationError> {
        match self {
            FieldValue::Parsed(value) => Ok(value),
            FieldValue::OutOfRange => Err(ValidationError::AmountOutOfRange),
            FieldValue::Unparsable => Ok(Decimal::ZERO),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, FieldValue::Parsed(_))
    }
}

/// Parse an optional field, defaulting to zero
pub fn parse_or_zero(raw: &str) -> Result<Decimal, ValidationError> {
    FieldValue::parse(raw).or_zero()
}

/// Pieces of a well-formed number, borrowed from the input
struct NumericLiteral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: Option<&'a str>,
}

impl<'a> NumericLiteral<'a> {
    fn split(text: &'a str) -> Option<Self> {
        let (negative, unsigned) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
            None => (unsigned, None),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }
        if let Some(exp) = exponent {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
        }

        Some(Self {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    /// `None` when the value does not fit in a `Decimal`
    fn to_decimal(&self) -> Option<Decimal> {
        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        let mantissa = if self.fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{integer}.{}", self.fraction)
        };

        let magnitude = match self.exponent {
            None => Decimal::from_str(&mantissa).ok()?,
            Some(exp) => {
                let exp = exp.strip_prefix('+').unwrap_or(exp);
                Decimal::from_scientific(&format!("{mantissa}e{exp}")).ok()?
            }
        };

        Some(if self.negative { -magnitude } else { magnitude })
    }
}
