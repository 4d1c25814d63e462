use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Fatal input errors raised by the pricing calculator.
///
/// Only mandatory fields fail a calculation. Optional fields that do not
/// parse are replaced with zero and never produce one of these.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// List price is missing or not a finite number
    #[error("Please enter a valid number for List Price")]
    InvalidListPrice,

    /// VAT is enabled and the VAT or additional charges percentage is not a number
    #[error("Please enter valid numbers for VAT and Additional Charges")]
    InvalidVatInputs,

    /// An intermediate amount does not fit in a decimal
    #[error("Calculated amount is out of range")]
    AmountOutOfRange,
}

impl ValidationError {
    /// Stable machine-readable code used in error responses
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidListPrice => "INVALID_LIST_PRICE",
            ValidationError::InvalidVatInputs => "INVALID_VAT_INPUTS",
            ValidationError::AmountOutOfRange => "AMOUNT_OUT_OF_RANGE",
        }
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Calculation rejected its inputs
    #[error("{0}")]
    Calculation(#[from] ValidationError),

    /// Request shape errors (list limits, malformed bodies)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Calculation(err) => err.code(),
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "status": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Calculation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
