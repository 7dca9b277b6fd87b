use thiserror::Error;

use crate::unlock::PaymentReceipt;

/// Rejected calculator input, or a derived quantity that has no finite value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid parameter `{param}`: {reason}")]
    InvalidParameter { param: &'static str, reason: String },
}

impl CalculatorError {
    pub fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        CalculatorError::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unlock store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unlock store holds malformed data: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum UnlockError {
    #[error("payment for property {property_id} failed: {reason}")]
    PaymentFailed { property_id: String, reason: String },

    /// The fee was charged but the unlock could not be saved. Retrying on
    /// the same unlocker reuses the receipt instead of charging again.
    #[error(
        "payment {} for property {} succeeded but the unlock was not saved: {}",
        .receipt.reference,
        .receipt.property_id,
        .source
    )]
    Unrecorded {
        receipt: PaymentReceipt,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("data source returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("property {0} not found")]
    UnknownProperty(String),

    #[error("invalid data source URL {0}")]
    InvalidBaseUrl(String),
}
