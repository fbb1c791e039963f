use thiserror::Error;

use crate::domain::Money;

/// Domain-level failures. All of them are recoverable: the user can retry
/// with a different id or more credit; nothing here ever ends the session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VendError {
    #[error("Unknown product id: {0}")]
    UnknownProduct(u32),
    #[error("Out of stock: {0}")]
    OutOfStock(String),
    #[error("Insufficient credit: missing {missing}")]
    InsufficientCredit { missing: Money },
    #[error("Machine communication error: {0}")]
    ChannelClosed(String),
}
