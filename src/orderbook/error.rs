//! Order book error types

use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// An order with this id already rests in the book
    DuplicateOrderId(String),

    /// Iceberg order submitted with a zero display size
    InvalidDisplaySize {
        /// Identifier of the rejected order
        order_id: String,
    },

    /// Executing the order could exceed the range of a `u64` traded value
    ValueOverflow {
        /// Identifier of the rejected order
        order_id: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::DuplicateOrderId(id) => write!(f, "Duplicate order id: {}", id),
            OrderBookError::InvalidDisplaySize { order_id } => {
                write!(f, "Invalid display size for iceberg order {}", order_id)
            }
            OrderBookError::ValueOverflow { order_id } => {
                write!(f, "Traded value overflow for order {}", order_id)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
