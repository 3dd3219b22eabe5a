//! Dispatcher error types

use crate::OrderBookError;
use std::fmt;

/// Errors raised while parsing or applying a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line
    Empty,

    /// First token is not a known command
    UnknownCommand(String),

    /// Order type token is not one of LO, MO, IOC, FOK, ICE
    UnknownOrderType(String),

    /// Side token is not B or S
    UnknownSide(String),

    /// A required field is missing
    MissingField(&'static str),

    /// A numeric field could not be parsed as a non-negative integer
    InvalidNumber {
        /// Name of the field
        field: &'static str,
        /// The offending token
        value: String,
    },

    /// Trailing token after a complete command
    UnexpectedField(String),

    /// The book rejected the command
    Book(OrderBookError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command"),
            CommandError::UnknownCommand(token) => write!(f, "Unknown command: {}", token),
            CommandError::UnknownOrderType(token) => write!(f, "Unknown order type: {}", token),
            CommandError::UnknownSide(token) => write!(f, "Unknown side: {}", token),
            CommandError::MissingField(field) => write!(f, "Missing field: {}", field),
            CommandError::InvalidNumber { field, value } => {
                write!(f, "Invalid {}: {}", field, value)
            }
            CommandError::UnexpectedField(token) => write!(f, "Unexpected field: {}", token),
            CommandError::Book(err) => write!(f, "Order book error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Book(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OrderBookError> for CommandError {
    fn from(err: OrderBookError) -> Self {
        CommandError::Book(err)
    }
}
