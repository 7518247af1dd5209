//! Error handling
//!
use serde_json::Value;
use thiserror;

/// Public error enumeration
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid operation token - expected exactly one element, actual: {actual:?}")]
    InvalidArity { actual: usize },

    #[error("Unknown operation - '{key}', expected one of: add, minus, multiply, divide")]
    UnknownOperation { key: String },

    #[error("Empty sequence - operand '{operand}' must have at least one element")]
    EmptySequence { operand: String },

    #[error("Invalid argument for '{operand}' - '{value:?}', reason: {reason}")]
    InvalidArgument {
        value: Value,
        operand: String,
        reason: String,
    },

    #[error("Broadcast mismatch - longer object length {longer} is not a multiple of shorter object length {shorter}")]
    BroadcastMismatch { longer: usize, shorter: usize },
}
