//! Error handling for scorekeeper.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, StateKind, ValidationKind};
pub use error_code::ErrorCode;
