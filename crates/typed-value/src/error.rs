//! Error types for value parsing and typed extraction.

use thiserror::Error;

use crate::model::DataKind;

/// Error while interpreting text as a data kind.
///
/// Every variant is a type mismatch: the literal is not valid for the
/// requested kind. Factories that build values from text turn these into an
/// absent result rather than propagating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("type mismatch in {type_name}: invalid boolean literal {literal:?} (expected \"true\" or \"false\")")]
    InvalidBoolean {
        type_name: &'static str,
        literal: String,
    },

    #[error("type mismatch in {type_name}: expected {expected} components, found {found} in {literal:?}")]
    ComponentCount {
        type_name: &'static str,
        expected: usize,
        found: usize,
        literal: String,
    },

    #[error("type mismatch in {type_name}: no numeric value in {literal:?}")]
    InvalidNumber {
        type_name: &'static str,
        literal: String,
    },
}

impl ParseError {
    /// Returns the type name the literal was parsed against.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParseError::InvalidBoolean { type_name, .. }
            | ParseError::ComponentCount { type_name, .. }
            | ParseError::InvalidNumber { type_name, .. } => type_name,
        }
    }

    /// Returns the literal that failed to parse.
    pub fn literal(&self) -> &str {
        match self {
            ParseError::InvalidBoolean { literal, .. }
            | ParseError::ComponentCount { literal, .. }
            | ParseError::InvalidNumber { literal, .. } => literal,
        }
    }
}

/// Error during typed access to a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("wrong type: requested {expected:?}, value holds {actual:?}")]
    WrongType { expected: DataKind, actual: DataKind },
}
