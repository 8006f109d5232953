//! Calculator error types

use thiserror::Error;

/// Errors raised by the calculators before any result is produced.
///
/// A failed check means no partial result map is returned; degenerate
/// but physically expressible outcomes (e.g. a non-positive link margin)
/// are reported with sentinel values instead of errors.
#[derive(Error, Debug)]
pub enum CalcError {
    /// A parameter was present but could not be parsed as a number.
    #[error("parameter `{key}` is not numeric: {value:?}")]
    Parse { key: &'static str, value: String },

    /// A parameter violated a stated domain constraint.
    #[error("domain violation: {0}")]
    Domain(String),

    /// The requested grade of service has no Erlang-B table.
    #[error("unsupported grade of service: {0}")]
    UnsupportedGos(f64),
}

impl CalcError {
    /// Shorthand for a domain violation with a constraint description.
    pub fn domain(constraint: impl Into<String>) -> Self {
        CalcError::Domain(constraint.into())
    }
}
