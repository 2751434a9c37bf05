//! Field-spec error types
//!
//! Every variant is recoverable: the `regfields` flow reports it as a single
//! `REG_FIELD ERROR:` line and continues with an empty field set.

use thiserror::Error;

/// Reasons a field specification (or a numeric literal inside it) is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldSpecError {
    /// A numeric token was empty (`:3`, `5=`)
    #[error("empty number in field spec")]
    EmptyToken,

    /// A token is not a valid integer literal
    #[error("invalid literal for int(): '{0}'")]
    InvalidNumber(String),

    /// A literal does not fit in 32 bits
    #[error("value {0} does not fit in 32 bits")]
    ValueTooWide(String),

    /// A bit position outside `[0, 31]`
    #[error("bit {bit} is outside the 32-bit register")]
    BitOutOfRange { bit: u32 },

    /// An entry with too many `:` or `=` separators
    #[error("malformed field entry '{0}'")]
    MalformedEntry(String),
}
