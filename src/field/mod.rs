//! Named bit ranges within the register
//!
//! - [`spec`] turns the `-f` option text into raw `(high, low, new)` tuples
//! - [`resolve`] styles them by declaration order, extracts current values and
//!   sorts them for display
//! - [`errors`] holds [`FieldSpecError`], the only error the field engine reports

pub mod errors;
pub mod resolve;
pub mod spec;

pub use errors::FieldSpecError;
pub use resolve::{Field, FieldSet};
pub use spec::{join_field_args, parse_field_spec, RawField};
