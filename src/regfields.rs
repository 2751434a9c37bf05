//! The `regfields` command flow
//!
//! ```text
//! -f args → parse_field_spec → FieldSet::resolve → Register::mutate → build_layout
//! ```
//!
//! A spec error does not stop the flow. It is kept as a diagnostic and the
//! register is laid out with no fields.

use crate::field::{join_field_args, parse_field_spec, FieldSet, FieldSpecError};
use crate::layout::{build_layout, Layout};
use crate::register::Register;
use tracing::debug;

/// Prefix of the diagnostic line printed for a rejected field spec
pub const DIAGNOSTIC_PREFIX: &str = "REG_FIELD ERROR:";

#[derive(Debug, Clone)]
pub struct RegfieldsOutcome {
    pub register: Register,
    /// Set when the field spec was rejected; `fields` is then empty.
    pub diagnostic: Option<FieldSpecError>,
    pub fields: FieldSet,
    pub mutated: Option<Register>,
    pub layout: Layout,
}

impl RegfieldsOutcome {
    pub fn diagnostic_line(&self) -> Option<String> {
        self.diagnostic
            .as_ref()
            .map(|e| format!("{} {}", DIAGNOSTIC_PREFIX, e))
    }
}

pub fn run_regfields<S: AsRef<str>>(value: u32, field_args: &[S]) -> RegfieldsOutcome {
    let register = Register::new(value);
    let spec = join_field_args(field_args);

    let (fields, diagnostic) = match parse_field_spec(&spec) {
        Ok(raw) => (FieldSet::resolve(&raw, register), None),
        Err(e) => {
            debug!(spec = %spec, error = %e, "field spec rejected");
            (FieldSet::empty(), Some(e))
        }
    };

    let mutated = register.mutate(&fields);
    let layout = build_layout(register, &fields, mutated);

    RegfieldsOutcome {
        register,
        diagnostic,
        fields,
        mutated,
        layout,
    }
}
