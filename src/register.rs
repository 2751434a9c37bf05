//! The register word and the mutator that overwrites fields in it

use crate::field::{Field, FieldSet};
use crate::value::format_register;
use std::fmt;
use tracing::debug;

/// The raw 32-bit input value. Never modified; mutation yields a new word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register(u32);

impl Register {
    pub fn new(value: u32) -> Self {
        Register(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn bit(self, index: u8) -> bool {
        (self.0 >> index) & 1 == 1
    }

    /// Apply every field carrying a new value, in display order.
    ///
    /// Returns `None` when no field carries a new value. Overlapping writes
    /// are applied in order, so the later field wins on shared bits.
    pub fn mutate(self, fields: &FieldSet) -> Option<Register> {
        if !fields.has_mutation() {
            return None;
        }

        let mutated = fields
            .fields()
            .iter()
            .fold(self.0, |acc, field| overwrite(acc, field));

        debug!(
            original = %format_register(self.0),
            mutated = %format_register(mutated),
            "applied field writes"
        );
        Some(Register(mutated))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_register(self.0))
    }
}

fn overwrite(value: u32, field: &Field) -> u32 {
    match field.masked_new_value() {
        Some(new) => (value & !field.mask()) | (new << field.low),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::parse_field_spec;
    use crate::value::extract;

    fn mutate(spec: &str, value: u32) -> Option<u32> {
        let register = Register::new(value);
        let fields = FieldSet::resolve(&parse_field_spec(spec).unwrap(), register);
        register.mutate(&fields).map(Register::value)
    }

    #[test]
    fn test_no_new_values_means_no_mutation() {
        assert_eq!(mutate("31:0,3:0", 0x1234), None);
    }

    #[test]
    fn test_low_nibble_write() {
        assert_eq!(mutate("3:0=0xA", 0), Some(0x0000_000A));
    }

    #[test]
    fn test_full_width_write() {
        assert_eq!(mutate("31:0=0x12345678", 0xFFFF_FFFF), Some(0x1234_5678));
    }

    #[test]
    fn test_zero_write_clears_bits() {
        assert_eq!(mutate("7:4=0", 0xFF), Some(0x0F));
    }

    #[test]
    fn test_new_value_is_truncated_to_field() {
        assert_eq!(mutate("9:7=0xFF", 0), Some(0x7 << 7));
    }

    #[test]
    fn test_rewriting_current_value_is_identity() {
        let v = 0xDEAD_BEEF;
        for (high, low) in [(31, 0), (15, 8), (3, 3), (30, 1)] {
            let spec = format!("{}:{}={}", high, low, extract(v, high, low));
            assert_eq!(mutate(&spec, v), Some(v));
        }
    }

    #[test]
    fn test_mutation_is_idempotent() {
        let spec = "15:8=0x5A,3:0=0x3";
        let once = mutate(spec, 0xDEAD_BEEF).unwrap();
        assert_eq!(mutate(spec, once), Some(once));
    }

    #[test]
    fn test_overlap_later_in_display_order_wins() {
        // Display order: 7:0 then 3:0; 3:0 is written last.
        assert_eq!(mutate("3:0=0x5,7:0=0xFF", 0), Some(0xF5));
        assert_eq!(mutate("7:0=0xFF,3:0=0x5", 0), Some(0xF5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Register::new(0xDEAD_BEEF).to_string(), "0xDEAD_BEEF");
    }
}
