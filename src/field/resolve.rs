//! Field resolution: styling, value extraction and display ordering

use super::spec::RawField;
use crate::register::Register;
use crate::style::StyleRef;
use crate::value::{extract, field_mask};
use tracing::debug;

/// A resolved bit range `[high:low]` of the register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub high: u8,
    pub low: u8,
    /// Assigned from the declaration index, never from the sorted position
    pub style: StyleRef,
    pub current_value: u32,
    pub new_value: Option<u32>,
}

impl Field {
    pub fn width(&self) -> u8 {
        self.high - self.low + 1
    }

    pub fn contains(&self, bit: u8) -> bool {
        self.low <= bit && bit <= self.high
    }

    /// Unshifted mask of the bits this field covers.
    pub fn mask(&self) -> u32 {
        field_mask(self.width()) << self.low
    }

    /// The new value truncated to the field width.
    pub fn masked_new_value(&self) -> Option<u32> {
        self.new_value.map(|v| v & field_mask(self.width()))
    }
}

/// Fields in display order (`high` descending, ties in declaration order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Style each raw entry by its declaration index, extract its current
    /// value from `register`, then sort for display.
    pub fn resolve(raw: &[RawField], register: Register) -> Self {
        let mut fields: Vec<Field> = raw
            .iter()
            .enumerate()
            .map(|(index, r)| Field {
                high: r.high,
                low: r.low,
                style: StyleRef::for_declaration(index),
                current_value: extract(register.value(), r.high, r.low),
                new_value: r.new_value,
            })
            .collect();

        fields.sort_by(|a, b| b.high.cmp(&a.high));

        for field in &fields {
            debug!(
                high = field.high,
                low = field.low,
                current = field.current_value,
                new = ?field.new_value,
                "resolved field"
            );
        }

        FieldSet { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when at least one field carries a new value (including zero).
    pub fn has_mutation(&self) -> bool {
        self.fields.iter().any(|f| f.new_value.is_some())
    }

    /// Style of the last field in display order covering `bit`.
    pub fn style_for_bit(&self, bit: u8) -> StyleRef {
        self.fields
            .iter()
            .fold(StyleRef::Unused, |style, f| if f.contains(bit) { f.style } else { style })
    }

    /// Whether `bit` is written by any field with a new value.
    pub fn is_written(&self, bit: u8) -> bool {
        self.fields
            .iter()
            .any(|f| f.new_value.is_some() && f.contains(bit))
    }
}
