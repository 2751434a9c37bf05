//! Layout builder: maps the register and its fields onto a 32-column bit grid
//! plus a textual values report.
//!
//! Output here is render-agnostic. [`crate::ui`] turns it into widgets.

use crate::field::{Field, FieldSet};
use crate::register::Register;
use crate::style::StyleRef;
use crate::value::REGISTER_BITS;
use std::fmt;

/// One bit of a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitCell {
    pub value: bool,
    pub style: StyleRef,
}

impl BitCell {
    pub fn char_value(&self) -> char {
        if self.value {
            '1'
        } else {
            '0'
        }
    }
}

/// 32 cells, bit 31 first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitRow {
    cells: Vec<BitCell>,
}

impl BitRow {
    pub fn cells(&self) -> &[BitCell] {
        &self.cells
    }

    /// Cell for register bit `bit` (not the display position).
    pub fn bit(&self, bit: u8) -> &BitCell {
        &self.cells[usize::from(REGISTER_BITS - 1 - bit)]
    }

    pub fn to_bit_string(&self) -> String {
        self.cells.iter().map(BitCell::char_value).collect()
    }
}

/// Header column: bit index and its base style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub bit: u8,
    pub style: StyleRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitTable {
    /// Register value as `0xXXXX_XXXX`
    pub title: String,
    pub columns: Vec<Column>,
    pub original: BitRow,
    /// Present only when a field carried a new value
    pub mutated: Option<BitRow>,
}

/// `[high:low] = 0xCURRENT[ --> 0xNEW]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub high: u8,
    pub low: u8,
    pub style: StyleRef,
    pub current: u32,
    pub new: Option<u32>,
}

impl FieldLine {
    fn from_field(field: &Field) -> Self {
        FieldLine {
            high: field.high,
            low: field.low,
            style: field.style,
            current: field.current_value,
            new: field.masked_new_value(),
        }
    }

    pub fn label(&self) -> String {
        format!("[{}:{}]", self.high, self.low)
    }
}

impl fmt::Display for FieldLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = 0x{:X}", self.label(), self.current)?;
        if let Some(new) = self.new {
            write!(f, " --> 0x{:X}", new)?;
        }
        Ok(())
    }
}

/// Whole-register line, with the mutated value when there is one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub original: String,
    pub mutated: Option<String>,
}

impl SummaryLine {
    /// Per-character flags over `mutated`: true where it differs from
    /// `original` at the same position. Empty without a mutation.
    pub fn changed_chars(&self) -> Vec<bool> {
        match &self.mutated {
            Some(mutated) => mutated
                .chars()
                .zip(self.original.chars())
                .map(|(m, o)| m != o)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)?;
        if let Some(mutated) = &self.mutated {
            write!(f, " --> {}", mutated)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub fields: Vec<FieldLine>,
    pub summary: SummaryLine,
}

/// Everything the renderer needs for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub table: BitTable,
    pub report: Report,
}

/// Build the bit table and report for `register`.
///
/// `mutated` is the output of [`Register::mutate`] for the same `fields`.
pub fn build_layout(register: Register, fields: &FieldSet, mutated: Option<Register>) -> Layout {
    let columns: Vec<Column> = (0..REGISTER_BITS)
        .rev()
        .map(|bit| Column {
            bit,
            style: fields.style_for_bit(bit),
        })
        .collect();

    let original = BitRow {
        cells: columns
            .iter()
            .map(|c| BitCell {
                value: register.bit(c.bit),
                style: c.style,
            })
            .collect(),
    };

    let mutated_row = mutated.map(|m| BitRow {
        cells: columns
            .iter()
            .map(|c| BitCell {
                value: m.bit(c.bit),
                style: if fields.is_written(c.bit) {
                    StyleRef::Emphasis
                } else {
                    StyleRef::Dim
                },
            })
            .collect(),
    });

    let report = Report {
        fields: fields.fields().iter().map(FieldLine::from_field).collect(),
        summary: SummaryLine {
            original: register.to_string(),
            mutated: mutated.map(|m| m.to_string()),
        },
    };

    Layout {
        table: BitTable {
            title: register.to_string(),
            columns,
            original,
            mutated: mutated_row,
        },
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::parse_field_spec;

    fn layout(spec: &str, value: u32) -> Layout {
        let register = Register::new(value);
        let fields = FieldSet::resolve(&parse_field_spec(spec).unwrap(), register);
        let mutated = register.mutate(&fields);
        build_layout(register, &fields, mutated)
    }

    #[test]
    fn test_row_bits_msb_first() {
        let l = layout("", 0x8000_0001);
        assert_eq!(
            l.table.original.to_bit_string(),
            "10000000000000000000000000000001"
        );
        assert_eq!(l.table.columns[0].bit, 31);
        assert_eq!(l.table.columns[31].bit, 0);
        assert!(l.table.mutated.is_none());
    }

    #[test]
    fn test_unstyled_without_fields() {
        let l = layout("", 0xDEAD_BEEF);
        assert!(l.table.columns.iter().all(|c| c.style == StyleRef::Unused));
        assert!(l.report.fields.is_empty());
        assert_eq!(l.report.summary.to_string(), "0xDEAD_BEEF");
    }

    #[test]
    fn test_column_styles_follow_fields() {
        let l = layout("31:28,3:0", 0);
        assert_eq!(l.table.original.bit(30).style, StyleRef::Palette(0));
        assert_eq!(l.table.original.bit(2).style, StyleRef::Palette(1));
        assert_eq!(l.table.original.bit(10).style, StyleRef::Unused);
    }

    #[test]
    fn test_mutated_row_emphasis() {
        let l = layout("3:0=0xA,7:4", 0);
        let row = l.table.mutated.as_ref().unwrap();
        assert_eq!(row.bit(1).style, StyleRef::Emphasis);
        assert_eq!(row.bit(3).style, StyleRef::Emphasis);
        assert_eq!(row.bit(5).style, StyleRef::Dim);
        assert_eq!(row.bit(31).style, StyleRef::Dim);
        assert!(row.bit(3).value);
        assert!(!row.bit(2).value);
        // the base row keeps column styles
        assert_eq!(l.table.original.bit(1).style, StyleRef::Palette(0));
    }

    #[test]
    fn test_report_lines() {
        let l = layout("31:0", 0xDEAD_BEEF);
        assert_eq!(l.report.fields[0].to_string(), "[31:0] = 0xDEADBEEF");
        assert_eq!(l.report.summary.to_string(), "0xDEAD_BEEF");
        assert!(l.report.summary.changed_chars().is_empty());
    }

    #[test]
    fn test_report_with_mutation() {
        let l = layout("3:0=0xA", 0);
        assert_eq!(l.report.fields[0].to_string(), "[3:0] = 0x0 --> 0xA");
        assert_eq!(
            l.report.summary.to_string(),
            "0x0000_0000 --> 0x0000_000A"
        );
        let changed = l.report.summary.changed_chars();
        assert_eq!(changed.len(), "0x0000_000A".len());
        assert_eq!(
            changed.iter().filter(|c| **c).count(),
            1,
            "only the last digit differs"
        );
        assert!(changed[changed.len() - 1]);
    }

    #[test]
    fn test_zero_new_value_is_reported() {
        let l = layout("7:4=0", 0xF0);
        assert_eq!(l.report.fields[0].to_string(), "[7:4] = 0xF --> 0x0");
        assert_eq!(
            l.report.summary.mutated.as_deref(),
            Some("0x0000_0000")
        );
    }
}
