//! Field specification parser
//!
//! A spec is a comma-separated list of entries:
//!
//! ```text
//! HIGH:LOW        range
//! BIT             single bit
//! HIGH:LOW=NEW    range with a replacement value
//! [HIGH:LOW]=NEW  brackets around the range are ignored
//! ```
//!
//! The first bad entry abandons the whole spec.

use super::errors::FieldSpecError;
use crate::value::{parse_int, REGISTER_BITS};
use tracing::trace;

/// One parsed entry, in declaration order, before styling and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField {
    pub high: u8,
    pub low: u8,
    pub new_value: Option<u32>,
}

/// Join repeated `-f` occurrences into one spec string.
pub fn join_field_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a complete field spec. Empty entries are skipped.
pub fn parse_field_spec(spec: &str) -> Result<Vec<RawField>, FieldSpecError> {
    let mut fields = Vec::new();

    for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let field = parse_entry(entry)?;
        trace!(entry, ?field, "parsed field entry");
        fields.push(field);
    }

    Ok(fields)
}

fn parse_entry(entry: &str) -> Result<RawField, FieldSpecError> {
    let mut parts = entry.split('=');
    let range = parts.next().unwrap_or_default().trim();
    let new_value = parts.next();
    if parts.next().is_some() {
        return Err(FieldSpecError::MalformedEntry(entry.to_string()));
    }

    let range = range
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .unwrap_or(range);

    let bounds: Vec<&str> = range.split(':').collect();
    let (first, second) = match bounds.as_slice() {
        [bit] => {
            let bit = parse_bit(bit)?;
            (bit, bit)
        }
        [a, b] => (parse_bit(a)?, parse_bit(b)?),
        _ => return Err(FieldSpecError::MalformedEntry(entry.to_string())),
    };

    Ok(RawField {
        high: first.max(second),
        low: first.min(second),
        new_value: new_value.map(parse_int).transpose()?,
    })
}

fn parse_bit(token: &str) -> Result<u8, FieldSpecError> {
    let bit = parse_int(token)?;
    if bit >= u32::from(REGISTER_BITS) {
        return Err(FieldSpecError::BitOutOfRange { bit });
    }
    Ok(bit as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(high: u8, low: u8, new_value: Option<u32>) -> RawField {
        RawField {
            high,
            low,
            new_value,
        }
    }

    #[test]
    fn test_parse_mixed_entries() {
        let fields = parse_field_spec("7:9=0x7,15:12,2:2,1").unwrap();
        assert_eq!(
            fields,
            vec![
                raw(9, 7, Some(0x7)),
                raw(15, 12, None),
                raw(2, 2, None),
                raw(1, 1, None),
            ]
        );
    }

    #[test]
    fn test_parse_brackets_and_whitespace() {
        let fields = parse_field_spec(" [31:16] , [3:0]=0b1010 ").unwrap();
        assert_eq!(fields, vec![raw(31, 16, None), raw(3, 0, Some(0b1010))]);
    }

    #[test]
    fn test_single_bit_with_new_value() {
        let fields = parse_field_spec("5=1").unwrap();
        assert_eq!(fields, vec![raw(5, 5, Some(1))]);
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        assert!(parse_field_spec("").unwrap().is_empty());
        assert_eq!(parse_field_spec(",,3:0,").unwrap(), vec![raw(3, 0, None)]);
    }

    #[test]
    fn test_zero_new_value_is_present() {
        let fields = parse_field_spec("3:0=0").unwrap();
        assert_eq!(fields[0].new_value, Some(0));
    }

    #[test]
    fn test_first_error_abandons_spec() {
        assert!(matches!(
            parse_field_spec("3:0,a:b,7:4"),
            Err(FieldSpecError::InvalidNumber(ref s)) if s == "a"
        ));
        assert!(matches!(
            parse_field_spec("1:2:3"),
            Err(FieldSpecError::MalformedEntry(_))
        ));
        assert!(matches!(
            parse_field_spec("3:0=1=2"),
            Err(FieldSpecError::MalformedEntry(_))
        ));
        assert!(matches!(
            parse_field_spec("32:0"),
            Err(FieldSpecError::BitOutOfRange { bit: 32 })
        ));
        assert!(matches!(
            parse_field_spec("3:"),
            Err(FieldSpecError::EmptyToken)
        ));
    }

    #[test]
    fn test_join_field_args() {
        assert_eq!(join_field_args(&["3:0", "7:4=1"]), "3:0,7:4=1");
        assert_eq!(join_field_args::<&str>(&[]), "");
    }
}
