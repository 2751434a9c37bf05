//! Numeric helpers shared by every command: literal parsing, bit extraction
//! and hex formatting of 32-bit words.

use crate::field::errors::FieldSpecError;

/// Width of the only register size this tool understands.
pub const REGISTER_BITS: u8 = 32;

/// Parse an integer literal with an optional `0x`, `0b` or `0o` prefix.
///
/// Single `_` separators between digits are allowed (`0xDEAD_BEEF`). A
/// non-zero decimal literal with a leading zero is rejected, as is anything
/// that does not fit in 32 bits.
pub fn parse_int(token: &str) -> Result<u32, FieldSpecError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(FieldSpecError::EmptyToken);
    }

    let invalid = || FieldSpecError::InvalidNumber(trimmed.to_string());

    let lower = trimmed.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else {
        (10, lower.as_str())
    };

    // Separators may only sit between digits, never doubled or trailing.
    let digits = digits.strip_prefix('_').filter(|_| radix != 10).unwrap_or(digits);
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(invalid());
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();

    let leading_zero = cleaned.len() > 1 && cleaned.starts_with('0');
    if radix == 10 && leading_zero && cleaned.chars().any(|c| c != '0') {
        return Err(invalid());
    }

    let wide = u64::from_str_radix(&cleaned, radix).map_err(|_| invalid())?;
    u32::try_from(wide).map_err(|_| FieldSpecError::ValueTooWide(trimmed.to_string()))
}

/// Right-justified mask covering `width` bits (`width` in `1..=32`).
pub fn field_mask(width: u8) -> u32 {
    if width >= REGISTER_BITS {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Extract bits `[high:low]` of `value`, right-justified.
pub fn extract(value: u32, high: u8, low: u8) -> u32 {
    (value >> low) & field_mask(high - low + 1)
}

/// Format a register word as `0xXXXX_XXXX`.
pub fn format_register(value: u32) -> String {
    format!("0x{:04X}_{:04X}", value >> 16, value & 0xFFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefixes() {
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("0x2A").unwrap(), 42);
        assert_eq!(parse_int("0X2a").unwrap(), 42);
        assert_eq!(parse_int("0b101010").unwrap(), 42);
        assert_eq!(parse_int("0o52").unwrap(), 42);
        assert_eq!(parse_int(" 0xDEAD_BEEF ").unwrap(), 0xDEAD_BEEF);
        assert_eq!(parse_int("0").unwrap(), 0);
        assert_eq!(parse_int("000").unwrap(), 0);
    }

    #[test]
    fn test_parse_int_rejects_garbage() {
        assert!(matches!(parse_int("a"), Err(FieldSpecError::InvalidNumber(_))));
        assert!(matches!(parse_int("0x"), Err(FieldSpecError::InvalidNumber(_))));
        assert!(matches!(parse_int("010"), Err(FieldSpecError::InvalidNumber(_))));
        assert!(matches!(parse_int("-1"), Err(FieldSpecError::InvalidNumber(_))));
        assert!(matches!(parse_int("1__0"), Err(FieldSpecError::InvalidNumber(_))));
        assert!(matches!(parse_int(""), Err(FieldSpecError::EmptyToken)));
        assert!(matches!(
            parse_int("0x1_0000_0000"),
            Err(FieldSpecError::ValueTooWide(_))
        ));
    }

    #[test]
    fn test_extract_matches_shift_and_mask() {
        let v = 0xDEAD_BEEF;
        for high in 0..32u8 {
            for low in 0..=high {
                let width = u32::from(high - low + 1);
                let expected = ((u64::from(v) >> low) & ((1u64 << width) - 1)) as u32;
                assert_eq!(extract(v, high, low), expected, "[{}:{}]", high, low);
            }
        }
    }

    #[test]
    fn test_format_register() {
        assert_eq!(format_register(0xDEAD_BEEF), "0xDEAD_BEEF");
        assert_eq!(format_register(0xA), "0x0000_000A");
    }
}
