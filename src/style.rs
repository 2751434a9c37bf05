//! Abstract style tokens produced by the field engine
//!
//! The engine never deals in colors. It tags fields and cells with a
//! [`StyleRef`] and leaves the mapping to [`crate::ui::theme`].

/// Number of distinct field colors before falling back to [`StyleRef::Neutral`]
pub const PALETTE_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRef {
    /// Field color by palette slot (`0..PALETTE_LEN`)
    Palette(u8),
    /// Field declared after the palette ran out
    Neutral,
    /// Column not covered by any field
    Unused,
    /// Mutated-row bit that belongs to a field with a new value
    Emphasis,
    /// Mutated-row bit that was not written
    Dim,
}

impl StyleRef {
    /// Style for the field declared at `index` (0-based, pre-sort order).
    pub fn for_declaration(index: usize) -> Self {
        if index < PALETTE_LEN {
            StyleRef::Palette(index as u8)
        } else {
            StyleRef::Neutral
        }
    }
}
