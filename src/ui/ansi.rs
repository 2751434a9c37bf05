//! Terminal sink: prints a rendered buffer inline with crossterm styling

use crossterm::{
    queue,
    style::{
        Attribute, Color as CColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};
use ratatui::{
    buffer::{Buffer, Cell},
    style::{Color, Modifier},
};
use std::io::{self, Write};

const ATTRIBUTES: [(Modifier, Attribute); 4] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::UNDERLINED, Attribute::Underlined),
];

/// Write `buffer` row by row. With `colored` false only the symbols are
/// written, which is what a pipe or a test wants.
pub fn write_buffer<W: Write>(out: &mut W, buffer: &Buffer, colored: bool) -> io::Result<()> {
    let width = usize::from(buffer.area.width).max(1);

    for row in buffer.content.chunks(width) {
        // Drop trailing cells that would print as nothing
        let visible = row
            .iter()
            .rposition(|cell| !is_blank(cell))
            .map_or(0, |last| last + 1);

        let mut current: Option<(Color, Color, Modifier)> = None;
        for cell in &row[..visible] {
            if colored {
                let style = (cell.fg, cell.bg, cell.modifier);
                if current != Some(style) {
                    apply_style(out, style)?;
                    current = Some(style);
                }
            }
            queue!(out, Print(cell.symbol()))?;
        }

        if colored && current.is_some() {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()
}

fn is_blank(cell: &Cell) -> bool {
    cell.symbol() == " " && cell.bg == Color::Reset && !cell.modifier.contains(Modifier::REVERSED)
}

fn apply_style<W: Write>(out: &mut W, (fg, bg, modifier): (Color, Color, Modifier)) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(CColor::from(fg)),
        SetBackgroundColor(CColor::from(bg))
    )?;
    for (flag, attribute) in ATTRIBUTES {
        if modifier.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}
