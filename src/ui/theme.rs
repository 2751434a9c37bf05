use crate::style::{StyleRef, PALETTE_LEN};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub bg: Color, // SVG canvas
    pub fg: Color,
    pub field_fg: Color,
    pub palette: [Color; PALETTE_LEN],
    pub neutral: Color,
    pub rule: Color, // horizontal table rules
    pub title: Color,
    pub comment: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    field_fg: Color::Black,
    palette: [
        Color::Indexed(251), // light grey
        Color::Indexed(153), // pale blue
        Color::Indexed(226), // yellow
        Color::Indexed(190), // lime
        Color::Indexed(183), // lavender
        Color::Indexed(51),  // cyan
    ],
    neutral: Color::Indexed(15),
    rule: Color::Rgb(108, 112, 134),
    title: Color::Rgb(249, 226, 175),
    comment: Color::Rgb(108, 112, 134),
};

/// Terminal style for an engine style token
pub fn style_of(style: StyleRef) -> Style {
    match style {
        StyleRef::Palette(slot) => Style::default()
            .fg(DEFAULT_THEME.field_fg)
            .bg(DEFAULT_THEME.palette[usize::from(slot) % PALETTE_LEN]),
        StyleRef::Neutral => Style::default()
            .fg(DEFAULT_THEME.field_fg)
            .bg(DEFAULT_THEME.neutral),
        StyleRef::Unused => Style::default(),
        StyleRef::Emphasis => Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        StyleRef::Dim => Style::default().add_modifier(Modifier::DIM),
    }
}
