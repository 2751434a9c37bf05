//! Bit table and values panel widgets

use crate::layout::{BitRow, BitTable, Layout, Report};
use crate::style::StyleRef;
use crate::ui::theme::{style_of, DEFAULT_THEME};
use crate::value::REGISTER_BITS;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Horizontal density of the bit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthMode {
    #[default]
    Normal,
    Narrow,
    Narrower,
}

impl WidthMode {
    pub fn column_width(self) -> u16 {
        match self {
            WidthMode::Normal | WidthMode::Narrow => 2,
            WidthMode::Narrower => 1,
        }
    }

    pub fn column_spacing(self) -> u16 {
        match self {
            WidthMode::Normal => 1,
            WidthMode::Narrow | WidthMode::Narrower => 0,
        }
    }

    /// Header text for a column. Narrower keeps only the units digit.
    pub fn header_label(self, bit: u8) -> String {
        match self {
            WidthMode::Narrower => (bit % 10).to_string(),
            _ => bit.to_string(),
        }
    }

    pub fn table_width(self) -> u16 {
        let bits = u16::from(REGISTER_BITS);
        bits * self.column_width() + (bits - 1) * self.column_spacing()
    }
}

/// Rows: top rule with title, header, one or two bit rows, bottom rule
pub fn table_height(table: &BitTable) -> u16 {
    if table.mutated.is_some() {
        5
    } else {
        4
    }
}

fn right_cell(text: String, style: Style) -> Cell<'static> {
    Cell::from(Line::from(text).alignment(Alignment::Right)).style(style)
}

fn bit_row(row: &BitRow) -> Row<'static> {
    Row::new(
        row.cells()
            .iter()
            .map(|cell| right_cell(cell.char_value().to_string(), style_of(cell.style))),
    )
}

pub fn bit_table_widget(table: &BitTable, mode: WidthMode) -> Table<'static> {
    let header = Row::new(
        table
            .columns
            .iter()
            .map(|c| right_cell(mode.header_label(c.bit), style_of(c.style))),
    );

    let mut rows = vec![bit_row(&table.original)];
    if let Some(mutated) = &table.mutated {
        rows.push(bit_row(mutated));
    }

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(DEFAULT_THEME.rule))
        .title(Span::styled(
            table.title.clone(),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    Table::new(
        rows,
        std::iter::repeat(Constraint::Length(mode.column_width())).take(table.columns.len()),
    )
    .header(header)
    .column_spacing(mode.column_spacing())
    .block(block)
}

/// One line per field, then the register summary with changed digits
/// highlighted.
pub fn values_lines(report: &Report) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = report
        .fields
        .iter()
        .map(|field| {
            let mut spans = vec![
                Span::styled(field.label(), style_of(field.style)),
                Span::raw(format!(" = 0x{:X}", field.current)),
            ];
            if let Some(new) = field.new {
                spans.push(Span::styled(
                    " --> ",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
                spans.push(Span::styled(
                    format!("0x{:X}", new),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let summary = &report.summary;
    let mut spans = vec![Span::styled(
        summary.original.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(mutated) = &summary.mutated {
        spans.push(Span::styled(
            " --> ",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        let changed = summary.changed_chars();
        for (ch, is_changed) in mutated.chars().zip(changed) {
            let style = if is_changed {
                style_of(StyleRef::Emphasis)
            } else {
                Style::default()
            };
            spans.push(Span::styled(ch.to_string(), style));
        }
    }
    lines.push(Line::from(spans));

    lines
}

/// Render the bit table with the values panel below it into a fresh buffer
/// sized to fit both.
pub fn render_layout(layout: &Layout, mode: WidthMode) -> Buffer {
    let lines = values_lines(&layout.report);
    let panel_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let panel_height = lines.len() as u16;

    let table_width = mode.table_width();
    let table_height = table_height(&layout.table);
    let width = table_width.max(panel_width);

    let mut buffer = Buffer::empty(Rect::new(0, 0, width, table_height + panel_height));

    bit_table_widget(&layout.table, mode).render(
        Rect::new(0, 0, table_width, table_height),
        &mut buffer,
    );
    Paragraph::new(lines).render(
        Rect::new(0, table_height, width, panel_height),
        &mut buffer,
    );

    buffer
}

/// Plain text of a buffer, one string per row with trailing blanks trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_widths() {
        assert_eq!(WidthMode::Normal.table_width(), 95);
        assert_eq!(WidthMode::Narrow.table_width(), 64);
        assert_eq!(WidthMode::Narrower.table_width(), 32);
    }

    #[test]
    fn test_narrower_header_labels() {
        assert_eq!(WidthMode::Narrower.header_label(31), "1");
        assert_eq!(WidthMode::Narrower.header_label(7), "7");
        assert_eq!(WidthMode::Normal.header_label(31), "31");
    }
}
