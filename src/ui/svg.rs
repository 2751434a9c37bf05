//! SVG export of a rendered buffer (`--save`)

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier},
};
use rustc_hash::FxHashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Directory, relative to the working directory, that `--save` writes into
pub const SAVE_DIR: &str = "regbits_svg";

const CELL_WIDTH: u32 = 10;
const CELL_HEIGHT: u32 = 20;
const FONT_SIZE: u32 = 16;
const BASELINE: u32 = 15;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// File name for an export: `<value>[_<spec>].svg` with anything outside
/// `[A-Za-z0-9._-]` replaced by `_`.
pub fn export_file_name(value: &str, field_spec: &str) -> String {
    let stem = if field_spec.is_empty() {
        value.to_string()
    } else {
        format!("{}_{}", value, field_spec)
    };
    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.svg", safe)
}

/// Write `buffer` as an SVG file under `dir`, creating `dir` if needed.
pub fn save_svg(
    buffer: &Buffer,
    dir: &Path,
    value: &str,
    field_spec: &str,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name(value, field_spec));
    let write = |path: &Path| -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write_svg(&mut out, buffer)?;
        out.flush()
    };
    write(&path).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "saved svg");
    Ok(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextClass {
    fill: String,
    bold: bool,
    dim: bool,
}

pub fn write_svg<W: Write>(out: &mut W, buffer: &Buffer) -> io::Result<()> {
    let width = usize::from(buffer.area.width).max(1);
    let px_width = u32::from(buffer.area.width) * CELL_WIDTH;
    let px_height = u32::from(buffer.area.height) * CELL_HEIGHT;

    let mut classes: FxHashMap<TextClass, usize> = FxHashMap::default();
    let mut body = String::new();

    for (y, row) in buffer.content.chunks(width).enumerate() {
        let top = y as u32 * CELL_HEIGHT;
        for (x, cell) in row.iter().enumerate() {
            let left = x as u32 * CELL_WIDTH;
            let (fg, bg) = if cell.modifier.contains(Modifier::REVERSED) {
                (resolve_bg(cell.bg), resolve_fg(cell.fg))
            } else {
                (resolve_fg(cell.fg), resolve_bg(cell.bg))
            };

            if bg != to_hex(DEFAULT_THEME.bg) {
                body.push_str(&format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                    left, top, CELL_WIDTH, CELL_HEIGHT, bg
                ));
            }

            let symbol = cell.symbol();
            if symbol.trim().is_empty() {
                continue;
            }
            let class = TextClass {
                fill: fg,
                bold: cell.modifier.contains(Modifier::BOLD),
                dim: cell.modifier.contains(Modifier::DIM),
            };
            let next = classes.len();
            let id = *classes.entry(class).or_insert(next);
            body.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" class=\"c{}\">{}</text>\n",
                left,
                top + BASELINE,
                id,
                escape(symbol)
            ));
        }
    }

    let mut sorted: Vec<(&TextClass, &usize)> = classes.iter().collect();
    sorted.sort_by_key(|(_, id)| **id);

    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        px_width, px_height, px_width, px_height
    )?;
    writeln!(out, "<style>")?;
    writeln!(
        out,
        "text {{ font-family: monospace; font-size: {}px; white-space: pre; }}",
        FONT_SIZE
    )?;
    for (class, id) in sorted {
        writeln!(
            out,
            ".c{} {{ fill: {}; font-weight: {}; opacity: {}; }}",
            id,
            class.fill,
            if class.bold { "bold" } else { "normal" },
            if class.dim { "0.5" } else { "1" }
        )?;
    }
    writeln!(out, "</style>")?;
    writeln!(
        out,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        to_hex(DEFAULT_THEME.bg)
    )?;
    out.write_all(body.as_bytes())?;
    writeln!(out, "</svg>")
}

fn resolve_fg(color: Color) -> String {
    match color {
        Color::Reset => to_hex(DEFAULT_THEME.fg),
        c => to_hex(c),
    }
}

fn resolve_bg(color: Color) -> String {
    match color {
        Color::Reset => to_hex(DEFAULT_THEME.bg),
        c => to_hex(c),
    }
}

fn escape(symbol: &str) -> String {
    symbol
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Hex color for the SVG, using the xterm-256 palette for indexed colors.
fn to_hex(color: Color) -> String {
    let (r, g, b) = rgb(color);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(i) => indexed_rgb(i),
        Color::Reset => rgb(DEFAULT_THEME.fg),
        Color::Black => indexed_rgb(0),
        Color::Red => indexed_rgb(1),
        Color::Green => indexed_rgb(2),
        Color::Yellow => indexed_rgb(3),
        Color::Blue => indexed_rgb(4),
        Color::Magenta => indexed_rgb(5),
        Color::Cyan => indexed_rgb(6),
        Color::Gray => indexed_rgb(7),
        Color::DarkGray => indexed_rgb(8),
        Color::LightRed => indexed_rgb(9),
        Color::LightGreen => indexed_rgb(10),
        Color::LightYellow => indexed_rgb(11),
        Color::LightBlue => indexed_rgb(12),
        Color::LightMagenta => indexed_rgb(13),
        Color::LightCyan => indexed_rgb(14),
        Color::White => indexed_rgb(15),
    }
}

const BASE_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn indexed_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => BASE_16[usize::from(index)],
        16..=231 => {
            let i = usize::from(index - 16);
            (CUBE_LEVELS[i / 36], CUBE_LEVELS[(i / 6) % 6], CUBE_LEVELS[i % 6])
        }
        _ => {
            let level = 8 + (index - 232) * 10;
            (level, level, level)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_is_sanitized() {
        assert_eq!(
            export_file_name("0xDEADBEEF", "[9:7]=0x7,3:0"),
            "0xDEADBEEF__9_7__0x7_3_0.svg"
        );
        assert_eq!(export_file_name("0x1", ""), "0x1.svg");
        assert_eq!(export_file_name("a/b\\c", ""), "a_b_c.svg");
    }

    #[test]
    fn test_indexed_palette() {
        assert_eq!(indexed_rgb(15), (255, 255, 255));
        assert_eq!(indexed_rgb(51), (0, 255, 255));
        assert_eq!(indexed_rgb(226), (255, 255, 0));
        assert_eq!(indexed_rgb(251), (198, 198, 198));
        assert_eq!(to_hex(Color::Indexed(153)), "#afd7ff");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
    }
}
