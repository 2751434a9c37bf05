//! Rendering built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! Nothing here draws to the live terminal through a `Terminal`. The layout is
//! rendered with ratatui widgets into an off-screen [`Buffer`], which is then
//! handed to a sink:
//!
//! - **[`table`]** — bit table and values panel widgets, width modes
//! - **[`ansi`]** — writes a buffer to stdout with crossterm styling
//! - **[`svg`]** — writes a buffer to an SVG file for `--save`
//! - **[`theme`]** — color palette
//!
//! [`Buffer`]: ratatui::buffer::Buffer

pub mod ansi;
pub mod svg;
pub mod table;
pub mod theme;

pub use table::{render_layout, WidthMode};
