//! # Introduction
//!
//! regbits decodes and edits bit-fields of a 32-bit register value. It
//! renders the value as a colored bit table, reports each named range, and
//! can compute a new register value with some ranges overwritten.
//!
//! ## Pipeline
//!
//! ```text
//! -f SPEC → Spec Parser → Field Resolver → Register Mutator → Layout Builder → ui
//! ```
//!
//! 1. [`field::spec`] — splits `HIGH:LOW[=NEW]` entries into raw tuples.
//! 2. [`field::resolve`] — styles fields by declaration order, extracts
//!    current values and sorts by `high` descending.
//! 3. [`register`] — overwrites fields that carry a new value.
//! 4. [`layout`] — per-bit styles and contents for one or two rows, plus the
//!    values report.
//! 5. [`ui`] — ratatui widgets rendered into a buffer, printed with crossterm
//!    or saved as SVG.
//!
//! [`dac`] is an independent decoder for packed DAC calibration codes.

pub mod cli;
pub mod dac;
pub mod field;
pub mod layout;
pub mod logging;
pub mod regfields;
pub mod register;
pub mod style;
pub mod ui;
pub mod value;
