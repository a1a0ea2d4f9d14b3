//! codemap report — renders a scan into one self-contained HTML document.
//!
//! This crate contains all presentation code. Scanning and analysis live in
//! `codemap-core`.
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod html;
pub mod panels;
pub mod theme;

pub use config::{ReportOptions, OUTPUT_FILE_NAME};
pub use document::{render, render_with};
pub use error::{ReportError, Result};
pub use theme::ThemeMode;
