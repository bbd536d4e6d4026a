//! Base-1024 file size conversion and formatting, plus the sizeconv CLI commands.

pub mod commands;
pub mod config;
pub mod converter;
pub mod error;
pub mod locale;
pub mod unit;

pub use converter::{FormatOptions, SizeValue, best_unit, convert, format_size, humanize};
pub use error::SizeError;
pub use locale::Locale;
pub use unit::Unit;
