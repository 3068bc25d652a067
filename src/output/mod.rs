//! Output formatting module
//!
//! Renders gateway responses for the terminal.

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
