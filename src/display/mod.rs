//! Terminal display module
//!
//! Renders help markdown, styled only when the terminal wants colour.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
