//! ANSI Highlight Library
//!
//! Parses text containing ANSI SGR escape sequences into styled spans, keeps
//! the parse up to date under line edits, and turns the result into editor
//! decorations.

pub mod cli;
pub mod config;
pub mod decoration;
pub mod parser;
pub mod pretty;
pub mod style;

pub use config::Config;
pub use decoration::{Decoration, DecorationRange, DecorationRegistry};
pub use parser::{Parser, ParserOptions, Span, SpliceError};
pub use style::{AttributeFlags, Color, NamedColor, Style};
