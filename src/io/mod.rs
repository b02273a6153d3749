//! Text front-end: input parsing and schedule output.
//!
//! The engine itself has no I/O; these are the collaborators that build
//! its input collections from the line-oriented text format and render
//! its schedule for consumers.

pub mod parser;
pub mod writer;

pub use parser::{parse_file, parse_str, ParseError, Problem};
