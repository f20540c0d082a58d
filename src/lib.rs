//! `argline` is a declarative command line parser.
//!
//! A program builds a [`Parser`], registers the positional arguments, named
//! options, and boolean switches it accepts, then feeds it the process argv.
//! Registration returns copyable handles which stay valid for the lifetime of
//! the parser; after parsing, the program reads the bound string values back
//! through those handles.
//!
//! Every bound value is a string.  The parser performs no type conversion,
//! never writes to a stream, and never exits the process; it returns a
//! [`ParseResult`] accumulating every diagnostic found in a single pass.
//!
//! ```
//! use argline::{Argument, Opt, Parser, Switch};
//!
//! let mut parser = Parser::new();
//! let input = parser.add_argument(Argument::new("input").help("File to read"));
//! let level = parser.add_option(Opt::new("level").abbr('l').default_value("3"));
//! let verbose = parser.add_switch(Switch::new("verbose").abbr('v'));
//!
//! let result = parser.parse(["demo", "data.txt", "--level=7", "-v"]);
//! assert!(result.is_ok(), "{}", result.error_str());
//! assert_eq!(parser.argument(input).value(), "data.txt");
//! assert_eq!(parser.option(level).value(), "7");
//! assert!(parser.switch(verbose).is_on());
//! ```
#![deny(missing_docs)]
mod model;
mod param;
mod parser;
mod result;
pub mod tokens;

pub use model::*;
pub use param::*;
pub use parser::Parser;
pub use result::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
