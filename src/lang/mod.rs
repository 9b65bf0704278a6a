/*!
# Rust Language Module

This Rust module splits a sketch into lines, classifies each line as a
declaration or a `tft` call, tokenizes call arguments, and parses the
arithmetic expressions used in initializers and arguments.

*/

pub type Column = std::ops::Range<usize>;
pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod args;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use args::split_args;
pub use error::Error;
pub use error::ErrorCode;
pub use ident::VarType;
pub use lex::lex;
pub use line::{substitute_dimensions, Line, HEIGHT_SYMBOL, WIDTH_SYMBOL};
pub use parse::parse;
