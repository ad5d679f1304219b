//! rill parser: resolves one line of tokens at a time into a call tree.
//!
//! Parsing and name resolution happen together: the parser must already
//! know which names are variables and which are functions to resolve
//! nested calls, so it owns both symbol tables for the duration of one
//! parse pass.

mod parser;
mod resolve;

pub use parser::Parser;
