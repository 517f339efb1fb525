//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the lexer's
//! token stream into a `Program`. It keeps two tokens buffered (current and
//! peek) and handles:
//!
//! - Statement dispatch on the current token
//! - `let` and `return` statements
//! - Accumulating errors instead of stopping at the first one
//! - Optional strictness and token budget policies (`ParserConfig`)

pub mod config;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
