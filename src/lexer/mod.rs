//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into a stream
//! of tokens for the parser. It handles:
//!
//! - Single and two character operators and delimiters
//! - Recognition of keywords, identifiers and integer literals
//! - Token spans for error reporting
//! - Degrading unknown bytes to `Illegal` tokens instead of failing

pub mod lexer;
pub mod tokens;
