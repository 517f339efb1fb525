//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop. Statement
//! forms live in `stmt.rs`.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{config::ParserConfig, stmt::parse_stmt};

/// The main parser structure that maintains parsing state.
///
/// Owns the lexer it pulls from and always holds a current and a peek token,
/// both `EOF` on empty input.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Errors in the order they were found
    errors: Vec<Error>,
    config: ParserConfig,
    /// Number of tokens pulled from the lexer so far
    pulled: usize,
    /// Set once `config.max_tokens` has been hit
    exhausted: bool,
}

impl Parser {
    /// Creates a parser with the default (lenient, unbounded) policies.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_config(lexer, ParserConfig::default())
    }

    pub fn with_config(mut lexer: Lexer, config: ParserConfig) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            config,
            pulled: 2,
            exhausted: false,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    ///
    /// Does nothing once the token budget is spent.
    pub fn next_token(&mut self) {
        if self.exhausted {
            return;
        }

        if let Some(limit) = self.config.max_tokens {
            if self.pulled >= limit {
                self.exhausted = true;
                self.errors.push(Error::new(
                    ErrorImpl::TokenLimitExceeded { limit },
                    self.current_token.span.start,
                ));
                return;
            }
        }

        let next = self.lexer.next_token();
        self.pulled += 1;
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Advances if the peek token is of `kind`.
    ///
    /// Otherwise records an error against the peek token and leaves the
    /// cursor where it is; the caller abandons the statement. Also fails when
    /// the token budget runs out on the advance.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            !self.exhausted
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                received: self.peek_token.kind,
                literal: self.peek_token.literal.clone(),
            },
            self.peek_token.span.start,
        ));
    }

    pub fn push_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Whether the token budget has run out.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn tokens_pulled(&self) -> usize {
        self.pulled
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until `EOF`.
    ///
    /// Tokens that cannot start a statement are stepped over. Statements that
    /// fail leave their error behind and contribute nothing to the program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) && !self.exhausted {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }
}

/// Parses `source` with the default policies.
///
/// # Returns
///
/// The program and every error recorded while building it.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    parse_with_config(source, ParserConfig::default())
}

pub fn parse_with_config(source: &str, config: ParserConfig) -> (Program, Vec<Error>) {
    let mut parser = Parser::with_config(Lexer::new(source), config);
    let program = parser.parse_program();

    (program, parser.into_errors())
}
