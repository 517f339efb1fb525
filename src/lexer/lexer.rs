use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref IDENT_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// A pull-based scanner over an owned source buffer.
///
/// `ch` is the byte under the cursor, `0` once the cursor has run off the end.
/// A NUL byte in the input ends the stream the same way.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: u8,
    done: bool,
}

impl Lexer {
    pub fn new(input: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            input: input.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            done: false,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        let len = self.input.len();
        self.ch = self.input.as_bytes().get(self.read_position).copied().unwrap_or(0);
        self.position = self.read_position.min(len);
        self.read_position = (self.read_position + 1).min(len + 1);
    }

    fn peek_char(&self) -> u8 {
        self.input.as_bytes().get(self.read_position).copied().unwrap_or(0)
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.read_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn remainder(&self) -> &[u8] {
        &self.input.as_bytes()[self.position..]
    }

    /// Consumes the longest match of `pattern` at the cursor.
    fn read_run(&mut self, pattern: &Regex) -> (String, Span) {
        let start = self.position;
        let len = pattern.find(self.remainder()).map_or(0, |m| m.end());
        let literal = self.input[start..start + len].to_string();
        self.advance_n(len);
        (literal, MK_SPAN!(start, start + len))
    }

    /// Builds a one or two byte token, consuming the second byte when `next` follows.
    fn peek_is_eat_or(&mut self, next: u8, matched: TokenKind, single: TokenKind) -> Token {
        let start = self.position;
        if self.peek_char() == next {
            self.read_char();
            let literal = self.input[start..=self.position].to_string();
            MK_TOKEN!(matched, literal, MK_SPAN!(start, self.position + 1))
        } else {
            self.single(single)
        }
    }

    fn single(&self, kind: TokenKind) -> Token {
        MK_TOKEN!(
            kind,
            char::from(self.ch).to_string(),
            MK_SPAN!(self.position, self.position + 1)
        )
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => self.peek_is_eat_or(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.peek_is_eat_or(b'=', TokenKind::NotEq, TokenKind::Bang),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b',' => self.single(TokenKind::Comma),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            // The cursor stays on the sentinel so every later call is EOF too
            0 => {
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    MK_SPAN!(self.position, self.position)
                );
            }
            c if is_letter(c) => {
                let (literal, span) = self.read_run(&IDENT_PATTERN);
                return MK_TOKEN!(lookup_ident(&literal), literal, span);
            }
            c if is_digit(c) => {
                let (literal, span) = self.read_run(&NUMBER_PATTERN);
                return MK_TOKEN!(TokenKind::Int, literal, span);
            }
            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        token
    }
}

/// Yields every token up to and including the first `EOF`, then stops.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let token = self.next_token();
        self.done = token.is(TokenKind::EOF);
        Some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Scans `source` to completion. The last token is always `EOF`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    Lexer::new(source).collect()
}
