use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{LetStatement, ReturnStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    match parser.current_token().kind {
        TokenKind::Let => parse_let_stmt(parser).map(Statement::Let),
        TokenKind::Return => parse_return_stmt(parser).map(Statement::Return),
        _ => {
            if parser.config().report_unknown_statements {
                let token = parser.current_token();
                let error = Error::new(
                    ErrorImpl::UnrecognisedStatement {
                        kind: token.kind,
                        literal: token.literal.clone(),
                    },
                    token.span.start,
                );
                parser.push_error(error);
            }
            None
        }
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<LetStatement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // The value is not parsed yet
    if !skip_to_semicolon(parser) {
        return None;
    }

    Some(LetStatement {
        token,
        name,
        value: None,
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<ReturnStatement> {
    let token = parser.current_token().clone();

    parser.next_token();

    if !skip_to_semicolon(parser) {
        return None;
    }

    Some(ReturnStatement {
        token,
        return_value: None,
    })
}

/// Advances until the current token is `;`.
///
/// Only a spent token budget stops the loop early, in which case this returns
/// false. Without a budget, input with no `;` left loops forever on `EOF`.
fn skip_to_semicolon(parser: &mut Parser) -> bool {
    while !parser.current_token_is(TokenKind::Semicolon) {
        if parser.is_exhausted() {
            return false;
        }
        parser.next_token();
    }
    true
}
