//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - `let` and `return` statements
//! - Error accumulation and recovery between statements
//! - Skipping tokens that cannot start a statement
//! - The strict and token budget policies

use crate::{
    ast::ast::{Node, Statement},
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    config::ParserConfig,
    parser::{parse, parse_with_config, Parser},
};

fn assert_no_errors(parser: &Parser) {
    let messages = parser.error_messages();
    assert!(
        messages.is_empty(),
        "parser had {} errors: {:?}",
        messages.len(),
        messages
    );
}

fn check_let_statement(stmt: &Statement, name: &str) {
    assert_eq!(stmt.token_literal(), "let");

    match stmt {
        Statement::Let(let_stmt) => {
            assert_eq!(let_stmt.name.value, name);
            assert_eq!(let_stmt.name.token_literal(), name);
            assert!(let_stmt.value.is_none());
        }
        other => panic!("Expected let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let source = "let x = 5;\nlet y = 10;\nlet foobar = 838383;";
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert_no_errors(&parser);
    assert_eq!(program.statements.len(), 3);

    for (stmt, name) in program.iter().zip(["x", "y", "foobar"]) {
        check_let_statement(stmt, name);
    }
}

#[test]
fn test_parse_return_statements() {
    let source = "return 5;\nreturn true;\nreturn add(1,2);";
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert_no_errors(&parser);
    assert_eq!(program.statements.len(), 3);

    for stmt in &program {
        match stmt {
            Statement::Return(return_stmt) => {
                assert_eq!(return_stmt.token_literal(), "return");
                assert!(return_stmt.return_value.is_none());
            }
            other => panic!("Expected return statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_empty_return() {
    let (program, errors) = parse("return;");

    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "return ;");
}

#[test]
fn test_parse_empty_input() {
    for source in ["", "   ", "\n\t\r\n"] {
        let (program, errors) = parse(source);

        assert!(program.is_empty());
        assert!(errors.is_empty());
        assert_eq!(program.token_literal(), "");
    }
}

#[test]
fn test_missing_assign() {
    let mut parser = Parser::new(Lexer::new("let x 5;"));
    let program = parser.parse_program();

    assert!(program.is_empty());
    assert_eq!(parser.error_messages(), vec!["next token got=INT want=ASSIGN"]);

    match parser.errors()[0].get_internal_error() {
        ErrorImpl::UnexpectedToken {
            expected,
            received,
            literal,
        } => {
            assert_eq!(*expected, TokenKind::Assign);
            assert_eq!(*received, TokenKind::Int);
            assert_eq!(literal, "5");
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
    assert_eq!(parser.errors()[0].get_position().0, 6);
}

#[test]
fn test_missing_identifier() {
    let (program, errors) = parse("let = 10;");

    assert!(program.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "next token got=ASSIGN want=IDENT");
}

#[test]
fn test_errors_accumulate_across_statements() {
    let source = "let = 10;\nlet y 5;\nlet 838383;";
    let (program, errors) = parse(source);

    assert!(program.is_empty());
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "next token got=ASSIGN want=IDENT",
            "next token got=INT want=ASSIGN",
            "next token got=INT want=IDENT",
        ]
    );
}

#[test]
fn test_good_statements_survive_a_bad_one() {
    let source = "let a = 1;\nlet b 2;\nlet c = 3;\nreturn c;";
    let (program, errors) = parse(source);

    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 3);
    check_let_statement(&program.statements[0], "a");
    check_let_statement(&program.statements[1], "c");
    assert!(matches!(program.statements[2], Statement::Return(_)));
}

#[test]
fn test_unknown_statements_are_skipped_silently() {
    // Unrecognised leading tokens yield no statement and, by default, no error.
    let source = "5 + 5;\nfoo;\nlet x = 1;\n@ ;";
    let (program, errors) = parse(source);

    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);
    check_let_statement(&program.statements[0], "x");
}

#[test]
fn test_strict_mode_reports_unknown_statements() {
    let config = ParserConfig::default().report_unknown_statements(true);
    let (program, errors) = parse_with_config("foo;\nlet x = 1;", config);

    assert_eq!(program.statements.len(), 1);
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].get_internal_error(),
        &ErrorImpl::UnrecognisedStatement {
            kind: TokenKind::Ident,
            literal: String::from("foo"),
        }
    );
    assert_eq!(
        errors[1].get_internal_error(),
        &ErrorImpl::UnrecognisedStatement {
            kind: TokenKind::Semicolon,
            literal: String::from(";"),
        }
    );
    assert_eq!(errors[1].get_position().0, 3);
}

#[test]
fn test_token_budget_stops_missing_semicolon() {
    let config = ParserConfig::default().with_max_tokens(16);
    let mut parser = Parser::with_config(Lexer::new("let x = 5"), config);
    let program = parser.parse_program();

    assert!(program.is_empty());
    assert!(parser.is_exhausted());
    assert_eq!(parser.tokens_pulled(), 16);
    assert_eq!(
        parser.errors()[0].get_internal_error(),
        &ErrorImpl::TokenLimitExceeded { limit: 16 }
    );
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn test_token_budget_running_out_inside_expect_peek() {
    // 2: spent on the advance to the identifier; 3: spent on the advance to `=`
    for limit in [2, 3] {
        let config = ParserConfig::default().with_max_tokens(limit);
        let (program, errors) = parse_with_config("let x = 5;", config);

        assert!(program.is_empty());
        assert_eq!(errors.len(), 1, "limit {}: {:?}", limit, errors);
        assert_eq!(
            errors[0].get_internal_error(),
            &ErrorImpl::TokenLimitExceeded { limit }
        );
    }
}

#[test]
fn test_token_budget_keeps_finished_statements() {
    let source = "let a = 1;\nreturn a";
    let (program, errors) = parse_with_config(source, ParserConfig::default().bounded_by(source));

    assert_eq!(program.statements.len(), 1);
    check_let_statement(&program.statements[0], "a");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), format!("token limit of {} exceeded", source.len() + 2));
}

#[test]
fn test_source_bound_never_cuts_a_terminating_parse() {
    let sources = [
        "",
        ";",
        "let x = 5;",
        "return;",
        "let x = 5;let y = 6;return x;",
        "let a=1;let b=2;let c=3;",
        "x;y;z;",
        "let x 5;",
    ];

    for source in sources {
        let unbounded = parse(source);
        let bounded = parse_with_config(source, ParserConfig::default().bounded_by(source));
        assert_eq!(unbounded, bounded, "bound changed the parse of {:?}", source);
    }
}

#[test]
#[ignore = "never terminates: the skip to `;` has no EOF guard without a token budget"]
fn test_missing_semicolon_without_budget() {
    let (program, _) = parse("let x = 5");
    assert!(program.is_empty());
}

#[test]
fn test_nul_byte_ends_the_program() {
    let (program, errors) = parse("let x = 1;\0let y = 2;");

    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);
    check_let_statement(&program.statements[0], "x");
}

#[test]
fn test_parser_starts_with_two_tokens() {
    let parser = Parser::new(Lexer::new("let x"));

    assert_eq!(parser.current_token().kind, TokenKind::Let);
    assert_eq!(parser.peek_token().kind, TokenKind::Ident);

    let parser = Parser::new(Lexer::new(""));
    assert!(parser.current_token_is(TokenKind::EOF));
    assert!(parser.peek_token_is(TokenKind::EOF));
}

#[test]
fn test_expect_peek_does_not_advance_on_mismatch() {
    let mut parser = Parser::new(Lexer::new("let 5"));

    assert!(!parser.expect_peek(TokenKind::Ident));
    assert_eq!(parser.current_token().kind, TokenKind::Let);
    assert_eq!(parser.errors().len(), 1);

    assert!(parser.expect_peek(TokenKind::Int));
    assert_eq!(parser.current_token().literal, "5");
}

#[test]
fn test_program_display() {
    let (program, errors) = parse("let x = 5;\nreturn x;\nlet  y=add(1,2) ;");

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "let x = ;return ;let y = ;");
    assert_eq!(program.token_literal(), "let");
}
