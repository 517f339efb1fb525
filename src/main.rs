mod cli;

use std::{io, time::Instant};

use clap::Parser as _;
use cli::{Cli, Command, ParseOptions};
use monkey::{
    lexer::lexer::{tokenize, Lexer},
    parser::{config::ParserConfig, parser::Parser},
    render_error, repl,
};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0} parse error(s)")]
    HadErrors(usize),
}

type CliResult<T> = Result<T, CliError>;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = ParserConfig::default().report_unknown_statements(cli.options.strict);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let user = std::env::var("USER").unwrap_or_else(|_| String::from("there"));
            println!("hello {user}! this is the monkey programming language!");

            let config = match cli.options.max_tokens {
                Some(max_tokens) => config.with_max_tokens(max_tokens),
                None => config,
            };
            repl::start(io::stdin().lock(), io::stdout().lock(), config)?;
        }
        Command::Parse {
            input,
            source,
            tokens,
        } => {
            let (name, source) = if source {
                (String::from("<source>"), input)
            } else {
                let source = std::fs::read_to_string(&input)?;
                (input, source)
            };

            let config = match cli.options.max_tokens {
                Some(max_tokens) => config.with_max_tokens(max_tokens),
                None => config.bounded_by(&source),
            };

            if tokens {
                dump_tokens(&source, &cli.options);
            } else {
                parse_file(&name, &source, config, &cli.options)?;
            }
        }
    }

    Ok(())
}

fn dump_tokens(source: &str, options: &ParseOptions) {
    let start = Instant::now();
    let tokens = tokenize(source);

    if options.verbose {
        eprintln!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());
    }

    for token in tokens {
        println!("{}", token.debug());
    }
}

fn parse_file(name: &str, source: &str, config: ParserConfig, options: &ParseOptions) -> CliResult<()> {
    let start = Instant::now();

    let mut parser = Parser::with_config(Lexer::new(source), config);
    let program = parser.parse_program();

    if options.verbose {
        eprintln!(
            "Parsed {} statement(s) from {} tokens in {:?}",
            program.len(),
            parser.tokens_pulled(),
            start.elapsed()
        );
    }

    let errors = parser.into_errors();
    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", render_error(error, source, name));
        }
        return Err(CliError::HadErrors(errors.len()));
    }

    println!("{program}");
    Ok(())
}
