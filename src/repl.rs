use std::io::{self, BufRead, Write};

use crate::{
    parser::{config::ParserConfig, parser::parse_with_config},
    render_error,
};

pub const PROMPT: &str = ">> ";

/// Reads lines from `input` until it runs dry, parsing each one on its own.
///
/// A line with errors prints them under `parser errors:`, one per line, each
/// followed by the rendered source location. Otherwise the parsed program is
/// printed back in normalised form. Lines are always parsed with a token bound
/// so a missing `;` reports an error instead of hanging the session.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, config: ParserConfig) -> io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let line_config = match config.max_tokens {
            Some(_) => config,
            None => config.bounded_by(&line),
        };

        let (program, errors) = parse_with_config(&line, line_config);

        if errors.is_empty() {
            writeln!(output, "{}", program)?;
            continue;
        }

        writeln!(output, "parser errors:")?;
        for error in &errors {
            writeln!(output, "\t{}", error)?;
        }
        for error in &errors {
            write!(output, "{}", render_error(error, &line, "repl"))?;
        }
    }
}
