use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Front end of the Monkey interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub options: ParseOptions,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive session (the default).
    Repl,

    /// Parse a program and print it back, or report its errors.
    Parse {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source instead
        /// of as the source file path.
        #[clap(long, short, action)]
        source: bool,

        /// Print the token stream instead of the program.
        #[clap(long, short, action)]
        tokens: bool,
    },
}

#[derive(Args)]
pub struct ParseOptions {
    /// Report tokens that cannot start a statement instead of skipping them.
    #[clap(long, global = true, action)]
    pub strict: bool,

    /// Give up after pulling this many tokens. Defaults to a bound derived
    /// from the input length that no terminating parse reaches.
    #[arg(long, global = true)]
    pub max_tokens: Option<usize>,

    /// Print phase timings to stderr.
    #[clap(long, short, global = true, action)]
    pub verbose: bool,
}
