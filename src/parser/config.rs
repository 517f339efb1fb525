/// Policies the parser applies to input it cannot make sense of.
///
/// `ParserConfig::default()` is the lenient behaviour: unknown statements are
/// skipped without an error and there is no bound on the number of tokens
/// pulled. Note that with no bound a statement missing its `;` never finishes
/// parsing, since the skip to the terminator keeps reading `EOF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Record an error for every token that cannot start a statement.
    pub report_unknown_statements: bool,
    /// Stop parsing once this many tokens have been pulled from the lexer.
    pub max_tokens: Option<usize>,
}

impl ParserConfig {
    pub fn report_unknown_statements(mut self, report_unknown_statements: bool) -> Self {
        self.report_unknown_statements = report_unknown_statements;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Bounds the parse of `source` without cutting short any parse that
    /// would finish on its own.
    ///
    /// Every token but the trailing `EOF` consumes at least one byte, so a
    /// terminating parse pulls at most `len + 2` tokens including the peek.
    pub fn bounded_by(self, source: &str) -> Self {
        self.with_max_tokens(source.len() + 2)
    }
}
