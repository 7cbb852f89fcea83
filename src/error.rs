use std::fmt;

/// Errors raised while compiling a pattern or running a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `(` was never closed, or a `)` has no matching `(`.
    UnbalancedParenthesis { position: usize },
    /// A `[` was never closed.
    UnbalancedBracket { position: usize },
    /// A `|` is not enclosed by any group.
    UnbalancedAlternation { position: usize },
    /// A `{m,n}` that is not numeric, has `m < 1`, `n < m`, or has nothing to repeat.
    MalformedRepetition { position: usize, reason: String },
    /// A class range whose start is greater than its stop, e.g. `[z-a]`.
    InvalidRange { start: char, stop: char },
    /// A class with no items, e.g. `[]`.
    EmptyClass { position: usize },
    /// A `\` at the end of the pattern.
    DanglingEscape,
    /// The automaton would have more states than the configured limit.
    SizeLimitExceeded { size: usize, limit: usize },
    /// The search was cancelled after consuming `consumed` symbols.
    Cancelled { consumed: usize },
}

impl Error {
    pub(crate) fn malformed_repetition<S: Into<String>>(position: usize, reason: S) -> Error {
        Error::MalformedRepetition {
            position,
            reason: reason.into(),
        }
    }

    /// Returns true if this error was produced while compiling a pattern.
    pub fn is_compile_error(&self) -> bool {
        !matches!(self, Error::Cancelled { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnbalancedParenthesis { position } => {
                write!(f, "unbalanced parenthesis at position {}", position)
            }
            Error::UnbalancedBracket { position } => {
                write!(f, "unterminated character class opened at position {}", position)
            }
            Error::UnbalancedAlternation { position } => {
                write!(f, "alternation at position {} is outside of any group", position)
            }
            Error::MalformedRepetition { position, reason } => {
                write!(f, "malformed repetition at position {}: {}", position, reason)
            }
            Error::InvalidRange { start, stop } => {
                write!(f, "out of range order [{}-{}]", start, stop)
            }
            Error::EmptyClass { position } => {
                write!(f, "character class at position {} is empty", position)
            }
            Error::DanglingEscape => write!(f, "escape sequence is empty"),
            Error::SizeLimitExceeded { size, limit } => {
                write!(f, "automaton needs {} states, limit is {}", size, limit)
            }
            Error::Cancelled { consumed } => {
                write!(f, "search cancelled after {} symbols", consumed)
            }
        }
    }
}

impl std::error::Error for Error {}
