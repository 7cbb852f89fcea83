//! A regular expression engine that builds its NFA directly over the token
//! positions of the pattern and simulates it one input symbol at a time,
//! tracking every active state at once. Matching never backtracks.
//!
//! Two characters are not plain literals: `\` escapes the character after it
//! (so `a\b` matches `ab`, and `a\\b` matches `a\b`), and a `^` right after
//! `[` negates the class (`[^a]` matches any character but `a`). Everywhere
//! else `^` is an ordinary character.
//!
//! ```
//! let nfa = regex_position_nfa::compile("(P|p|c)ython").unwrap();
//! assert!(nfa.is_match("cython"));
//! assert!(!nfa.is_match("mython"));
//! ```

mod config;
mod error;
mod nfa;
mod parser;

pub use config::{Config, DEFAULT_SIZE_LIMIT};
pub use error::Error;
pub use nfa::{
    epsilon_closure, epsilon_closure_of, CancelFlag, Compiler, EdgeKind, EpsilonEdge,
    EpsilonRelation, MatchRelation, Nfa, Observer, StateId, StateSet, Step, Trace,
};
pub use parser::{CharClass, ClassItem, Token};

/// Compile `pattern` with the default configuration.
pub fn compile(pattern: &str) -> Result<Nfa, Error> {
    Nfa::new(pattern)
}

/// Whether `nfa` accepts some prefix of `text`.
pub fn search(nfa: &Nfa, text: &str) -> bool {
    nfa.is_match(text)
}
