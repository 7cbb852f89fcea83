use log::debug;

use self::{builder::Builder, matcher::Matcher};
use crate::parser::{Parser, Token};
use crate::{Config, Error};

mod builder;
mod closure;
mod matcher;
mod relation;
mod trace;

pub use closure::{epsilon_closure, epsilon_closure_of};
pub use relation::{EdgeKind, EpsilonEdge, EpsilonRelation, MatchRelation, StateId, StateSet};
pub use trace::{CancelFlag, Observer, Step, Trace};

#[cfg(test)]
mod tests;

/// A pattern compiled into an automaton whose states are token positions.
///
/// Compiled automata are immutable; every search owns its own scratch state,
/// so one `Nfa` can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    tokens: Vec<Token>,
    matches: MatchRelation,
    epsilons: EpsilonRelation,
    config: Config,
}

impl Nfa {
    pub fn new(pattern: &str) -> Result<Nfa, Error> {
        Compiler::new().compile(pattern)
    }

    pub fn compiler() -> Compiler {
        Compiler::new()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn match_relation(&self) -> &MatchRelation {
        &self.matches
    }

    pub fn epsilon_relation(&self) -> &EpsilonRelation {
        &self.epsilons
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The accepting state, one past the last token.
    pub fn accept_state(&self) -> StateId {
        self.tokens.len()
    }

    /// Number of states, the accepting state included.
    pub fn state_count(&self) -> usize {
        self.tokens.len() + 1
    }

    /// The token sequence written back as a pattern, synthetic group included.
    pub fn pattern(&self) -> String {
        self.tokens.iter().map(|t| t.to_string()).collect()
    }

    pub fn epsilon_closure(&self, state: StateId) -> StateSet {
        epsilon_closure(&self.epsilons, state)
    }

    pub fn is_match(&self, text: &str) -> bool {
        matches!(self.search_with(text, &mut ()), Ok(true))
    }

    /// Search `text`, reporting progress to `observer` and honoring its
    /// cancellation requests.
    pub fn search_with<O: Observer + ?Sized>(
        &self,
        text: &str,
        observer: &mut O,
    ) -> Result<bool, Error> {
        let matcher = Matcher::new(
            &self.tokens,
            &self.matches,
            &self.epsilons,
            self.config.get_anchored(),
        );
        matcher.execute(text, observer)
    }

    /// Search `text` and keep a snapshot of every step.
    pub fn trace(&self, text: &str) -> Trace {
        let mut trace = Trace::default();
        // a Trace never cancels
        let matched = matches!(self.search_with(text, &mut trace), Ok(true));
        trace.matched = matched;
        trace
    }
}

/// Compiles patterns with a given configuration.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler::default()
    }

    pub fn configure(&mut self, config: Config) -> &mut Compiler {
        self.config = self.config.clone().overwrite(config);
        self
    }

    pub fn compile(&self, pattern: &str) -> Result<Nfa, Error> {
        let tokens = Parser::parse(pattern, self.config.get_size_limit())?;
        let (matches, epsilons) = Builder::build(&tokens)?;

        debug!(
            "compiled {:?}: {} states, {} match edges, {} epsilon edges",
            pattern,
            tokens.len() + 1,
            matches.len(),
            epsilons.len()
        );

        Ok(Nfa {
            tokens,
            matches,
            epsilons,
            config: self.config.clone(),
        })
    }
}
