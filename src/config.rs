/// The default upper bound on the number of automaton states.
pub const DEFAULT_SIZE_LIMIT: usize = 10_000;

/// Options for compiling and searching with an [`Nfa`](crate::Nfa).
///
/// Every option is unset by default, in which case the `get_*` accessor
/// reports the default value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    size_limit: Option<usize>,
    anchored: Option<bool>,
}

impl Config {
    /// Return a new default configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Bound the number of states (tokens plus the accepting state) a pattern
    /// may compile into. Counted repetition is the usual way to hit it.
    pub fn size_limit(mut self, limit: usize) -> Config {
        self.size_limit = Some(limit);
        self
    }

    /// When anchored (the default), a search only succeeds if some prefix of
    /// the text is accepted. When unanchored, the automaton is restarted at
    /// every position so any substring may be accepted.
    pub fn anchored(mut self, yes: bool) -> Config {
        self.anchored = Some(yes);
        self
    }

    pub fn get_size_limit(&self) -> usize {
        self.size_limit.unwrap_or(DEFAULT_SIZE_LIMIT)
    }

    pub fn get_anchored(&self) -> bool {
        self.anchored.unwrap_or(true)
    }

    /// Options set in `o` take precedence over the ones set in `self`.
    pub(crate) fn overwrite(self, o: Config) -> Config {
        Config {
            size_limit: o.size_limit.or(self.size_limit),
            anchored: o.anchored.or(self.anchored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.get_size_limit(), DEFAULT_SIZE_LIMIT);
        assert_eq!(config.get_anchored(), true);
    }

    #[test]
    fn overwrite_prefers_other() {
        let base = Config::new().size_limit(10).anchored(false);
        let merged = base.clone().overwrite(Config::new().anchored(true));
        assert_eq!(merged.get_size_limit(), 10);
        assert_eq!(merged.get_anchored(), true);

        let merged = base.overwrite(Config::new());
        assert_eq!(merged.get_anchored(), false);
    }
}
