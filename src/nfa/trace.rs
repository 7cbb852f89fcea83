use std::sync::atomic::{AtomicBool, Ordering};

use super::relation::{StateId, StateSet};

/// What the simulator did with one input symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Index of the symbol in the text, counted in chars.
    pub index: usize,
    pub symbol: char,
    /// Active states before the symbol was consumed.
    pub active_states: StateSet,
    /// Active states whose token accepted the symbol.
    pub matched_states: Vec<StateId>,
    /// Match transitions taken, one per matched state.
    pub consumed_edges: Vec<(StateId, StateId)>,
    /// Epsilon edges walked while computing the next active set.
    pub epsilon_edges_used: Vec<(StateId, StateId)>,
    /// Active states after the symbol was consumed.
    pub next_states: StateSet,
}

/// Hooks into a running search.
///
/// The simulator produces the same answer whichever observer is attached;
/// observers can only watch the run or stop it early.
pub trait Observer {
    /// Called once with the closure of the start state.
    fn on_start(&mut self, _active_states: &StateSet) {}

    /// Called after every consumed symbol.
    fn on_step(&mut self, _step: &Step) {}

    /// Polled before every symbol. Returning true ends the search with
    /// [`Error::Cancelled`](crate::Error::Cancelled).
    fn should_cancel(&self) -> bool {
        false
    }

    /// Whether `on_step` wants snapshots at all. Building them is skipped
    /// when this is false.
    fn wants_steps(&self) -> bool {
        true
    }
}

impl Observer for () {
    fn wants_steps(&self) -> bool {
        false
    }
}

/// Cancels a search once the shared flag is raised, e.g. from another thread.
#[derive(Debug, Clone, Copy)]
pub struct CancelFlag<'a> {
    flag: &'a AtomicBool,
}

impl<'a> CancelFlag<'a> {
    pub fn new(flag: &'a AtomicBool) -> Self {
        CancelFlag { flag }
    }
}

impl Observer for CancelFlag<'_> {
    fn should_cancel(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    fn wants_steps(&self) -> bool {
        false
    }
}

/// A full record of one search, for rendering or debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub initial_states: StateSet,
    pub steps: Vec<Step>,
    pub matched: bool,
}

impl Observer for Trace {
    fn on_start(&mut self, active_states: &StateSet) {
        self.initial_states = active_states.clone();
    }

    fn on_step(&mut self, step: &Step) {
        self.steps.push(step.clone());
    }
}
