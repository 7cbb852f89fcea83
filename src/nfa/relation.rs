use std::collections::BTreeSet;

/// A state is the position of a token; the accepting state is one past the last token.
pub type StateId = usize;

pub type StateSet = BTreeSet<StateId>;

/// Consuming transitions: at most one successor per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRelation {
    next: Vec<Option<StateId>>,
}

impl MatchRelation {
    pub(crate) fn new(next: Vec<Option<StateId>>) -> Self {
        MatchRelation { next }
    }

    /// The state reached after `state` consumes a symbol, if `state` consumes at all.
    pub fn get(&self, state: StateId) -> Option<StateId> {
        self.next.get(state).copied().flatten()
    }

    pub fn edges(&self) -> impl Iterator<Item = (StateId, StateId)> + '_ {
        self.next
            .iter()
            .enumerate()
            .filter_map(|(from, to)| to.map(|to| (from, to)))
    }

    pub fn len(&self) -> usize {
        self.next.iter().filter(|to| to.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which construction rule produced an epsilon edge. Only used to label
/// edges; the closure engine treats every kind the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Step over a control token.
    Skip,
    /// `*`: operand start to the `*` token (zero repetitions).
    StarSkip,
    /// `*`: the `*` token back to the operand start.
    StarLoop,
    /// `+`: the `+` token back to the operand start.
    PlusLoop,
    /// `?`: operand start to just past the `?` token.
    OptionalSkip,
    /// `(` to the first token of an alternative.
    GroupEnter,
    /// `|` to the `)` closing its group.
    AlternateJoin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpsilonEdge {
    pub kind: EdgeKind,
    pub from: StateId,
    pub to: StateId,
}

/// Non-consuming transitions, kept both as a tagged edge list and as a
/// merged adjacency list indexed by state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsilonRelation {
    adjacency: Vec<Vec<StateId>>,
    edges: Vec<EpsilonEdge>,
}

impl EpsilonRelation {
    pub(crate) fn new(adjacency: Vec<Vec<StateId>>, edges: Vec<EpsilonEdge>) -> Self {
        EpsilonRelation { adjacency, edges }
    }

    /// Epsilon successors of `state` in insertion order. Empty for leaves.
    pub fn targets(&self, state: StateId) -> &[StateId] {
        self.adjacency.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, from: StateId, to: StateId) -> bool {
        self.targets(from).contains(&to)
    }

    /// Every edge in construction order, with the rule that produced it.
    pub fn edges(&self) -> &[EpsilonEdge] {
        &self.edges
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &EpsilonEdge> + '_ {
        self.edges.iter().filter(move |edge| edge.kind == kind)
    }

    /// Number of distinct `(from, to)` pairs.
    pub fn len(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
