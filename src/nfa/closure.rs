use super::relation::{EpsilonRelation, StateId, StateSet};

/// All states reachable from `start` through zero or more epsilon edges,
/// `start` included.
pub fn epsilon_closure(relation: &EpsilonRelation, start: StateId) -> StateSet {
    let mut closure = StateSet::new();
    extend_closure(relation, start, &mut closure, None);
    closure
}

/// Union of the closures of every state in `starts`.
pub fn epsilon_closure_of<I>(relation: &EpsilonRelation, starts: I) -> StateSet
where
    I: IntoIterator<Item = StateId>,
{
    let mut closure = StateSet::new();
    for start in starts {
        extend_closure(relation, start, &mut closure, None);
    }
    closure
}

/// Add the closure of `start` to `closure`.
///
/// A state already in `closure` is never expanded again, which is what stops
/// the walk on the cycles `*` and `+` create. When `used` is given, every edge
/// that discovered a new state is appended to it.
pub(crate) fn extend_closure(
    relation: &EpsilonRelation,
    start: StateId,
    closure: &mut StateSet,
    mut used: Option<&mut Vec<(StateId, StateId)>>,
) {
    if !closure.insert(start) {
        return;
    }

    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        // reversed so that the first inserted edge is explored first
        for &next_id in relation.targets(id).iter().rev() {
            if closure.insert(next_id) {
                if let Some(used) = used.as_deref_mut() {
                    used.push((id, next_id));
                }
                stack.push(next_id);
            }
        }
    }
}
