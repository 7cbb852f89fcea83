use log::{debug, trace};

use super::closure::extend_closure;
use super::relation::{EpsilonRelation, MatchRelation, StateId, StateSet};
use super::trace::{Observer, Step};
use crate::parser::Token;
use crate::Error;

/// Runs the automaton over a text while tracking every active state at once.
pub(crate) struct Matcher<'a> {
    tokens: &'a [Token],
    matches: &'a MatchRelation,
    epsilons: &'a EpsilonRelation,
    accept_id: StateId,
    anchored: bool,
}

impl<'a> Matcher<'a> {
    pub fn new(
        tokens: &'a [Token],
        matches: &'a MatchRelation,
        epsilons: &'a EpsilonRelation,
        anchored: bool,
    ) -> Self {
        Matcher {
            tokens,
            matches,
            epsilons,
            accept_id: tokens.len(),
            anchored,
        }
    }

    pub fn execute<O: Observer + ?Sized>(&self, text: &str, observer: &mut O) -> Result<bool, Error> {
        let wants_steps = observer.wants_steps();

        let mut active = StateSet::new();
        extend_closure(self.epsilons, 0, &mut active, None);
        observer.on_start(&active);

        if active.contains(&self.accept_id) {
            debug!("pattern accepts the empty string");
            return Ok(true);
        }

        for (index, symbol) in text.chars().enumerate() {
            if observer.should_cancel() {
                debug!("search cancelled after {} symbols", index);
                return Err(Error::Cancelled { consumed: index });
            }

            if !self.anchored {
                extend_closure(self.epsilons, 0, &mut active, None);
            }

            let matched: Vec<StateId> = active
                .iter()
                .copied()
                .filter(|&id| self.tokens.get(id).map_or(false, |t| t.matches(symbol)))
                .collect();

            let consumed: Vec<(StateId, StateId)> = matched
                .iter()
                .filter_map(|&id| self.matches.get(id).map(|next_id| (id, next_id)))
                .collect();

            let mut next = StateSet::new();
            let mut used = vec![];
            for &(_, next_id) in consumed.iter() {
                let used = if wants_steps { Some(&mut used) } else { None };
                extend_closure(self.epsilons, next_id, &mut next, used);
            }

            trace!(
                "symbol {:?} at {}: {} active, {} matched, next {:?}",
                symbol,
                index,
                active.len(),
                matched.len(),
                next
            );

            let accepted = next.contains(&self.accept_id);

            if wants_steps {
                observer.on_step(&Step {
                    index,
                    symbol,
                    active_states: active,
                    matched_states: matched,
                    consumed_edges: consumed,
                    epsilon_edges_used: used,
                    next_states: next.clone(),
                });
            }

            if accepted {
                return Ok(true);
            }
            if next.is_empty() && self.anchored {
                debug!("no active states left after {} symbols", index + 1);
                return Ok(false);
            }

            active = next;
        }

        Ok(false)
    }
}
