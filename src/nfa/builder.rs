use super::relation::{EdgeKind, EpsilonEdge, EpsilonRelation, MatchRelation, StateId};
use crate::parser::Token;
use crate::Error;

/// Single forward scan over the tokens that produces both relations.
///
/// Errors reported here carry token positions (state identifiers).
pub(crate) struct Builder<'a> {
    tokens: &'a [Token],
    // positions of unmatched '(' and '|'
    stack: Vec<StateId>,
    matches: Vec<Option<StateId>>,
    adjacency: Vec<Vec<StateId>>,
    edges: Vec<EpsilonEdge>,
}

impl<'a> Builder<'a> {
    pub fn build(tokens: &'a [Token]) -> Result<(MatchRelation, EpsilonRelation), Error> {
        let mut builder = Builder {
            tokens,
            stack: vec![],
            matches: vec![None; tokens.len() + 1],
            adjacency: vec![vec![]; tokens.len() + 1],
            edges: vec![],
        };
        builder.build_()?;

        Ok((
            MatchRelation::new(builder.matches),
            EpsilonRelation::new(builder.adjacency, builder.edges),
        ))
    }

    fn build_(&mut self) -> Result<(), Error> {
        let tokens = self.tokens;

        for (i, token) in tokens.iter().enumerate() {
            // where a following repetition operator loops back to
            let mut left_paren_id = i;

            match token {
                Token::GroupOpen | Token::Alternate => self.stack.push(i),
                Token::GroupClose => left_paren_id = self.build_group_close(i)?,
                Token::ClassClose => left_paren_id = self.class_open(i)?,
                _ => {}
            }

            match tokens.get(i + 1) {
                Some(Token::Star) => {
                    self.add_edge(EdgeKind::StarSkip, left_paren_id, i + 1);
                    self.add_edge(EdgeKind::StarLoop, i + 1, left_paren_id);
                }
                Some(Token::Plus) => {
                    self.add_edge(EdgeKind::PlusLoop, i + 1, left_paren_id);
                }
                Some(Token::Optional) => {
                    self.add_edge(EdgeKind::OptionalSkip, left_paren_id, i + 2);
                }
                _ => {}
            }

            if token.is_structural() {
                self.add_edge(EdgeKind::Skip, i, i + 1);
            }
            if token.is_consuming() {
                self.matches[i] = Some(i + 1);
            }
        }

        // the wrapping ')' either matched position 0 or already failed
        debug_assert!(self.stack.is_empty());
        Ok(())
    }

    /// Pop back to the matching '(' and wire every alternative of the group.
    /// Returns the position of the '('.
    fn build_group_close(&mut self, close_id: StateId) -> Result<StateId, Error> {
        let mut alternate_ids = vec![];

        loop {
            let id = match self.stack.pop() {
                Some(id) => id,
                None => {
                    return Err(match alternate_ids.first() {
                        Some(&position) => Error::UnbalancedAlternation { position },
                        None => Error::UnbalancedParenthesis { position: close_id },
                    });
                }
            };

            if self.tokens[id] == Token::Alternate {
                alternate_ids.push(id);
                continue;
            }
            // the closing ')' that wraps the pattern must meet the opening one
            if id != 0 && close_id == self.tokens.len() - 1 {
                return Err(Error::UnbalancedParenthesis { position: id });
            }

            for &alternate_id in alternate_ids.iter().rev() {
                self.add_edge(EdgeKind::GroupEnter, id, alternate_id + 1);
                self.add_edge(EdgeKind::AlternateJoin, alternate_id, close_id);
            }
            return Ok(id);
        }
    }

    fn class_open(&self, close_id: StateId) -> Result<StateId, Error> {
        self.tokens[..close_id]
            .iter()
            .rposition(|t| *t == Token::ClassOpen)
            .ok_or(Error::UnbalancedBracket { position: close_id })
    }

    fn add_edge(&mut self, kind: EdgeKind, from: StateId, to: StateId) {
        self.edges.push(EpsilonEdge { kind, from, to });

        let targets = &mut self.adjacency[from];
        if !targets.contains(&to) {
            targets.push(to);
        }
    }
}
