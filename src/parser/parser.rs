use super::token::*;
use crate::Error;

/// Turns a pattern into the flat token sequence the automaton is built over.
///
/// Error positions reported by the tokenizer are character offsets into the
/// pattern as given, not counting the synthetic enclosing group.
pub struct Parser {
    chars: Vec<char>,
    offset: usize,
    tokens: Vec<Token>,
    size_limit: usize,
    // token count right after the last `{m,n}` rewrite
    repeat_end: Option<usize>,
}

impl Parser {
    pub fn parse(pattern: &str, size_limit: usize) -> Result<Vec<Token>, Error> {
        let mut parser = Parser {
            chars: pattern.chars().collect(),
            offset: 0,
            tokens: vec![],
            size_limit,
            repeat_end: None,
        };

        parser.push(Token::GroupOpen)?;
        parser.parse_items()?;
        parser.push(Token::GroupClose)?;

        Ok(parser.tokens)
    }

    fn parse_items(&mut self) -> Result<(), Error> {
        while let Some(c) = self.peek() {
            match c {
                '[' => self.parse_class()?,
                '{' => self.parse_repeat()?,
                '\\' => self.parse_escape()?,
                _ => {
                    self.bump();
                    let token = match c {
                        '(' => Token::GroupOpen,
                        ')' => Token::GroupClose,
                        '|' => Token::Alternate,
                        '*' => Token::Star,
                        '+' => Token::Plus,
                        '?' => Token::Optional,
                        '.' => Token::Wildcard,
                        _ => Token::Literal(c),
                    };
                    self.push(token)?;
                }
            }
        }
        Ok(())
    }

    fn parse_escape(&mut self) -> Result<(), Error> {
        self.bump(); // consume '\\'

        match self.bump() {
            Some(c) => self.push(Token::Literal(c)),
            None => Err(Error::DanglingEscape),
        }
    }

    fn parse_class(&mut self) -> Result<(), Error> {
        let position = self.offset;
        self.bump(); // consume '['

        let negated = self.next_if_eq('^');
        let mut items = Vec::new();

        loop {
            let start = match self.bump() {
                Some(']') => break,
                Some('\\') => self.bump(),
                c => c,
            }
            .ok_or(Error::UnbalancedBracket { position })?;

            // a '-' right before ']' stays a literal
            let is_range = self.peek() == Some('-') && !matches!(self.peek_at(1), Some(']') | None);
            if !is_range {
                items.push(ClassItem::Char(start));
                continue;
            }

            self.bump(); // consume '-'
            let stop = match self.bump() {
                Some('\\') => self.bump(),
                c => c,
            }
            .ok_or(Error::UnbalancedBracket { position })?;

            if start > stop {
                return Err(Error::InvalidRange { start, stop });
            }
            items.push(ClassItem::Range(start, stop));
        }

        if items.is_empty() {
            return Err(Error::EmptyClass { position });
        }

        self.push(Token::ClassOpen)?;
        self.push(Token::CharClass(CharClass { negated, items }))?;
        self.push(Token::ClassClose)
    }

    fn parse_repeat(&mut self) -> Result<(), Error> {
        let position = self.offset;
        self.bump(); // consume '{'

        let min = self.parse_number(position, "count")?;

        let max = if self.next_if_eq('}') {
            Some(min)
        } else {
            if !self.next_if_eq(',') {
                return Err(Error::malformed_repetition(position, "repeat operator wants ','"));
            }
            let max = match self.peek() {
                Some('}') => None,
                _ => Some(self.parse_number(position, "bound")?),
            };
            if !self.next_if_eq('}') {
                return Err(Error::malformed_repetition(position, "unterminated repeat operator"));
            }
            max
        };

        if min < 1 {
            return Err(Error::malformed_repetition(position, "repeat count must be at least 1"));
        }
        if let Some(max) = max {
            if max < min {
                return Err(Error::malformed_repetition(
                    position,
                    format!("out of repeat order {{{},{}}}", min, max),
                ));
            }
        }

        let span = self.tokens[self.repeat_span_start(position)?..].to_vec();

        for _ in 1..min {
            self.extend(&span)?;
        }
        match max {
            Some(max) => {
                for _ in min..max {
                    self.extend(&span)?;
                    self.push(Token::Optional)?;
                }
            }
            None => {
                self.extend(&span)?;
                self.push(Token::Star)?;
            }
        }

        self.repeat_end = Some(self.tokens.len());
        Ok(())
    }

    /// Find where the span that a `{m,n}` applies to begins: a single
    /// consuming token, a whole class, or a whole group.
    fn repeat_span_start(&self, position: usize) -> Result<usize, Error> {
        if self.repeat_end == Some(self.tokens.len()) {
            return Err(Error::malformed_repetition(
                position,
                "cannot repeat a counted repetition",
            ));
        }

        // position 0 holds the synthetic group, which is never part of a span
        let last = self.tokens.len() - 1;
        match &self.tokens[last] {
            Token::Literal(_) | Token::Wildcard => Ok(last),
            Token::ClassClose => self.tokens[..last]
                .iter()
                .rposition(|t| *t == Token::ClassOpen)
                .ok_or(Error::UnbalancedBracket { position }),
            Token::GroupClose => {
                let mut depth = 0;
                for i in (1..last).rev() {
                    match self.tokens[i] {
                        Token::GroupClose => depth += 1,
                        Token::GroupOpen if depth == 0 => return Ok(i),
                        Token::GroupOpen => depth -= 1,
                        _ => {}
                    }
                }
                Err(Error::UnbalancedParenthesis { position })
            }
            t if t.is_repetition() => Err(Error::malformed_repetition(
                position,
                "cannot repeat a repetition operator",
            )),
            _ => Err(Error::malformed_repetition(position, "nothing to repeat")),
        }
    }

    fn extend(&mut self, span: &[Token]) -> Result<(), Error> {
        for token in span {
            self.push(token.clone())?;
        }
        Ok(())
    }

    fn push(&mut self, token: Token) -> Result<(), Error> {
        // every token is a state, plus one accepting state
        let size = self.tokens.len() + 2;
        if size > self.size_limit {
            return Err(Error::SizeLimitExceeded {
                size,
                limit: self.size_limit,
            });
        }
        self.tokens.push(token);
        Ok(())
    }

    fn parse_number(&mut self, position: usize, name: &str) -> Result<u32, Error> {
        let mut num = String::new();
        while let Some(c) = self.peek().filter(|c| c.is_ascii_digit()) {
            self.bump();
            num.push(c);
        }
        if num.is_empty() {
            return Err(Error::malformed_repetition(
                position,
                format!("repeat {} is not a number", name),
            ));
        }
        // only digits were collected, so parsing fails on overflow alone
        num.parse().map_err(|_| {
            Error::malformed_repetition(position, format!("repeat {} is too large", name))
        })
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.get(self.offset + n).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += 1;
        Some(c)
    }

    fn next_if_eq(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.offset += 1;
            true
        } else {
            false
        }
    }
}
