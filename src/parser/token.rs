use std::fmt;

const META_CHARS: [char; 11] = [
    '|', // alternation
    '*', // star
    '+', // plus
    '?', // optional
    '.', // wildcard
    '{', '}', // repeat brackets
    '(', ')', // group brackets
    '[', '\\', // class bracket, escape
];

/// One unit of a compiled pattern. A token's index in the sequence is also
/// its state identifier in the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Wildcard,
    CharClass(CharClass),
    GroupOpen,
    GroupClose,
    Alternate,
    Star,
    Plus,
    Optional,
    ClassOpen,
    ClassClose,
}

impl Token {
    /// Consuming tokens own exactly one match transition.
    pub fn is_consuming(&self) -> bool {
        matches!(self, Token::Literal(_) | Token::Wildcard | Token::CharClass(_))
    }

    /// Control tokens that are stepped over with an epsilon edge to the next
    /// position. `|` is not one of them: it only leaves through its join edge.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Token::GroupOpen
                | Token::GroupClose
                | Token::Star
                | Token::Plus
                | Token::Optional
                | Token::ClassOpen
                | Token::ClassClose
        )
    }

    pub fn is_repetition(&self) -> bool {
        matches!(self, Token::Star | Token::Plus | Token::Optional)
    }

    /// Test one input symbol against this token. Non-consuming tokens never match.
    pub fn matches(&self, c: char) -> bool {
        match self {
            Token::Literal(t) => *t == c,
            Token::Wildcard => true,
            Token::CharClass(class) => class.matches(c),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(c) if META_CHARS.contains(c) => write!(f, "\\{}", c),
            Token::Literal(c) => write!(f, "{}", c),
            Token::Wildcard => write!(f, "."),
            Token::CharClass(class) => write!(f, "{}", class),
            Token::GroupOpen => write!(f, "("),
            Token::GroupClose => write!(f, ")"),
            Token::Alternate => write!(f, "|"),
            Token::Star => write!(f, "*"),
            Token::Plus => write!(f, "+"),
            Token::Optional => write!(f, "?"),
            Token::ClassOpen => write!(f, "["),
            Token::ClassClose => write!(f, "]"),
        }
    }
}

/// The interior of a `[...]` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    pub negated: bool,
    pub items: Vec<ClassItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClassItem {
    Char(char),        // a
    Range(char, char), // a - z, inclusive
}

impl CharClass {
    pub fn matches(&self, c: char) -> bool {
        let found = self.items.iter().any(|item| match item {
            ClassItem::Char(t) => *t == c,
            ClassItem::Range(a, b) => *a <= c && c <= *b,
        });
        found != self.negated
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "^")?;
        }
        for (i, item) in self.items.iter().enumerate() {
            match item {
                ClassItem::Char(c) => write_class_char(f, *c, i == 0)?,
                ClassItem::Range(a, b) => {
                    write_class_char(f, *a, i == 0)?;
                    write!(f, "-")?;
                    write_class_char(f, *b, false)?;
                }
            }
        }
        Ok(())
    }
}

fn write_class_char(f: &mut fmt::Formatter<'_>, c: char, first: bool) -> fmt::Result {
    match c {
        ']' | '\\' | '-' => write!(f, "\\{}", c),
        '^' if first => write!(f, "\\^"),
        _ => write!(f, "{}", c),
    }
}
