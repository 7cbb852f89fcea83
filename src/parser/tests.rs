use super::token::*;
use super::*;
use crate::Error;

fn run(pattern: &str) -> Result<Vec<Token>, Error> {
    Parser::parse(pattern, crate::DEFAULT_SIZE_LIMIT)
}

fn make_top(tokens: Vec<Token>) -> Vec<Token> {
    let mut top = vec![Token::GroupOpen];
    top.extend(tokens);
    top.push(Token::GroupClose);
    top
}

fn lit(c: char) -> Token {
    Token::Literal(c)
}

fn class(items: Vec<ClassItem>) -> Vec<Token> {
    vec![
        Token::ClassOpen,
        Token::CharClass(CharClass {
            negated: false,
            items,
        }),
        Token::ClassClose,
    ]
}

#[cfg(test)]
mod basic {
    use super::*;

    #[test]
    fn literal() {
        let src = "abc";
        let expect = Ok(make_top(vec![lit('a'), lit('b'), lit('c')]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn empty() {
        assert_eq!(run(""), Ok(make_top(vec![])));
    }

    #[test]
    fn operators() {
        let src = "(a|b)*c+d?.";
        let expect = Ok(make_top(vec![
            Token::GroupOpen,
            lit('a'),
            Token::Alternate,
            lit('b'),
            Token::GroupClose,
            Token::Star,
            lit('c'),
            Token::Plus,
            lit('d'),
            Token::Optional,
            Token::Wildcard,
        ]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn escape() {
        let src = r"a\+\\";
        let expect = Ok(make_top(vec![lit('a'), lit('+'), lit('\\')]));

        assert_eq!(run(src), expect);
        assert_eq!(run(r"a\"), Err(Error::DanglingEscape));
    }

    #[test]
    fn stray_closers_are_literals() {
        let src = "a]}";
        let expect = Ok(make_top(vec![lit('a'), lit(']'), lit('}')]));

        assert_eq!(run(src), expect);
    }
}

#[cfg(test)]
mod char_class {
    use super::*;

    #[test]
    fn chars_and_ranges() {
        let src = "[A-Z_]x";
        let mut tokens = class(vec![ClassItem::Range('A', 'Z'), ClassItem::Char('_')]);
        tokens.push(lit('x'));

        assert_eq!(run(src), Ok(make_top(tokens)));
    }

    #[test]
    fn dash_at_edges_is_literal() {
        let src = "[-a-]";
        let tokens = class(vec![
            ClassItem::Char('-'),
            ClassItem::Char('a'),
            ClassItem::Char('-'),
        ]);

        assert_eq!(run(src), Ok(make_top(tokens)));
    }

    #[test]
    fn negated() {
        let src = "[^0-9]";
        let expect = Ok(make_top(vec![
            Token::ClassOpen,
            Token::CharClass(CharClass {
                negated: true,
                items: vec![ClassItem::Range('0', '9')],
            }),
            Token::ClassClose,
        ]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn escaped_bracket() {
        let src = r"[\]a]";
        let tokens = class(vec![ClassItem::Char(']'), ClassItem::Char('a')]);

        assert_eq!(run(src), Ok(make_top(tokens)));
    }

    #[test]
    fn errors() {
        assert_eq!(run("ab[cd"), Err(Error::UnbalancedBracket { position: 2 }));
        assert_eq!(run("[a-"), Err(Error::UnbalancedBracket { position: 0 }));
        assert_eq!(
            run("[z-a]"),
            Err(Error::InvalidRange {
                start: 'z',
                stop: 'a'
            })
        );
        assert_eq!(run("x[]"), Err(Error::EmptyClass { position: 1 }));
    }
}

#[cfg(test)]
mod repeat {
    use super::*;

    #[test]
    fn literal_range() {
        let src = "ap{2,4}y";
        let expect = Ok(make_top(vec![
            lit('a'),
            lit('p'),
            lit('p'),
            lit('p'),
            Token::Optional,
            lit('p'),
            Token::Optional,
            lit('y'),
        ]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn exact() {
        assert_eq!(run("a{3}"), Ok(make_top(vec![lit('a'), lit('a'), lit('a')])));
        assert_eq!(run("a{1,1}"), Ok(make_top(vec![lit('a')])));
    }

    #[test]
    fn at_least() {
        let src = "a{2,}";
        let expect = Ok(make_top(vec![lit('a'), lit('a'), lit('a'), Token::Star]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn group() {
        let src = "(ab){1,2}";
        let expect = Ok(make_top(vec![
            Token::GroupOpen,
            lit('a'),
            lit('b'),
            Token::GroupClose,
            Token::GroupOpen,
            lit('a'),
            lit('b'),
            Token::GroupClose,
            Token::Optional,
        ]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn nested_group() {
        let src = "x((a)b){2}";
        let span = vec![
            Token::GroupOpen,
            Token::GroupOpen,
            lit('a'),
            Token::GroupClose,
            lit('b'),
            Token::GroupClose,
        ];
        let mut tokens = vec![lit('x')];
        tokens.extend(span.clone());
        tokens.extend(span);

        assert_eq!(run(src), Ok(make_top(tokens)));
    }

    #[test]
    fn class() {
        let src = "[0-9]{2}";
        let mut tokens = super::class(vec![ClassItem::Range('0', '9')]);
        tokens.extend(super::class(vec![ClassItem::Range('0', '9')]));

        assert_eq!(run(src), Ok(make_top(tokens)));
    }

    #[test]
    fn wildcard() {
        let src = ".{1,2}";
        let expect = Ok(make_top(vec![
            Token::Wildcard,
            Token::Wildcard,
            Token::Optional,
        ]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn malformed() {
        let malformed = |src: &str| matches!(run(src), Err(Error::MalformedRepetition { .. }));

        assert!(malformed("a{0,2}"));
        assert!(malformed("a{3,2}"));
        assert!(malformed("a{x}"));
        assert!(malformed("a{2;3}"));
        assert!(malformed("a{2,3"));
        assert!(malformed("a{2,x}"));
        assert!(malformed("{2}"));
        assert!(malformed("a|{2}"));
        assert!(malformed("a*{2}"));
        assert!(malformed("a{2}{3}"));
        assert!(malformed("a{2,3}{2,3}"));
    }

    #[test]
    fn reasons() {
        let reason = |src: &str| match run(src) {
            Err(Error::MalformedRepetition { reason, .. }) => reason,
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(reason("a{x}"), "repeat count is not a number");
        assert_eq!(reason("a{2,x}"), "repeat bound is not a number");
        assert_eq!(reason("a{99999999999}"), "repeat count is too large");
        assert_eq!(reason("a{1,99999999999}"), "repeat bound is too large");
    }

    #[test]
    fn unbalanced_group() {
        assert_eq!(
            run("a){2}"),
            Err(Error::UnbalancedParenthesis { position: 2 })
        );
    }

    #[test]
    fn size_limit() {
        assert_eq!(
            Parser::parse("a{5}", 6),
            Err(Error::SizeLimitExceeded { size: 7, limit: 6 })
        );
        assert!(Parser::parse("a{4}", 7).is_ok());
        assert!(matches!(
            run("a{1,4000000000}"),
            Err(Error::SizeLimitExceeded { .. })
        ));
    }
}

#[test]
fn display_round_trip() {
    let src = r"(a|b)*[^A-Z\-]x\.";
    let tokens = run(src).unwrap();
    let text: String = tokens.iter().map(|t| t.to_string()).collect();

    assert_eq!(text, format!("({})", src));
}
