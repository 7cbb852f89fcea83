// syntax (flat, no AST)
//
// pattern   = item *
// item      = '(' | ')' | '|' | '*' | '+' | '?' | '.' | class | repeat | escape | char
// class     = '[' '^' ? class-item + ']'
// class-item = class-char ( '-' class-char ) ?
// repeat    = '{' number ( ',' number ? ) ? '}'
// escape    = '\' char
//
// The whole pattern is wrapped in one synthetic group, so the token at
// position 0 is always `(` and the last token is always `)`. `{m,n}` never
// reaches the automaton: it is rewritten into copies of the repeated span.

mod parser;
pub mod token;

pub use parser::Parser;
pub use token::{CharClass, ClassItem, Token};

#[cfg(test)]
mod tests;
