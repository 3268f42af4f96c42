/*!
Parsers for reading sentences, definite clauses, and goals from text.

Reading happens in two steps:
1. The source is split into [lexemes](token::Lexeme), each a [token](token::Token) together with the byte position at which the token begins.
2. The lexemes are read by either the [expression parser](expression) or the [definite clause parser](definite).

# Syntax

- A symbol begins with an ASCII letter and continues with ASCII letters, digits, or underscores.
  Symbols are read in lower case, so `P2` and `p2` are the same symbol.
- The connectives are `~`, `&`, `||`, `=>`, and `<=>`, and parentheses group.
- Whitespace is ignored.

Symbols are interned in an [AtomDB](crate::db::atom::AtomDB) only after a source has been read without error.
So, a failed read leaves the atom database as it was.
*/

pub mod definite;
pub mod expression;
pub mod token;

pub use definite::{parse_definite, parse_goal};
pub use expression::{parse_expression, parse_sentence};
