/*!
A recursive descent parser for infix expressions.

Precedence, from tightest to loosest:

| Level | Connectives   | Associativity |
|-------|---------------|---------------|
| 1     | `( … )`       |               |
| 2     | `~`           | right         |
| 3     | `&`, `\|\|`   | left          |
| 4     | `=>`          | left          |
| 5     | `<=>`         | left          |

Conjunction and disjunction share a level, and so `a || b & c` is read as `(a || b) & c`.

The grammar read is:

```text
iff      := implies ( "<=>" implies )*
implies  := junction ( "=>" junction )*
junction := unary ( ( "&" | "||" ) unary )*
unary    := "~" unary | primary
primary  := symbol | "(" iff ")"
```

Nesting depth is bounded only by the stack.

```rust
# use iengine::db::atom::AtomDB;
# use iengine::parse::parse_expression;
let mut atom_db = AtomDB::default();
let expression = parse_expression("a || b & c => ~d", &mut atom_db).unwrap();
assert_eq!(expression.as_string(&atom_db), "((a || b) & c) => ~d");
```
*/

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    parse::token::{tokenize, Lexeme, Token},
    structures::{
        atom::Atom,
        expression::{Arena, Expression, NodeIndex},
        sentence::Sentence,
    },
    types::err::SyntaxError,
};

/// Reads `source` as an expression, interning any fresh symbols in `atom_db`.
pub fn parse_expression(source: &str, atom_db: &mut AtomDB) -> Result<Expression, SyntaxError> {
    let lexemes = tokenize(source)?;
    if lexemes.is_empty() {
        return Err(SyntaxError::Empty);
    }

    let mut parser = Parser {
        lexemes: &lexemes,
        index: 0,
        depth: 0,
        end: source.len(),
        arena: Arena::default(),
        atom_db,
        fresh: Vec::default(),
    };

    let root = parser.iff()?;
    if let Some(lexeme) = parser.peek() {
        return Err(match lexeme.token {
            Token::Close => SyntaxError::UnbalancedParenthesis {
                position: lexeme.position,
            },
            _ => SyntaxError::UnexpectedToken {
                position: lexeme.position,
                found: lexeme.token.to_string(),
            },
        });
    }

    let Parser {
        arena,
        fresh,
        atom_db,
        ..
    } = parser;

    // Fresh symbols were given the atoms the database would give, in order.
    for name in fresh {
        atom_db.intern(&name);
    }

    let expression = arena.finish(root);
    log::trace!(target: targets::PARSE, "Read \"{source}\" as {} nodes", expression.size());
    Ok(expression)
}

/// Reads `source` as a [Sentence], interning any fresh symbols in `atom_db`.
pub fn parse_sentence(source: &str, atom_db: &mut AtomDB) -> Result<Sentence, SyntaxError> {
    Ok(Sentence::new(parse_expression(source, atom_db)?))
}

struct Parser<'a> {
    lexemes: &'a [Lexeme],

    /// The index of the next lexeme to read.
    index: usize,

    /// A count of open parentheses.
    depth: usize,

    /// The length of the source, used as the position of the end.
    end: usize,

    arena: Arena,

    atom_db: &'a mut AtomDB,

    /// Names not in the atom database, in the order they were read.
    fresh: Vec<String>,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.index)
    }

    fn next_is(&self, token: &Token) -> bool {
        self.peek().is_some_and(|lexeme| lexeme.token == *token)
    }

    fn iff(&mut self) -> Result<NodeIndex, SyntaxError> {
        let mut left = self.implies()?;
        while self.next_is(&Token::Iff) {
            self.index += 1;
            let right = self.implies()?;
            left = self.arena.iff(left, right);
        }
        Ok(left)
    }

    fn implies(&mut self) -> Result<NodeIndex, SyntaxError> {
        let mut left = self.junction()?;
        while self.next_is(&Token::Implies) {
            self.index += 1;
            let right = self.junction()?;
            left = self.arena.implies(left, right);
        }
        Ok(left)
    }

    fn junction(&mut self) -> Result<NodeIndex, SyntaxError> {
        let mut left = self.unary()?;
        loop {
            if self.next_is(&Token::And) {
                self.index += 1;
                let right = self.unary()?;
                left = self.arena.and(left, right);
            } else if self.next_is(&Token::Or) {
                self.index += 1;
                let right = self.unary()?;
                left = self.arena.or(left, right);
            } else {
                return Ok(left);
            }
        }
    }

    fn unary(&mut self) -> Result<NodeIndex, SyntaxError> {
        if self.next_is(&Token::Not) {
            self.index += 1;
            let child = self.unary()?;
            return Ok(self.arena.not(child));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<NodeIndex, SyntaxError> {
        let lexemes = self.lexemes;
        let Some(lexeme) = lexemes.get(self.index) else {
            return Err(SyntaxError::UnexpectedEnd { position: self.end });
        };
        self.index += 1;

        match &lexeme.token {
            Token::Symbol(name) => {
                let atom = self.atom_of(name);
                Ok(self.arena.symbol(atom))
            }

            Token::Open => {
                self.depth += 1;
                let inner = self.iff()?;
                match self.peek() {
                    Some(Lexeme {
                        token: Token::Close,
                        ..
                    }) => {
                        self.index += 1;
                        self.depth -= 1;
                        Ok(inner)
                    }
                    Some(other) => Err(SyntaxError::UnexpectedToken {
                        position: other.position,
                        found: other.token.to_string(),
                    }),
                    None => Err(SyntaxError::UnbalancedParenthesis {
                        position: lexeme.position,
                    }),
                }
            }

            Token::Close if self.depth == 0 => Err(SyntaxError::UnbalancedParenthesis {
                position: lexeme.position,
            }),

            other => Err(SyntaxError::UnexpectedToken {
                position: lexeme.position,
                found: other.to_string(),
            }),
        }
    }

    /// The atom `name` has, or will have once interned.
    fn atom_of(&mut self, name: &str) -> Atom {
        if let Some(atom) = self.atom_db.atom(name) {
            return atom;
        }
        let offset = match self.fresh.iter().position(|fresh| fresh == name) {
            Some(offset) => offset,
            None => {
                self.fresh.push(name.to_string());
                self.fresh.len() - 1
            }
        };
        (self.atom_db.count() + offset) as Atom
    }
}
