/*!
A parser for definite clauses, and for goals.

A definite clause is either a single symbol (a fact) or an implication from a conjunction of symbols to a single symbol.
For example, `a`, `a => b`, and `p2 & p1 & p3 => d` are definite clauses, while `~a`, `a || b => c`, and `a => b & c` are not.

Parentheses may wrap the whole body, the head, or a single symbol, e.g. `(b & c) => (d)`.
Any other group is a [MalformedClause](DefiniteClauseError::MalformedClause) error, and so an implication is only read at the top level: `a & (b => c)` is not read as `a & b => c`.

The checks made, in order:
- Negation, disjunction, or a biconditional anywhere in the clause is a [NotDefiniteForm](DefiniteClauseError::NotDefiniteForm) error.
- Anything else out of place is a [MalformedClause](DefiniteClauseError::MalformedClause) error, e.g.:
  - More than one implication, or an implication within parentheses.
  - A parenthesised conjunction within a body, e.g. `a & (b & c) => d`.
  - Anything other than a single symbol to the right of the implication.
  - A body which begins or ends with a conjunction, or which has two conjunctions or two symbols in a row.

A goal is read as the body of a definite clause, and so a goal is a conjunction of one or more symbols.

```rust
# use iengine::db::atom::AtomDB;
# use iengine::parse::parse_definite;
let mut atom_db = AtomDB::default();
let clause = parse_definite("p2 & p1 & p3 => d", &mut atom_db).unwrap();

assert_eq!(clause.body().len(), 3);
assert_eq!(atom_db.name(clause.head()), Some("d"));
assert!(parse_definite("p2 & ~p1 => d", &mut atom_db).is_err());
```
*/

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    parse::token::{tokenize, Lexeme, Token},
    structures::sentence::{DefiniteClause, Goal},
    types::err::{self, DefiniteClauseError, SyntaxError},
};

/// Reads `source` as a definite clause, interning any fresh symbols in `atom_db`.
pub fn parse_definite(source: &str, atom_db: &mut AtomDB) -> Result<DefiniteClause, err::ErrorKind> {
    let tokens = definite_tokens(source)?;
    let malformed = || DefiniteClauseError::MalformedClause(source.trim().to_string());

    let implications = top_level_implications(&tokens).ok_or_else(malformed)?;

    let (body, head) = match implications.as_slice() {
        [] => (None, ungroup(&tokens).ok_or_else(malformed)?),

        [implication] => {
            let body = ungroup(&tokens[..*implication]).ok_or_else(malformed)?;
            let head = ungroup(&tokens[implication + 1..]).ok_or_else(malformed)?;
            (Some(body), head)
        }

        _ => return Err(malformed().into()),
    };

    let head = match head.as_slice() {
        [Token::Symbol(head)] => head.as_str(),
        _ => return Err(malformed().into()),
    };
    let body = match &body {
        None => Vec::default(),
        Some(body) => conjuncts(body).ok_or_else(malformed)?,
    };

    let body = body.into_iter().map(|name| atom_db.intern(name)).collect();
    let head = atom_db.intern(head);
    let clause = DefiniteClause::new(head, body);

    log::trace!(target: targets::PARSE, "Read \"{source}\" as a definite clause");
    Ok(clause)
}

/// Reads `source` as a goal, interning any fresh symbols in `atom_db`.
pub fn parse_goal(source: &str, atom_db: &mut AtomDB) -> Result<Goal, err::ErrorKind> {
    let tokens = definite_tokens(source)?;
    let malformed = || DefiniteClauseError::MalformedClause(source.trim().to_string());

    let tokens = ungroup(&tokens).ok_or_else(malformed)?;
    let names = conjuncts(&tokens).ok_or_else(malformed)?;
    let atoms = names.into_iter().map(|name| atom_db.intern(name)).collect();
    Ok(Goal::new(atoms))
}

/// The tokens of `source`, provided no token is outside of definite clause syntax and the parentheses are balanced.
fn definite_tokens(source: &str) -> Result<Vec<Token>, err::ErrorKind> {
    let lexemes = tokenize(source)?;
    if lexemes.is_empty() {
        return Err(SyntaxError::Empty.into());
    }

    let mut open: Vec<usize> = Vec::default();
    let mut tokens = Vec::with_capacity(lexemes.len());
    for Lexeme { token, position } in lexemes {
        match token {
            Token::Not | Token::Or | Token::Iff => {
                return Err(DefiniteClauseError::NotDefiniteForm(source.trim().to_string()).into());
            }
            Token::Open => open.push(position),
            Token::Close => {
                if open.pop().is_none() {
                    return Err(SyntaxError::UnbalancedParenthesis { position }.into());
                }
            }
            _ => {}
        }
        tokens.push(token);
    }

    match open.pop() {
        Some(position) => Err(SyntaxError::UnbalancedParenthesis { position }.into()),
        None => Ok(tokens),
    }
}

/// The indicies of implications outside of any parentheses, or None if some implication is within parentheses.
fn top_level_implications(tokens: &[Token]) -> Option<Vec<usize>> {
    let mut depth = 0;
    let mut implications = Vec::default();
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            Token::Implies if depth == 0 => implications.push(index),
            Token::Implies => return None,
            _ => {}
        }
    }
    Some(implications)
}

/// Whether the first token opens a group which is closed by the last token.
fn wraps(tokens: &[Token]) -> bool {
    if tokens.first() != Some(&Token::Open) || tokens.last() != Some(&Token::Close) {
        return false;
    }

    let mut depth = 0;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return index + 1 == tokens.len();
        }
    }
    false
}

/// The tokens of a balanced segment without parentheses, provided every group wraps the whole segment or a single symbol.
fn ungroup(tokens: &[Token]) -> Option<Vec<Token>> {
    let mut segment = tokens;
    while wraps(segment) {
        segment = &segment[1..segment.len() - 1];
    }

    let mut ungrouped = Vec::with_capacity(segment.len());
    let mut index = 0;
    while index < segment.len() {
        let opens = segment[index..]
            .iter()
            .take_while(|token| **token == Token::Open)
            .count();

        if opens == 0 {
            match &segment[index] {
                Token::Close => return None,
                token => ungrouped.push(token.clone()),
            }
            index += 1;
            continue;
        }

        index += opens;
        match segment.get(index) {
            Some(Token::Symbol(name)) => ungrouped.push(Token::Symbol(name.clone())),
            _ => return None,
        }
        index += 1;

        let closes = segment[index..]
            .iter()
            .take(opens)
            .take_while(|token| **token == Token::Close)
            .count();
        if closes != opens {
            return None;
        }
        index += opens;
    }
    Some(ungrouped)
}

/// The names of a conjunction of symbols, provided the tokens alternate between a symbol and a conjunction, beginning and ending with a symbol.
fn conjuncts(tokens: &[Token]) -> Option<Vec<&str>> {
    if tokens.len() % 2 == 0 {
        return None;
    }

    let mut names = Vec::with_capacity(tokens.len() / 2 + 1);
    for (index, token) in tokens.iter().enumerate() {
        match (index % 2, token) {
            (0, Token::Symbol(name)) => names.push(name.as_str()),
            (1, Token::And) => {}
            _ => return None,
        }
    }
    Some(names)
}
