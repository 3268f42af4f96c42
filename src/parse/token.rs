/*!
Tokens, and the lexer which splits a source string into tokens.

```rust
# use iengine::parse::token::{tokenize, Token};
let lexemes = tokenize("~P2 <=> (q || r)").unwrap();
let tokens: Vec<Token> = lexemes.into_iter().map(|lexeme| lexeme.token).collect();

assert_eq!(
    tokens,
    vec![
        Token::Not,
        Token::Symbol("p2".to_string()),
        Token::Iff,
        Token::Open,
        Token::Symbol("q".to_string()),
        Token::Or,
        Token::Symbol("r".to_string()),
        Token::Close,
    ]
);
```
*/

use crate::{
    misc::log::targets::{self},
    types::err::SyntaxError,
};

/// A token of the infix syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
    /// A symbol, in lower case.
    Symbol(String),
}

/// A token, together with the byte position in the source at which the token begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "~"),
            Self::And => write!(f, "&"),
            Self::Or => write!(f, "||"),
            Self::Implies => write!(f, "=>"),
            Self::Iff => write!(f, "<=>"),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Symbol(name) => write!(f, "{name}"),
        }
    }
}

/// Splits `source` into lexemes.
///
/// Fails on the first character which is neither whitespace, part of a symbol, nor part of a connective.
/// In particular, `|` is only read as part of `||`.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, SyntaxError> {
    let mut lexemes = Vec::default();
    let mut characters = source.char_indices().peekable();

    while let Some((position, character)) = characters.next() {
        let token = match character {
            _ if character.is_whitespace() => continue,

            '~' => Token::Not,
            '&' => Token::And,
            '(' => Token::Open,
            ')' => Token::Close,

            '|' => match characters.next_if(|(_, next)| *next == '|') {
                Some(_) => Token::Or,
                None => return Err(SyntaxError::UnknownCharacter { position, character }),
            },

            '=' => match characters.next_if(|(_, next)| *next == '>') {
                Some(_) => Token::Implies,
                None => return Err(SyntaxError::UnknownCharacter { position, character }),
            },

            '<' => {
                if characters.next_if(|(_, next)| *next == '=').is_none()
                    || characters.next_if(|(_, next)| *next == '>').is_none()
                {
                    return Err(SyntaxError::UnknownCharacter { position, character });
                }
                Token::Iff
            }

            _ if character.is_ascii_alphabetic() => {
                let mut end = position + character.len_utf8();
                while let Some((next_position, next)) =
                    characters.next_if(|(_, next)| next.is_ascii_alphanumeric() || *next == '_')
                {
                    end = next_position + next.len_utf8();
                }
                Token::Symbol(source[position..end].to_ascii_lowercase())
            }

            _ => return Err(SyntaxError::UnknownCharacter { position, character }),
        };

        lexemes.push(Lexeme { token, position });
    }

    log::trace!(target: targets::PARSE, "{} lexemes from \"{source}\"", lexemes.len());
    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|lexeme| lexeme.token)
            .collect()
    }

    #[test]
    fn connectives_without_whitespace() {
        assert_eq!(
            tokens("a&b=>c"),
            vec![
                Token::Symbol("a".to_string()),
                Token::And,
                Token::Symbol("b".to_string()),
                Token::Implies,
                Token::Symbol("c".to_string()),
            ]
        );
    }

    #[test]
    fn positions_are_byte_offsets() {
        let lexemes = tokenize("  p1 <=> q_2").unwrap();
        let positions: Vec<usize> = lexemes.iter().map(|lexeme| lexeme.position).collect();
        assert_eq!(positions, vec![2, 5, 9]);
        assert_eq!(lexemes[2].token, Token::Symbol("q_2".to_string()));
    }

    #[test]
    fn single_bar() {
        assert_eq!(
            tokenize("a | b"),
            Err(SyntaxError::UnknownCharacter {
                position: 2,
                character: '|'
            })
        );
    }

    #[test]
    fn partial_connectives() {
        assert!(tokenize("a = b").is_err());
        assert!(tokenize("a <= b").is_err());
        assert!(tokenize("a < b").is_err());
    }

    #[test]
    fn unknown_characters() {
        assert_eq!(
            tokenize("a & 2b"),
            Err(SyntaxError::UnknownCharacter {
                position: 4,
                character: '2'
            })
        );
        assert_eq!(
            tokenize("a;"),
            Err(SyntaxError::UnknownCharacter {
                position: 1,
                character: ';'
            })
        );
    }

    #[test]
    fn empty() {
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
