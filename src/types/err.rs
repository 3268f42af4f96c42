//! Error types used in the library.
//!
//! - All errors arise when reading text, i.e. when building a knowledge base or a query, or when configuring a procedure.
//! - No procedure returns an error once it has been built, instead each procedure returns a verdict.
//!
//! Names of the error enums, for the most part, overlap with the structure they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping each specific error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Syntax(SyntaxError),
    DefiniteClause(DefiniteClauseError),
    KnowledgeBase(KnowledgeBaseError),
    Config(ConfigError),
}

/// Errors when reading an (infix) expression.
///
/// Positions are byte offsets into the source string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// An empty string, where some expression was required.
    Empty,

    /// A character which is neither part of a symbol nor part of a connective.
    UnknownCharacter { position: usize, character: char },

    /// An opening parenthesis without a match, or a closing parenthesis without an opening.
    UnbalancedParenthesis { position: usize },

    /// A token which may not appear where it was found, e.g. two connectives in a row.
    UnexpectedToken { position: usize, found: String },

    /// The expression ended where some operand was required.
    UnexpectedEnd { position: usize },
}

impl From<SyntaxError> for ErrorKind {
    fn from(e: SyntaxError) -> Self {
        ErrorKind::Syntax(e)
    }
}

/// Errors when reading a definite clause.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DefiniteClauseError {
    /// The clause uses negation, disjunction, or a biconditional.
    NotDefiniteForm(String),

    /// The clause has the right connectives, but in the wrong places.
    /// E.g. more than one implication, more than one head, or a misplaced conjunction.
    MalformedClause(String),
}

impl From<DefiniteClauseError> for ErrorKind {
    fn from(e: DefiniteClauseError) -> Self {
        ErrorKind::DefiniteClause(e)
    }
}

/// Errors when building a knowledge base.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KnowledgeBaseError {
    /// The requested kind of sentence is not known.
    UnknownSentenceType(String),
}

impl From<KnowledgeBaseError> for ErrorKind {
    fn from(e: KnowledgeBaseError) -> Self {
        ErrorKind::KnowledgeBase(e)
    }
}

/// Errors when setting a configuration option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty expression"),
            Self::UnknownCharacter {
                position,
                character,
            } => write!(f, "Unknown character '{character}' at {position}"),
            Self::UnbalancedParenthesis { position } => {
                write!(f, "Unbalanced parenthesis at {position}")
            }
            Self::UnexpectedToken { position, found } => {
                write!(f, "Unexpected '{found}' at {position}")
            }
            Self::UnexpectedEnd { position } => {
                write!(f, "Expression ended early at {position}")
            }
        }
    }
}

impl std::fmt::Display for DefiniteClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotDefiniteForm(clause) => write!(f, "\"{clause}\" is not a definite clause"),
            Self::MalformedClause(clause) => write!(f, "\"{clause}\" is a malformed clause"),
        }
    }
}

impl std::fmt::Display for KnowledgeBaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSentenceType(kind) => write!(f, "Unknown sentence type \"{kind}\""),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(name) => write!(f, "Value out of bounds for {name}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::DefiniteClause(e) => write!(f, "{e}"),
            Self::KnowledgeBase(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SyntaxError {}
impl std::error::Error for DefiniteClauseError {}
impl std::error::Error for KnowledgeBaseError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for ErrorKind {}
