//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! ```rust
//! # use iengine::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, CLiteral::new(79, false));
//! ```
//!
//! Literals are ordered by atom and then polarity, with 'false' (strictly) less than 'true'.
//! So, sorting a clause places the two literals of an atom side by side.

mod impl_c_literal;

use crate::structures::atom::Atom;

/// An atom with a polarity.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The canonical representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}
