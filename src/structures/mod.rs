//! Key structures, such as literals, clauses, and sentences.
//!
//! Some structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//! Use of a trait or its canonical implementation within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula in conjunctive normal form is a list of [clauses](clause), interpreted as the conjunction of those clauses.
//! Formulas have no dedicated structure, and are written `Vec<CClause>` throughout.
//!
//! ## Models
//!
//! A model is a full [valuation] on which every sentence of interest is true.

pub mod atom;
pub mod clause;
pub mod expression;
pub mod literal;
pub mod sentence;
pub mod valuation;
