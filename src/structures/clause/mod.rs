//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! A clause in canonical form is sorted, and free of duplicate literals, so two clauses with the same literals are equal regardless of the order in which the literals were gathered.
//!
//! ```rust
//! # use iengine::structures::literal::{CLiteral, Literal};
//! # use iengine::structures::clause::Clause;
//! let p = CLiteral::new(1, true);
//! let q = CLiteral::new(2, true);
//!
//! let clause_a = vec![p, -q, p].canonical();
//! let clause_b = vec![-q, p].canonical();
//! assert_eq!(clause_a, clause_b);
//!
//! let mut valuation = vec![None; 3];
//! valuation[1] = Some(false);
//! assert_eq!(clause_a.value_on(&valuation), None);
//! assert_eq!(clause_a.asserts(&valuation), Some(-q));
//!
//! assert!(vec![p, q, -p].canonical().is_tautology());
//! ```
//!
//! - The empty clause is always false (never true), and is the distinguished contradiction.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause, where the 'unit' is the literal).

mod v_clause;

use crate::{
    db::atom::AtomDB,
    structures::{atom::Atom, literal::CLiteral, valuation::Valuation},
};

/// The clause trait.
pub trait Clause {
    /// The clause written with external names, e.g. `~p || q`.
    fn as_string(&self, atom_db: &AtomDB) -> String;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and for every other literal *l'* in the clause the polarity of *l'* conflicts with the value of the atom of *l'*.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;

    /// The value of the clause on the given valuation. \
    /// In detail, returns:
    /// - Some(true), if some literal is true on the valuation.
    /// - Some(false), if every literal is false on the valuation (and so always for the empty clause).
    /// - None, otherwise.
    fn value_on(&self, valuation: &impl Valuation) -> Option<bool>;

    /// Whether the clause contains some atom with both polarities.
    fn is_tautology(&self) -> bool;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// An iterator over all atoms in the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form, sorted and without duplicate literals.
    fn canonical(self) -> CClause;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;
