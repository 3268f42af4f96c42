/*!
Deltas, arranged by procedure.
*/

use crate::structures::{atom::Atom, clause::CClause, literal::CLiteral, valuation::CValuation};

/// A delta, by procedure.
#[derive(Clone, Debug)]
pub enum Delta {
    TruthTable(TruthTable),
    Chaining(Chaining),
    Resolution(Resolution),
    Dpll(Dpll),
}

/// Deltas from a truth table.
#[derive(Clone, Debug)]
pub enum TruthTable {
    /// A model of the knowledge base was found.
    Model(CValuation),
}

/// Deltas from forward or backward chaining.
#[derive(Clone, Debug)]
pub enum Chaining {
    /// The atom was added to the agenda.
    Queued(Atom),

    /// The atom was inferred.
    Inferred(Atom),
}

/// Deltas from resolution.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// A fresh resolvent.
    Resolvent {
        left: CClause,
        right: CClause,
        resolvent: CClause,
    },

    /// A resolvent which is a tautology, and so was discarded.
    Tautology(CClause),

    /// The empty clause was derived.
    Contradiction { left: CClause, right: CClause },
}

/// Deltas from DPLL.
#[derive(Clone, Debug)]
pub enum Dpll {
    /// The literal was the only literal remaining in some clause.
    Propagated(CLiteral),

    /// The literal was chosen.
    Branch(CLiteral),

    /// A branch failed.
    Backtrack,
}
