//! Implementation of clause trait for a vector of literals.

use crate::{
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

impl Clause for CClause {
    fn as_string(&self, atom_db: &AtomDB) -> String {
        if self.is_empty() {
            return "()".to_string();
        }
        self.iter()
            .map(|literal| literal.as_string(atom_db))
            .collect::<Vec<_>>()
            .join(" || ")
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut the_literal = None;
        for literal in self {
            if let Some(value) = valuation.value_of(literal.atom()) {
                match value == literal.polarity() {
                    true => return None,
                    false => continue,
                }
            } else if the_literal.is_none() {
                the_literal = Some(literal);
            } else {
                return None;
            }
        }
        the_literal.copied()
    }

    fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut all_false = true;

        for literal in self {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return Some(true),
                Some(_) => continue,
                None => all_false = false,
            }
        }

        match all_false {
            true => Some(false),
            false => None,
        }
    }

    fn is_tautology(&self) -> bool {
        let mut sorted = self.clone();
        sorted.sort_unstable();
        sorted
            .windows(2)
            .any(|pair| pair[0].atom() == pair[1].atom() && pair[0].polarity() != pair[1].polarity())
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(mut self) -> CClause {
        self.sort_unstable();
        self.dedup();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause_is_false() {
        let empty: CClause = Vec::default();
        let valuation: Vec<Option<bool>> = Vec::default();
        assert_eq!(empty.value_on(&valuation), Some(false));
        assert_eq!(empty.asserts(&valuation), None);
    }

    #[test]
    fn satisfied_clause_asserts_nothing() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let clause = vec![p, q];

        let valuation = vec![Some(true), None];
        assert_eq!(clause.value_on(&valuation), Some(true));
        assert_eq!(clause.asserts(&valuation), None);
    }

    #[test]
    fn duplicates_are_not_tautologies() {
        let p = CLiteral::new(0, false);
        assert!(!vec![p, p].is_tautology());
        assert_eq!(vec![p, p].canonical(), vec![p]);
    }
}
