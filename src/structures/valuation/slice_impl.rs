//! [Valuation] for anything which dereferences to a slice of optional booleans, e.g. a [CValuation](crate::structures::valuation::CValuation).

use crate::structures::{atom::Atom, valuation::Valuation};

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }
}
