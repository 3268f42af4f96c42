/*!
A (partial) function from atoms to truth values.

Procedures build valuations as a vector of optional booleans indexed by atom, with `None` for an atom not (yet) given a value.
An atom outside the bounds of the vector has no value, so a valuation over the symbols of a knowledge base may be used to evaluate a query whose atoms were read later.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use iengine::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(0), Some(true));
assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.value_of(9), None);
```

A *model* is a valuation which is full with respect to the atoms of interest, and on which every sentence of interest is true.
Models are only ever built transiently during a procedure.
*/

mod slice_impl;

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// Values of atoms, where an atom may have no value.
pub trait Valuation {
    /// The value of an atom, if the atom has some value.
    fn value_of(&self, atom: Atom) -> Option<bool>;
}
