/*!
A database of symbol names, accessed via an [AtomDB] struct.

Each name read is given a fresh [Atom] the first time it is seen, and atoms are handed out densely from zero.
So, the atoms of a database are exactly `0..count`, and an atom may be used to index a [valuation](crate::structures::valuation).

```rust
# use iengine::db::atom::AtomDB;
let mut atom_db = AtomDB::default();
let p = atom_db.intern("p");
let q = atom_db.intern("q");

assert_eq!(atom_db.intern("p"), p);
assert_eq!(atom_db.atom("q"), Some(q));
assert_eq!(atom_db.name(p), Some("p"));
assert_eq!(atom_db.atom("r"), None);
assert_eq!(atom_db.count(), 2);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// The atom database.
#[derive(Clone, Debug, Default)]
pub struct AtomDB {
    /// The name of each atom, indexed by atom.
    names: Vec<String>,

    /// The atom of each name.
    atoms: HashMap<String, Atom>,
}

impl AtomDB {
    /// The atom of `name`, with a fresh atom made if `name` has not been seen before.
    ///
    /// Names are stored as given, and any normalisation of case is left to the reader.
    pub fn intern(&mut self, name: &str) -> Atom {
        if let Some(atom) = self.atoms.get(name) {
            return *atom;
        }

        let atom = self.names.len() as Atom;
        self.names.push(name.to_string());
        self.atoms.insert(name.to_string(), atom);
        log::trace!(target: targets::KNOWLEDGE_BASE, "Fresh atom {atom} for {name}");
        atom
    }

    /// The atom of `name`, if `name` has been seen.
    pub fn atom(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The name of `atom`, if `atom` is part of the database.
    pub fn name(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// The names of the given atoms, joined by `", "`.
    pub fn names_of(&self, atoms: &[Atom]) -> String {
        atoms
            .iter()
            .map(|atom| self.name(*atom).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
