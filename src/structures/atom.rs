/*!
(The internal representation of) an atom, aka. a 'symbol'.

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
- 'Internal' atoms are used throughout the library.
- 'External' atoms are the symbol names read from a sentence. \
  External atoms are an ASCII letter followed by any number of ASCII letters, digits, or underscores, and are read in lower case. \
  Examples: `p`, `p2`, `rain_today`.

Each internal atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

This representation allows atoms to be used as the indicies of a structure, e.g. a [valuation](crate::structures::valuation), without taking too much space.

# Notes
- The external representation of an atom is stored in the [atom database](crate::db::atom).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms' or 'symbols'.
*/

/// An atom, aka. a 'symbol'.
pub type Atom = u32;
