/*!
Databases for holding information relevant to a query.

- The [atom database](atom) interns the names of symbols, and so maps between names and [atoms](crate::structures::atom).
- The [knowledge base](knowledge) holds the sentences told, together with the atom database used to read them.

Every structure outside of the parsers talks about atoms, and names are only recovered through an atom database when writing something for an external reader.
*/

pub mod atom;
pub mod knowledge;
