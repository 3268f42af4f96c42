/*!
Procedures for deciding whether a query is entailed by a knowledge base.

Each procedure is a structure built from a [knowledge base](crate::db::knowledge::KnowledgeBase) and a [configuration](crate::config::Config), with a `solve` method returning an [Answer](crate::reports::Answer):

| Procedure | Query | Knowledge base | Evidence |
|-----------|-------|----------------|----------|
| [TruthTable](truth_table::TruthTable) | sentence | any | count of models |
| [ForwardChaining](forward::ForwardChaining) | goal | definite | atoms inferred |
| [BackwardChaining](backward::BackwardChaining) | goal | definite | atoms inferred |
| [Resolution](resolution::Resolution) | sentence | any | none |
| [Dpll](dpll::Dpll) | sentence | any | none |

A procedure takes what it needs from the knowledge base when built, and so a procedure may be used for many queries and does not borrow the knowledge base.
Each call to `solve` is independent of any other.

Building the chaining procedures fails if the knowledge base is not definite, while `solve` does not fail for any procedure.

An inconsistent knowledge base entails every query, and each procedure reports as much.
*/

mod counters;
pub use counters::Counters;

pub mod backward;
pub mod dpll;
pub mod forward;
pub mod resolution;
pub mod truth_table;
