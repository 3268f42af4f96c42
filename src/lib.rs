//! A library for deciding whether a propositional query is entailed by a knowledge base.
//!
//! iengine reads sentences written in an infix propositional syntax, stores them in a [knowledge base](crate::db::knowledge), and answers queries using one of five [procedures]:
//! - [Truth tables](crate::procedures::truth_table), by enumeration of every valuation of the symbols in play.
//! - [Forward chaining](crate::procedures::forward) and [backward chaining](crate::procedures::backward), restricted to definite clauses.
//! - [Resolution](crate::procedures::resolution) refutation over clauses in conjunctive normal form.
//! - [DPLL](crate::procedures::dpll), by checking the satisfiability of the knowledge base together with the negated query.
//!
//! # Orientation
//!
//! The library is designed around the [KnowledgeBase](crate::db::knowledge::KnowledgeBase).
//!
//! A knowledge base is built once from a list of sentences, either as [general sentences](crate::structures::sentence::Sentence) or as [definite clauses](crate::structures::sentence::DefiniteClause).
//! The knowledge base owns an [atom database](crate::db::atom::AtomDB) which interns symbol names, and so every other structure talks about [atoms](crate::structures::atom) rather than strings.
//!
//! Useful starting points, then, may be:
//! - The [parsers](crate::parse) to see the accepted syntax.
//! - The [CNF normaliser](crate::cnf) to see how sentences become [clauses](crate::structures::clause).
//! - The [procedures] to inspect each method of inference.
//! - The [dispatches](crate::dispatch) to observe a procedure as it runs.
//!
//! # Syntax
//!
//! | Connective     | Token  |
//! |----------------|--------|
//! | negation       | `~`    |
//! | conjunction    | `&`    |
//! | disjunction    | `\|\|` |
//! | implication    | `=>`   |
//! | biconditional  | `<=>`  |
//!
//! Parentheses group, negation binds tightest, conjunction and disjunction share a level and associate to the left, and implication binds tighter than the biconditional.
//!
//! # Examples
//!
//! + Forward chaining over a small definite knowledge base.
//!
//! ```rust
//! # use iengine::config::Config;
//! # use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
//! # use iengine::procedures::forward::ForwardChaining;
//! # use iengine::reports::Report;
//! let tell = ["a", "a => b", "b => c", "b & c => d", "d => e"];
//! let mut kb = KnowledgeBase::from_sentences(tell, SentenceKind::Definite).unwrap();
//! let goal = kb.goal("e").unwrap();
//!
//! let mut engine = ForwardChaining::from_kb(&kb, Config::default()).unwrap();
//! let answer = engine.solve(&goal);
//!
//! assert_eq!(answer.report, Report::Entailed);
//! assert_eq!(answer.as_string(kb.atom_db()), "YES: a, b, c, d, e");
//! ```
//!
//! + Resolution over general sentences.
//!
//! ```rust
//! # use iengine::config::Config;
//! # use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
//! # use iengine::procedures::resolution::Resolution;
//! # use iengine::reports::Report;
//! let tell = ["(a <=> (c => ~d)) & b & (b => a)", "c", "~f || g"];
//! let mut kb = KnowledgeBase::from_sentences(tell, SentenceKind::General).unwrap();
//! let query = kb.query("~d").unwrap();
//!
//! let mut engine = Resolution::new(&kb, Config::default());
//! assert_eq!(engine.solve(&query).report, Report::Entailed);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log] to help narrow output to a single procedure.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of unit propagation and branching can be filtered with `RUST_LOG=dpll=trace …` or,
//! - Logs of each resolvent can be found with `RUST_LOG=resolution=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod cnf;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
