/*!
Entailment by DPLL.

The query is entailed if and only if the clauses of the knowledge base together with the clauses of the negated query are unsatisfiable, and satisfiability is decided by DPLL:

1. If no clause remains, every clause is true and the clauses are satisfiable.
2. If some clause is empty, the clause is false and the branch fails.
3. If some clause has a single literal, the literal is propagated and the clauses are simplified, and the search returns to 1.
4. If no symbol remains without a value, the branch fails.
5. Otherwise, some symbol without a value is chosen, and a branch is made with the symbol true and, if that fails, false.

To simplify clauses on a literal, every clause containing the literal is dropped, and the negation of the literal is removed from every other clause.
So, a clause remaining after simplification contains only literals whose atoms have no value, and a clause made empty by simplification is false.

The choice of symbol follows [SymbolChoice](crate::config::SymbolChoice), and by default is the first remaining symbol in the order the symbols were first read.

Each branch takes a copy of the clauses, symbols, and model of the parent, and so a failed branch leaves nothing behind for its sibling.

```rust
# use iengine::config::Config;
# use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
# use iengine::procedures::dpll::Dpll;
# use iengine::reports::Report;
let mut kb = KnowledgeBase::from_sentences(["a", "b", "c"], SentenceKind::General).unwrap();
let query = kb.query("d").unwrap();

let mut engine = Dpll::new(&kb, Config::default());
assert_eq!(engine.solve(&query).report, Report::NotEntailed);
```
*/

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{Config, SymbolChoice},
    db::knowledge::KnowledgeBase,
    dispatch::{
        delta::{self},
        macros::send,
        Dispatch, Dispatcher,
    },
    misc::log::targets::{self},
    procedures::Counters,
    reports::{Answer, Report},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        sentence::Sentence,
        valuation::CValuation,
    },
};

/// Entailment by DPLL.
pub struct Dpll {
    /// The clauses of the knowledge base.
    clauses: Vec<CClause>,

    pub config: Config,

    pub counters: Counters,

    /// The source of randomness for a random choice of symbol.
    rng: StdRng,

    dispatcher: Option<Box<Dispatcher>>,
}

impl Dpll {
    pub fn new(kb: &KnowledgeBase, config: Config) -> Self {
        let rng = StdRng::seed_from_u64(config.random_seed.value);
        Dpll {
            clauses: kb.clauses(),
            config,
            counters: Counters::default(),
            rng,
            dispatcher: None,
        }
    }

    pub fn set_dispatcher(&mut self, dispatcher: Box<Dispatcher>) {
        self.dispatcher = Some(dispatcher);
    }

    pub fn solve(&mut self, query: &Sentence) -> Answer {
        let mut clauses = self.clauses.clone();
        clauses.extend(query.negated().clauses());

        let satisfiable = self.satisfiable(clauses);
        log::debug!(target: targets::DPLL, "Satisfiable: {satisfiable}, after {} branches", self.counters.branches);

        let report = Report::from(!satisfiable);
        send!(self, Dispatch::Report(report));
        Answer::bare(report)
    }

    /// Whether the given clauses are satisfiable.
    pub fn satisfiable(&mut self, clauses: Vec<CClause>) -> bool {
        let clauses: Vec<CClause> = clauses
            .into_iter()
            .map(|clause| clause.canonical())
            .filter(|clause| !clause.is_tautology())
            .collect();

        let mut symbols: Vec<Atom> = Vec::default();
        for clause in &clauses {
            for atom in clause.atoms() {
                if !symbols.contains(&atom) {
                    symbols.push(atom);
                }
            }
        }

        let size = symbols.iter().max().map_or(0, |max| *max as usize + 1);
        self.search(clauses, symbols, vec![None; size])
    }

    fn search(&mut self, mut clauses: Vec<CClause>, mut symbols: Vec<Atom>, mut model: CValuation) -> bool {
        loop {
            if clauses.is_empty() {
                log::trace!(target: targets::DPLL, "Model {model:?}");
                return true;
            }

            if clauses.iter().any(|clause| clause.is_empty()) {
                self.counters.backtracks += 1;
                send!(self, Dispatch::Delta(delta::Delta::Dpll(delta::Dpll::Backtrack)));
                return false;
            }

            let Some(unit) = clauses.iter().find_map(|clause| clause.asserts(&model)) else {
                break;
            };

            self.counters.propagations += 1;
            log::trace!(target: targets::DPLL, "Propagated {unit}");
            send!(self, Dispatch::Delta(delta::Delta::Dpll(delta::Dpll::Propagated(unit))));

            model[unit.atom() as usize] = Some(unit.polarity());
            symbols.retain(|atom| *atom != unit.atom());
            clauses = simplify(clauses, unit);
        }

        if symbols.is_empty() {
            return false;
        }

        let atom = match self.config.symbol_choice.value {
            SymbolChoice::First => symbols[0],
            SymbolChoice::Random => symbols[self.rng.gen_range(0..symbols.len())],
        };
        let remaining: Vec<Atom> = symbols.into_iter().filter(|other| *other != atom).collect();

        for polarity in [true, false] {
            let literal = CLiteral::new(atom, polarity);
            self.counters.branches += 1;
            log::trace!(target: targets::DPLL, "Branch on {literal}");
            send!(self, Dispatch::Delta(delta::Delta::Dpll(delta::Dpll::Branch(literal))));

            let mut branch_model = model.clone();
            branch_model[atom as usize] = Some(polarity);

            if self.search(simplify(clauses.clone(), literal), remaining.clone(), branch_model) {
                return true;
            }
        }

        false
    }
}

/// Drops every clause containing `literal`, and removes the negation of `literal` from every other clause.
fn simplify(clauses: Vec<CClause>, literal: CLiteral) -> Vec<CClause> {
    let complement = literal.negate();
    clauses
        .into_iter()
        .filter(|clause| !clause.contains(&literal))
        .map(|mut clause| {
            clause.retain(|other| *other != complement);
            clause
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::knowledge::SentenceKind;

    fn solve(tell: &[&str], ask: &str, config: Config) -> Report {
        let mut kb = KnowledgeBase::from_sentences(tell, SentenceKind::General).unwrap();
        let query = kb.query(ask).unwrap();
        let mut engine = Dpll::new(&kb, config);
        engine.solve(&query).report
    }

    #[test]
    fn raw_clauses() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let kb = KnowledgeBase::new(SentenceKind::General);
        let mut engine = Dpll::new(&kb, Config::default());

        assert!(engine.satisfiable(vec![]));
        assert!(!engine.satisfiable(vec![vec![]]));
        assert!(!engine.satisfiable(vec![vec![p], vec![-p]]));
        assert!(engine.satisfiable(vec![vec![p, q], vec![-p], vec![-q, r]]));
        assert!(!engine.satisfiable(vec![vec![p, q], vec![p, -q], vec![-p, q], vec![-p, -q]]));
        assert!(engine.satisfiable(vec![vec![p, -p]]));
    }

    #[test]
    fn simplification() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let simplified = simplify(vec![vec![p, q], vec![-p, r], vec![-p]], p);
        assert_eq!(simplified, vec![vec![r], vec![]]);
    }

    #[test]
    fn entailment() {
        let tell = ["(a <=> (c => ~d)) & b & (b => a)", "c", "~f || g"];
        assert_eq!(solve(&tell, "~d", Config::default()), Report::Entailed);
        assert_eq!(solve(&tell, "d", Config::default()), Report::NotEntailed);
        assert_eq!(solve(&tell, "~d & (~g => ~f)", Config::default()), Report::Entailed);
    }

    #[test]
    fn inconsistent_kb_entails_anything() {
        let tell = ["a", "b", "c", "~a || ~b || ~c"];
        assert_eq!(solve(&tell[..3], "d", Config::default()), Report::NotEntailed);
        assert_eq!(solve(&tell, "d", Config::default()), Report::Entailed);
    }

    #[test]
    fn random_choice_agrees() {
        let tell = ["(x => y) & (y <=> z) & (z => ~w)", "a & b & (c || d)"];
        for seed in 0..8 {
            let mut config = Config::default();
            assert!(config.symbol_choice.set(SymbolChoice::Random).is_ok());
            assert!(config.random_seed.set(seed).is_ok());

            assert_eq!(solve(&tell, "~w & (~d => a)", config.clone()), Report::NotEntailed);
            assert_eq!(solve(&tell, "x => ~w", config), Report::Entailed);
        }
    }

    #[test]
    fn propagation_before_branching() {
        let mut kb = KnowledgeBase::from_sentences(["a", "a => b", "b => c"], SentenceKind::General).unwrap();
        let query = kb.query("c").unwrap();
        let mut engine = Dpll::new(&kb, Config::default());

        assert_eq!(engine.solve(&query).report, Report::Entailed);
        assert_eq!(engine.counters.branches, 0);
        assert!(engine.counters.propagations > 0);
    }
}
