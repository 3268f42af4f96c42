/*!
Entailment by truth table.

Every valuation of the symbols of the knowledge base is examined.
A valuation is a model if every sentence of the knowledge base is true on the valuation, and the query is entailed if the query is true on every model.
If the query has symbols outside the knowledge base, the query must be true on every extension of each model to those symbols, though models are only counted over the symbols of the knowledge base.

If the knowledge base has no models the query is entailed (vacuously) with a count of zero models.

The examination ends at the first model on which the query is false, and otherwise the count of models is returned as evidence.

```rust
# use iengine::config::Config;
# use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
# use iengine::procedures::truth_table::TruthTable;
let mut kb = KnowledgeBase::from_sentences(["p"], SentenceKind::General).unwrap();
let query = kb.query("p").unwrap();

let mut engine = TruthTable::new(&kb, Config::default());
assert_eq!(engine.solve(&query).as_string(kb.atom_db()), "YES: 1");
```

The cost is exponential in the count of symbols.
*/

use crate::{
    config::Config,
    db::knowledge::KnowledgeBase,
    dispatch::{
        delta::{self},
        macros::send,
        Dispatch, Dispatcher,
    },
    misc::log::targets::{self},
    procedures::Counters,
    reports::{Answer, Evidence, Report},
    structures::{
        atom::Atom,
        sentence::{Sentence, SentenceForm},
        valuation::CValuation,
    },
};

/// Entailment by truth table.
pub struct TruthTable {
    sentences: Vec<SentenceForm>,

    symbols: Vec<Atom>,

    pub config: Config,

    pub counters: Counters,

    dispatcher: Option<Box<Dispatcher>>,
}

impl TruthTable {
    pub fn new(kb: &KnowledgeBase, config: Config) -> Self {
        TruthTable {
            sentences: kb.sentences().to_vec(),
            symbols: kb.symbols().to_vec(),
            config,
            counters: Counters::default(),
            dispatcher: None,
        }
    }

    pub fn set_dispatcher(&mut self, dispatcher: Box<Dispatcher>) {
        self.dispatcher = Some(dispatcher);
    }

    pub fn solve(&mut self, query: &Sentence) -> Answer {
        let symbols = self.symbols.clone();
        let query_only: Vec<Atom> = query
            .symbols()
            .iter()
            .filter(|atom| !symbols.contains(atom))
            .copied()
            .collect();

        let size = symbols
            .iter()
            .chain(query_only.iter())
            .max()
            .map_or(0, |max| *max as usize + 1);
        let mut valuation: CValuation = vec![None; size];
        let mut models = 0;

        let entailed = self.check_all(query, &symbols, &query_only, &mut valuation, &mut models);
        log::debug!(target: targets::TRUTH_TABLE, "Entailed: {entailed}, with {models} models over {} symbols", symbols.len());

        let report = Report::from(entailed);
        send!(self, Dispatch::Report(report));
        match report {
            Report::Entailed => Answer {
                report,
                evidence: Evidence::Models(models),
            },
            Report::NotEntailed => Answer::bare(report),
        }
    }

    /// Whether the query is true on every model which extends `valuation` to `symbols`.
    fn check_all(
        &mut self,
        query: &Sentence,
        symbols: &[Atom],
        query_only: &[Atom],
        valuation: &mut CValuation,
        models: &mut usize,
    ) -> bool {
        let Some((atom, rest)) = symbols.split_first() else {
            self.counters.valuations += 1;
            if !self.is_model(valuation) {
                return true;
            }

            *models += 1;
            self.counters.models += 1;
            send!(
                self,
                Dispatch::Delta(delta::Delta::TruthTable(delta::TruthTable::Model(
                    valuation.clone()
                )))
            );
            return query_holds(query, query_only, valuation);
        };

        for value in [true, false] {
            valuation[*atom as usize] = Some(value);
            if !self.check_all(query, rest, query_only, valuation, models) {
                log::trace!(target: targets::TRUTH_TABLE, "Counter-model {valuation:?}");
                return false;
            }
        }
        valuation[*atom as usize] = None;
        true
    }

    fn is_model(&self, valuation: &CValuation) -> bool {
        self.sentences
            .iter()
            .all(|sentence| sentence.evaluate(valuation) == Some(true))
    }
}

/// Whether the query is true on every extension of `valuation` to the `query_only` atoms.
fn query_holds(query: &Sentence, query_only: &[Atom], valuation: &mut CValuation) -> bool {
    let Some((atom, rest)) = query_only.split_first() else {
        return query.evaluate(valuation) == Some(true);
    };

    for value in [true, false] {
        valuation[*atom as usize] = Some(value);
        if !query_holds(query, rest, valuation) {
            return false;
        }
    }
    valuation[*atom as usize] = None;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::knowledge::SentenceKind;

    fn solve(tell: &[&str], kind: SentenceKind, ask: &str) -> String {
        let mut kb = KnowledgeBase::from_sentences(tell, kind).unwrap();
        let query = kb.query(ask).unwrap();
        let mut engine = TruthTable::new(&kb, Config::default());
        engine.solve(&query).as_string(kb.atom_db())
    }

    #[test]
    fn model_counts() {
        assert_eq!(solve(&["p"], SentenceKind::General, "p"), "YES: 1");
        assert_eq!(solve(&["p || q"], SentenceKind::General, "p || q"), "YES: 3");
        assert_eq!(solve(&["p || q"], SentenceKind::General, "p"), "NO");
    }

    #[test]
    fn query_only_symbols() {
        // Models are counted over the symbols of the knowledge base alone.
        assert_eq!(solve(&["p"], SentenceKind::General, "q || ~q"), "YES: 1");
        assert_eq!(solve(&["p"], SentenceKind::General, "p & (q || ~q)"), "YES: 1");
        assert_eq!(solve(&["p || r"], SentenceKind::General, "(p || r) & (q => q)"), "YES: 3");
        assert_eq!(solve(&["p"], SentenceKind::General, "q"), "NO");
        assert_eq!(solve(&["p"], SentenceKind::General, "p & q"), "NO");
    }

    #[test]
    fn query_only_symbols_are_not_valuations() {
        let mut kb = KnowledgeBase::from_sentences(["p"], SentenceKind::General).unwrap();
        let query = kb.query("p & (q || ~q)").unwrap();
        let mut engine = TruthTable::new(&kb, Config::default());

        assert_eq!(engine.solve(&query).report, Report::Entailed);
        assert_eq!(engine.counters.valuations, 2);
        assert_eq!(engine.counters.models, 1);
    }

    #[test]
    fn inconsistent_kb_entails_anything() {
        assert_eq!(solve(&["a", "~a"], SentenceKind::General, "z"), "YES: 0");
    }

    #[test]
    fn definite_kb() {
        let tell = ["a", "a => b", "b => c", "b & c => d", "d => e"];
        assert_eq!(solve(&tell, SentenceKind::Definite, "e"), "YES: 1");
        assert_eq!(solve(&tell, SentenceKind::Definite, "~e"), "NO");
    }

    #[test]
    fn counters_and_dispatches() {
        let mut kb = KnowledgeBase::from_sentences(["a || b"], SentenceKind::General).unwrap();
        let query = kb.query("a || b").unwrap();

        let seen = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen_clone = seen.clone();

        let mut engine = TruthTable::new(&kb, Config::default());
        engine.set_dispatcher(Box::new(move |dispatch: &Dispatch| {
            if let Dispatch::Delta(delta::Delta::TruthTable(delta::TruthTable::Model(_))) = dispatch {
                seen_clone.set(seen_clone.get() + 1);
            }
        }));

        assert_eq!(engine.solve(&query).report, Report::Entailed);
        assert_eq!(engine.counters.valuations, 4);
        assert_eq!(engine.counters.models, 3);
        assert_eq!(seen.get(), 3);
    }
}
