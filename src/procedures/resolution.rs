/*!
Entailment by resolution refutation.

The clauses of the knowledge base together with the clauses of the negated query form the initial clauses, and the query is entailed if and only if the empty clause can be derived from the initial clauses by resolution.

Clauses wait in a queue, initially the (distinct) initial clauses, and each clause taken from the queue is resolved against every clause already processed before the clause is itself marked as processed.
So, each pair of clauses is resolved exactly once.

For each [resolvent](resolvents):
- If the resolvent is empty, a contradiction has been derived and the query is entailed.
- If the resolvent is a tautology, the resolvent is discarded.
- If the resolvent has been seen before, the resolvent is discarded.
- Otherwise, the resolvent is added to the end of the queue.

If the queue empties the query is not entailed.

Clauses are [canonical](crate::structures::clause::Clause::canonical), and so two clauses are the same exactly when their literals are the same.
As there are finitely many canonical clauses over the atoms in play, and no clause enters the queue twice, resolution always ends.

```rust
# use iengine::config::Config;
# use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
# use iengine::procedures::resolution::Resolution;
# use iengine::reports::Report;
let mut kb = KnowledgeBase::from_sentences(["a", "b", "c", "~a || ~b || ~c"], SentenceKind::General).unwrap();
let query = kb.query("d").unwrap();

// The knowledge base is inconsistent, and so entails d.
let mut engine = Resolution::new(&kb, Config::default());
assert_eq!(engine.solve(&query).report, Report::Entailed);
```
*/

use std::collections::{HashSet, VecDeque};

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
    reports::{Answer, Report},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
        sentence::Sentence,
    },
};

/// Every resolvent of two clauses.
///
/// For each literal of `left` whose negation is in `right`, the resolvent on the literal is every other literal of either clause.
/// Resolvents are canonical, and may be tautologies.
///
/// ```rust
/// # use iengine::procedures::resolution::resolvents;
/// # use iengine::structures::literal::{CLiteral, Literal};
/// let p = CLiteral::new(0, true);
/// let q = CLiteral::new(1, true);
///
/// assert_eq!(resolvents(&vec![p, q], &vec![-p]), vec![vec![q]]);
/// assert!(resolvents(&vec![p], &vec![-p])[0].is_empty());
/// assert_eq!(resolvents(&vec![p, q], &vec![-p, -q]).len(), 2);
/// assert!(resolvents(&vec![p], &vec![q]).is_empty());
/// ```
pub fn resolvents(left: &CClause, right: &CClause) -> Vec<CClause> {
    let mut resolvents = Vec::default();

    for literal in left.literals() {
        let complement = literal.negate();
        if !right.contains(&complement) {
            continue;
        }

        let resolvent: CClause = left
            .literals()
            .filter(|other| *other != literal)
            .chain(right.literals().filter(|other| **other != complement))
            .copied()
            .collect();
        resolvents.push(resolvent.canonical());
    }

    resolvents
}

/// Entailment by resolution.
pub struct Resolution {
    /// The clauses of the knowledge base.
    clauses: Vec<CClause>,

    pub config: Config,

    pub counters: Counters,

    dispatcher: Option<Box<Dispatcher>>,
}

impl Resolution {
    pub fn new(kb: &KnowledgeBase, config: Config) -> Self {
        Resolution {
            clauses: kb.clauses(),
            config,
            counters: Counters::default(),
            dispatcher: None,
        }
    }

    pub fn set_dispatcher(&mut self, dispatcher: Box<Dispatcher>) {
        self.dispatcher = Some(dispatcher);
    }

    pub fn solve(&mut self, query: &Sentence) -> Answer {
        let mut initial = self.clauses.clone();
        initial.extend(query.negated().clauses());

        let entailed = self.refute(initial);
        log::debug!(target: targets::RESOLUTION, "Entailed: {entailed}, with {} resolvents", self.counters.resolvents);

        let report = Report::from(entailed);
        send!(self, Dispatch::Report(report));
        Answer::bare(report)
    }

    /// Whether the empty clause can be derived from the given clauses.
    pub fn refute(&mut self, clauses: Vec<CClause>) -> bool {
        let mut seen: HashSet<CClause> = HashSet::default();
        let mut queue: VecDeque<CClause> = VecDeque::default();

        for clause in clauses {
            let clause = clause.canonical();
            if clause.is_empty() {
                return true;
            }
            if clause.is_tautology() {
                continue;
            }
            if seen.insert(clause.clone()) {
                queue.push_back(clause);
            }
        }

        let mut processed: Vec<CClause> = Vec::default();

        while let Some(given) = queue.pop_front() {
            for other in &processed {
                self.counters.pairs += 1;

                for resolvent in resolvents(&given, other) {
                    if resolvent.is_empty() {
                        log::trace!(target: targets::RESOLUTION, "Contradiction from {given:?} and {other:?}");
                        send!(
                            self,
                            Dispatch::Delta(delta::Delta::Resolution(delta::Resolution::Contradiction {
                                left: given.clone(),
                                right: other.clone(),
                            }))
                        );
                        return true;
                    }

                    if resolvent.is_tautology() {
                        self.counters.tautologies += 1;
                        send!(
                            self,
                            Dispatch::Delta(delta::Delta::Resolution(delta::Resolution::Tautology(
                                resolvent.clone()
                            )))
                        );
                        continue;
                    }

                    if seen.insert(resolvent.clone()) {
                        self.counters.resolvents += 1;
                        send!(
                            self,
                            Dispatch::Delta(delta::Delta::Resolution(delta::Resolution::Resolvent {
                                left: given.clone(),
                                right: other.clone(),
                                resolvent: resolvent.clone(),
                            }))
                        );
                        queue.push_back(resolvent);
                    }
                }
            }

            processed.push(given);
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::knowledge::SentenceKind, structures::literal::CLiteral};

    fn solve(tell: &[&str], kind: SentenceKind, ask: &str) -> Report {
        let mut kb = KnowledgeBase::from_sentences(tell, kind).unwrap();
        let query = kb.query(ask).unwrap();
        let mut engine = Resolution::new(&kb, Config::default());
        engine.solve(&query).report
    }

    #[test]
    fn general_kb() {
        let tell = ["(a <=> (c => ~d)) & b & (b => a)", "c", "~f || g"];
        assert_eq!(solve(&tell, SentenceKind::General, "~d"), Report::Entailed);
        assert_eq!(solve(&tell, SentenceKind::General, "d"), Report::NotEntailed);
        assert_eq!(solve(&tell, SentenceKind::General, "~d & (~g => ~f)"), Report::Entailed);
        assert_eq!(solve(&tell, SentenceKind::General, "f"), Report::NotEntailed);
    }

    #[test]
    fn query_outside_of_the_kb() {
        let tell = ["a", "b", "c", "~a || ~b || ~c"];
        assert_eq!(solve(&tell[..3], SentenceKind::General, "d"), Report::NotEntailed);
        assert_eq!(solve(&tell, SentenceKind::General, "d"), Report::Entailed);
    }

    #[test]
    fn definite_kb() {
        let tell = ["a", "a => b", "b => c", "b & c => d", "d => e"];
        assert_eq!(solve(&tell, SentenceKind::Definite, "e"), Report::Entailed);
        assert_eq!(solve(&tell, SentenceKind::Definite, "~a"), Report::NotEntailed);
    }

    #[test]
    fn tautologies_are_never_kept() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let kept = std::rc::Rc::new(std::cell::RefCell::new(Vec::<CClause>::default()));
        let kept_clone = kept.clone();

        let kb = KnowledgeBase::new(SentenceKind::General);
        let mut engine = Resolution::new(&kb, Config::default());
        engine.set_dispatcher(Box::new(move |dispatch: &Dispatch| {
            if let Dispatch::Delta(delta::Delta::Resolution(delta::Resolution::Resolvent { resolvent, .. })) = dispatch {
                kept_clone.borrow_mut().push(resolvent.clone());
            }
        }));

        // p || q and ~p || ~q resolve only to tautologies.
        let clauses = vec![vec![p, q], vec![-p, -q], vec![r], vec![p, r, -p]];
        assert!(!engine.refute(clauses));
        assert_eq!(engine.counters.tautologies, 2);
        assert!(kept.borrow().iter().all(|clause| !clause.is_tautology()));
        assert!(kept.borrow().is_empty());
    }
}
