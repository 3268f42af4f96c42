/*!
Entailment by forward chaining over definite clauses.

Forward chaining keeps an agenda of atoms known to be true, initially the head of each fact in the order the facts were told.
Each step takes the first atom from the agenda and, if the atom has not been inferred, infers the atom.
Once every atom of the goal has been inferred the goal is entailed.
Otherwise, each clause with the atom in its body has a count of unsatisfied body atoms decremented, and the head of each clause whose count reaches zero is added to the end of the agenda (in the order the clauses were told), unless the head has been inferred or is already on the agenda.

If the agenda empties the goal is not entailed.

The agenda is first-in first-out, and so atoms are inferred in order of the length of their shortest derivation, with ties broken by the order in which clauses were told.
The atoms inferred only grow, and are returned as evidence.

```rust
# use iengine::config::Config;
# use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
# use iengine::procedures::forward::ForwardChaining;
let tell = ["p2 => p3", "p3 => p1", "c => e", "b & e => f", "f & g => h", "p2 & p1 & p3 => d", "p1 & p3 => c", "a", "b", "p2"];
let mut kb = KnowledgeBase::from_sentences(tell, SentenceKind::Definite).unwrap();
let goal = kb.goal("d").unwrap();

let mut engine = ForwardChaining::from_kb(&kb, Config::default()).unwrap();
assert_eq!(engine.solve(&goal).as_string(kb.atom_db()), "YES: a, b, p2, p3, p1, d");
```
*/

use std::collections::VecDeque;

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
        sentence::{DefiniteClause, Goal},
    },
    types::err::{self},
};

/// Entailment by forward chaining.
pub struct ForwardChaining {
    clauses: Vec<DefiniteClause>,

    /// For each atom, the clauses with the atom in their body, in the order told.
    occurrences: Vec<Vec<usize>>,

    pub config: Config,

    pub counters: Counters,

    dispatcher: Option<Box<Dispatcher>>,
}

impl ForwardChaining {
    /// Forward chaining over the knowledge base, provided every sentence of the knowledge base is a definite clause.
    pub fn from_kb(kb: &KnowledgeBase, config: Config) -> Result<Self, err::ErrorKind> {
        let clauses = kb.definite_clauses()?;

        let mut occurrences: Vec<Vec<usize>> = vec![Vec::default(); kb.atom_db().count()];
        for (index, clause) in clauses.iter().enumerate() {
            for atom in clause.body() {
                occurrences[*atom as usize].push(index);
            }
        }

        Ok(ForwardChaining {
            clauses,
            occurrences,
            config,
            counters: Counters::default(),
            dispatcher: None,
        })
    }

    pub fn set_dispatcher(&mut self, dispatcher: Box<Dispatcher>) {
        self.dispatcher = Some(dispatcher);
    }

    pub fn solve(&mut self, goal: &Goal) -> Answer {
        let size = goal
            .atoms()
            .iter()
            .map(|atom| *atom as usize + 1)
            .fold(self.occurrences.len(), usize::max);

        let mut unsatisfied: Vec<usize> = self.clauses.iter().map(|clause| clause.body().len()).collect();
        let mut inferred = vec![false; size];
        let mut queued = vec![false; size];
        let mut trace: Vec<Atom> = Vec::default();
        let mut agenda: VecDeque<Atom> = VecDeque::default();

        for index in 0..self.clauses.len() {
            if self.clauses[index].is_fact() {
                let head = self.clauses[index].head();
                self.enqueue(head, &mut agenda, &mut queued);
            }
        }

        let entailed = loop {
            if goal.atoms().iter().all(|atom| inferred[*atom as usize]) {
                break true;
            }

            let Some(atom) = agenda.pop_front() else {
                break false;
            };
            if inferred[atom as usize] {
                continue;
            }

            inferred[atom as usize] = true;
            trace.push(atom);
            self.counters.inferred += 1;
            log::trace!(target: targets::CHAINING, "Inferred {atom}");
            send!(self, Dispatch::Delta(delta::Delta::Chaining(delta::Chaining::Inferred(atom))));

            let Some(occurrences) = self.occurrences.get(atom as usize) else {
                continue;
            };
            for position in 0..occurrences.len() {
                let index = self.occurrences[atom as usize][position];
                unsatisfied[index] -= 1;
                if unsatisfied[index] == 0 {
                    let head = self.clauses[index].head();
                    if !inferred[head as usize] {
                        self.enqueue(head, &mut agenda, &mut queued);
                    }
                }
            }
        };

        log::debug!(target: targets::CHAINING, "Forward chaining entailed: {entailed}, after {} inferences", trace.len());
        let report = Report::from(entailed);
        send!(self, Dispatch::Report(report));
        match report {
            Report::Entailed => Answer {
                report,
                evidence: Evidence::Inferred(trace),
            },
            Report::NotEntailed => Answer::bare(report),
        }
    }

    fn enqueue(&mut self, atom: Atom, agenda: &mut VecDeque<Atom>, queued: &mut [bool]) {
        if queued[atom as usize] {
            return;
        }
        queued[atom as usize] = true;
        agenda.push_back(atom);
        send!(self, Dispatch::Delta(delta::Delta::Chaining(delta::Chaining::Queued(atom))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::knowledge::SentenceKind;

    fn solve(tell: &[&str], ask: &str) -> String {
        let mut kb = KnowledgeBase::from_sentences(tell, SentenceKind::Definite).unwrap();
        let goal = kb.goal(ask).unwrap();
        let mut engine = ForwardChaining::from_kb(&kb, Config::default()).unwrap();
        engine.solve(&goal).as_string(kb.atom_db())
    }

    #[test]
    fn chain() {
        let tell = ["a", "a => b", "b => c", "b & c => d", "d => e"];
        assert_eq!(solve(&tell, "e"), "YES: a, b, c, d, e");
        assert_eq!(solve(&tell, "c"), "YES: a, b, c");
        assert_eq!(solve(&tell, "f"), "NO");
    }

    #[test]
    fn breadth_first_order() {
        let tell = ["p2 => p3", "p3 => p1", "c => e", "b & e => f", "f & g => h", "p2 & p1 & p3 => d", "p1 & p3 => c", "a", "b", "p2"];
        assert_eq!(solve(&tell, "f"), "YES: a, b, p2, p3, p1, d, c, e, f");
        assert_eq!(solve(&tell, "h"), "NO");
    }

    #[test]
    fn conjunctive_goal() {
        let tell = ["a", "b", "a & b => c"];
        assert_eq!(solve(&tell, "c & a"), "YES: a, b, c");
        assert_eq!(solve(&tell, "c & d"), "NO");
    }

    #[test]
    fn rules_without_facts() {
        assert_eq!(solve(&["a => b", "b => a"], "a"), "NO");
    }

    #[test]
    fn general_kb_must_be_definite() {
        let kb = KnowledgeBase::from_sentences(["a", "a => b || c"], SentenceKind::General).unwrap();
        assert!(ForwardChaining::from_kb(&kb, Config::default()).is_err());

        let kb = KnowledgeBase::from_sentences(["a", "a => b"], SentenceKind::General).unwrap();
        assert!(ForwardChaining::from_kb(&kb, Config::default()).is_ok());
    }
}
