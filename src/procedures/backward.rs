/*!
Entailment by backward chaining over definite clauses.

To prove an atom:
- If the atom has been inferred, the atom is proved.
- Else, if the atom is the head of a fact, the atom is inferred.
- Else, for each clause with the atom as head (in the order told), an attempt is made to prove each atom of the body in turn.
  If each atom of the body is proved, the atom is inferred.

A goal is entailed if each atom of the goal is proved, in turn.

Atoms inferred are recorded in a [memo](Memo) shared by every attempt during a solve.
The memo is passed by mutable reference, and so an atom proved while attempting one clause remains proved if the clause fails, and is never proved twice.
The memo only grows, and the atoms of the memo (in the order inferred) are returned as evidence.

# Cycles

No record is kept of the atoms an attempt is in the middle of proving.
So, an atom whose every proof depends on the atom itself is attempted without end, and a solve on such an atom does not return.
For example, asking `a` of `a => b` and `b => a` without any fact does not terminate.
If the knowledge base may contain such a cycle, [forward chaining](crate::procedures::forward) is always safe.

```rust
# use iengine::config::Config;
# use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
# use iengine::procedures::backward::BackwardChaining;
let tell = ["a", "a => b", "b => c", "b & c => d", "d => e"];
let mut kb = KnowledgeBase::from_sentences(tell, SentenceKind::Definite).unwrap();
let goal = kb.goal("e").unwrap();

let mut engine = BackwardChaining::from_kb(&kb, Config::default()).unwrap();
assert_eq!(engine.solve(&goal).as_string(kb.atom_db()), "YES: a, b, c, d, e");
```
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
        sentence::{DefiniteClause, Goal},
    },
    types::err::{self},
};

/// Atoms inferred during a solve.
///
/// Shared, by mutable reference, with every attempt to prove some atom.
pub struct Memo {
    inferred: Vec<bool>,

    /// The atoms inferred, in the order inferred.
    trace: Vec<Atom>,
}

impl Memo {
    fn new(size: usize) -> Self {
        Memo {
            inferred: vec![false; size],
            trace: Vec::default(),
        }
    }

    pub fn is_inferred(&self, atom: Atom) -> bool {
        self.inferred.get(atom as usize).is_some_and(|inferred| *inferred)
    }

    fn infer(&mut self, atom: Atom) {
        self.inferred[atom as usize] = true;
        self.trace.push(atom);
    }
}

/// Entailment by backward chaining.
pub struct BackwardChaining {
    clauses: Vec<DefiniteClause>,

    /// For each atom, the clauses with the atom as head, in the order told.
    heads: Vec<Vec<usize>>,

    pub config: Config,

    pub counters: Counters,

    dispatcher: Option<Box<Dispatcher>>,
}

impl BackwardChaining {
    /// Backward chaining over the knowledge base, provided every sentence of the knowledge base is a definite clause.
    pub fn from_kb(kb: &KnowledgeBase, config: Config) -> Result<Self, err::ErrorKind> {
        let clauses = kb.definite_clauses()?;

        let mut heads: Vec<Vec<usize>> = vec![Vec::default(); kb.atom_db().count()];
        for (index, clause) in clauses.iter().enumerate() {
            heads[clause.head() as usize].push(index);
        }

        Ok(BackwardChaining {
            clauses,
            heads,
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
            .fold(self.heads.len(), usize::max);
        let mut memo = Memo::new(size);

        let mut entailed = true;
        for atom in goal.atoms() {
            if !self.prove(*atom, &mut memo) {
                entailed = false;
                break;
            }
        }

        log::debug!(target: targets::CHAINING, "Backward chaining entailed: {entailed}, after {} inferences", memo.trace.len());
        let report = Report::from(entailed);
        send!(self, Dispatch::Report(report));
        match report {
            Report::Entailed => Answer {
                report,
                evidence: Evidence::Inferred(memo.trace),
            },
            Report::NotEntailed => Answer::bare(report),
        }
    }

    /// Attempts to prove `atom`, recording any atom inferred along the way in `memo`.
    fn prove(&mut self, atom: Atom, memo: &mut Memo) -> bool {
        if memo.is_inferred(atom) {
            return true;
        }

        let Some(heads) = self.heads.get(atom as usize) else {
            return false;
        };

        if heads.iter().any(|index| self.clauses[*index].is_fact()) {
            self.infer(atom, memo);
            return true;
        }

        for position in 0..heads.len() {
            let index = self.heads[atom as usize][position];

            let mut proved = true;
            for body_position in 0..self.clauses[index].body().len() {
                let body_atom = self.clauses[index].body()[body_position];
                if !self.prove(body_atom, memo) {
                    proved = false;
                    break;
                }
            }

            if proved {
                self.infer(atom, memo);
                return true;
            }
        }

        log::trace!(target: targets::CHAINING, "Failed to prove {atom}");
        false
    }

    fn infer(&mut self, atom: Atom, memo: &mut Memo) {
        memo.infer(atom);
        self.counters.inferred += 1;
        log::trace!(target: targets::CHAINING, "Inferred {atom}");
        send!(self, Dispatch::Delta(delta::Delta::Chaining(delta::Chaining::Inferred(atom))));
    }
}
