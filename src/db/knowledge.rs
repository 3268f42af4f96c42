/*!
The knowledge base, an ordered collection of sentences together with the symbols of those sentences.

A knowledge base holds sentences of a single [kind](SentenceKind), fixed when the knowledge base is made:
- [Definite](SentenceKind::Definite), where each sentence is read as a [definite clause](crate::parse::definite).
- [General](SentenceKind::General), where each sentence is read as an [expression](crate::parse::expression).

Sentences are added by [telling](KnowledgeBase::tell), and are never removed.
The [symbols](KnowledgeBase::symbols) of a knowledge base are the atoms of the sentences told, in the order they were first read.

Queries and goals are read through the knowledge base, so that the names of a query are interned alongside the names of the sentences.
Reading a query does not add to the symbols of the knowledge base.

```rust
# use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
let kind: SentenceKind = "GS".parse().unwrap();
let mut kb = KnowledgeBase::from_sentences(["a => b", "a"], kind).unwrap();
let query = kb.query("b & c").unwrap();

assert_eq!(kb.len(), 2);
assert_eq!(kb.symbols().len(), 2);
assert_eq!(query.symbols().len(), 2);
assert_eq!(kb.atom_db().count(), 3);
```
*/

use std::str::FromStr;

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    parse::{parse_definite, parse_goal, parse_sentence},
    structures::{
        atom::Atom,
        clause::CClause,
        sentence::{DefiniteClause, Goal, Sentence, SentenceForm},
    },
    types::err::{self, DefiniteClauseError, KnowledgeBaseError},
};

/// The kind of sentence held by a knowledge base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentenceKind {
    /// Definite clauses, aka. Horn form.
    Definite,

    /// General sentences.
    General,
}

impl FromStr for SentenceKind {
    type Err = KnowledgeBaseError;

    /// Reads `HF`, `definite`, or `horn` as [Definite](SentenceKind::Definite) and `GS` or `general` as [General](SentenceKind::General), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hf" | "definite" | "horn" => Ok(Self::Definite),
            "gs" | "general" => Ok(Self::General),
            _ => Err(KnowledgeBaseError::UnknownSentenceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Definite => write!(f, "HF"),
            Self::General => write!(f, "GS"),
        }
    }
}

/// The knowledge base.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    kind: SentenceKind,

    /// Sentences, in the order told.
    sentences: Vec<SentenceForm>,

    /// The atoms of the sentences, in the order first read.
    symbols: Vec<Atom>,

    atom_db: AtomDB,
}

impl KnowledgeBase {
    /// An empty knowledge base, for sentences of the given kind.
    pub fn new(kind: SentenceKind) -> Self {
        KnowledgeBase {
            kind,
            sentences: Vec::default(),
            symbols: Vec::default(),
            atom_db: AtomDB::default(),
        }
    }

    /// A knowledge base told each of the given sentences, in order.
    ///
    /// Fails on the first sentence which cannot be read as the given kind.
    pub fn from_sentences<I, S>(sentences: I, kind: SentenceKind) -> Result<Self, err::ErrorKind>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kb = KnowledgeBase::new(kind);
        for sentence in sentences {
            kb.tell(sentence.as_ref())?;
        }
        log::info!(target: targets::KNOWLEDGE_BASE, "{} sentences over {} symbols", kb.len(), kb.symbols.len());
        Ok(kb)
    }

    /// Reads `source` as a sentence of the kind of the knowledge base, and adds the sentence.
    ///
    /// On an error the knowledge base is unchanged.
    pub fn tell(&mut self, source: &str) -> Result<(), err::ErrorKind> {
        let sentence = match self.kind {
            SentenceKind::Definite => {
                SentenceForm::Definite(parse_definite(source, &mut self.atom_db)?)
            }
            SentenceKind::General => {
                SentenceForm::General(parse_sentence(source, &mut self.atom_db)?)
            }
        };

        for atom in sentence.symbols() {
            if !self.symbols.contains(&atom) {
                self.symbols.push(atom);
            }
        }

        log::trace!(target: targets::KNOWLEDGE_BASE, "Told: {}", sentence.as_string(&self.atom_db));
        self.sentences.push(sentence);
        Ok(())
    }

    /// Reads `source` as a general sentence, to be asked of the knowledge base.
    ///
    /// The sentence is read as a general sentence regardless of the kind of the knowledge base.
    pub fn query(&mut self, source: &str) -> Result<Sentence, err::ErrorKind> {
        Ok(parse_sentence(source, &mut self.atom_db)?)
    }

    /// Reads `source` as a goal, to be asked of the knowledge base by chaining.
    pub fn goal(&mut self, source: &str) -> Result<Goal, err::ErrorKind> {
        parse_goal(source, &mut self.atom_db)
    }

    pub fn kind(&self) -> SentenceKind {
        self.kind
    }

    pub fn sentences(&self) -> &[SentenceForm] {
        &self.sentences
    }

    pub fn symbols(&self) -> &[Atom] {
        &self.symbols
    }

    pub fn atom_db(&self) -> &AtomDB {
        &self.atom_db
    }

    /// A count of sentences told.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Each sentence as a definite clause.
    ///
    /// A general sentence is a definite clause only if the sentence is a single symbol, or an implication from a conjunction of symbols to a single symbol.
    /// Otherwise, a [NotDefiniteForm](DefiniteClauseError::NotDefiniteForm) error is returned for the first sentence which is not.
    pub fn definite_clauses(&self) -> Result<Vec<DefiniteClause>, err::ErrorKind> {
        self.sentences
            .iter()
            .map(|sentence| {
                sentence.as_definite().ok_or_else(|| {
                    err::ErrorKind::from(DefiniteClauseError::NotDefiniteForm(
                        sentence.as_string(&self.atom_db),
                    ))
                })
            })
            .collect()
    }

    /// The clauses of every sentence, in the order told, with tautologies omitted.
    pub fn clauses(&self) -> Vec<CClause> {
        self.sentences
            .iter()
            .flat_map(|sentence| sentence.clauses())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_kinds() {
        assert_eq!("HF".parse::<SentenceKind>(), Ok(SentenceKind::Definite));
        assert_eq!("horn".parse::<SentenceKind>(), Ok(SentenceKind::Definite));
        assert_eq!(" gs ".parse::<SentenceKind>(), Ok(SentenceKind::General));
        assert_eq!(
            "FOL".parse::<SentenceKind>(),
            Err(KnowledgeBaseError::UnknownSentenceType("FOL".to_string()))
        );
    }

    #[test]
    fn symbols_grow_only_by_telling() {
        let mut kb = KnowledgeBase::new(SentenceKind::Definite);
        kb.tell("b & c => d").unwrap();
        kb.tell("a => b").unwrap();

        let names: Vec<&str> = kb
            .symbols()
            .iter()
            .map(|atom| kb.atom_db().name(*atom).unwrap())
            .collect();
        assert_eq!(names, vec!["b", "c", "d", "a"]);

        let goal = kb.goal("e").unwrap();
        assert_eq!(kb.symbols().len(), 4);
        assert_eq!(goal.atoms(), &[4]);
    }

    #[test]
    fn failed_tell_leaves_the_kb() {
        let mut kb = KnowledgeBase::new(SentenceKind::Definite);
        kb.tell("a").unwrap();

        assert_eq!(
            kb.tell("~b"),
            Err(DefiniteClauseError::NotDefiniteForm("~b".to_string()).into())
        );
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.symbols().len(), 1);
        assert_eq!(kb.atom_db().count(), 1);
    }

    #[test]
    fn definite_clauses_of_general_sentences() {
        let horn = KnowledgeBase::from_sentences(["a", "a & b => c"], SentenceKind::General).unwrap();
        let clauses = horn.definite_clauses().unwrap();
        assert_eq!(clauses.len(), 2);
        assert!(clauses[0].is_fact());
        assert_eq!(clauses[1].body().len(), 2);

        let general = KnowledgeBase::from_sentences(["a", "~a || b"], SentenceKind::General).unwrap();
        assert_eq!(
            general.definite_clauses(),
            Err(DefiniteClauseError::NotDefiniteForm("~a || b".to_string()).into())
        );
    }

    #[test]
    fn clauses_in_order() {
        let kb = KnowledgeBase::from_sentences(["a => b", "a", "b => b"], SentenceKind::Definite)
            .unwrap();
        assert_eq!(kb.clauses().len(), 2);
    }
}
