/*!
Reports from a procedure.

Each procedure returns an [Answer], made of a [Report] on whether the query is entailed, together with some [Evidence] for the report.

```rust
# use iengine::db::atom::AtomDB;
# use iengine::reports::{Answer, Evidence, Report};
let mut atom_db = AtomDB::default();
let a = atom_db.intern("a");
let b = atom_db.intern("b");

let inferred = Answer {
    report: Report::Entailed,
    evidence: Evidence::Inferred(vec![a, b]),
};
assert_eq!(inferred.as_string(&atom_db), "YES: a, b");

let models = Answer {
    report: Report::Entailed,
    evidence: Evidence::Models(3),
};
assert_eq!(models.as_string(&atom_db), "YES: 3");
```
*/

use crate::{db::atom::AtomDB, structures::atom::Atom};

/// High-level reports regarding a query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The query is true on every model of the knowledge base.
    Entailed,

    /// Some model of the knowledge base is not a model of the query.
    NotEntailed,
}

impl From<bool> for Report {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Entailed,
            false => Self::NotEntailed,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "YES"),
            Self::NotEntailed => write!(f, "NO"),
        }
    }
}

/// Evidence for a report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evidence {
    /// A count of models of the knowledge base, from a truth table.
    Models(usize),

    /// The atoms inferred while chaining, in the order inferred.
    Inferred(Vec<Atom>),

    /// No evidence beyond the report.
    None,
}

/// The answer to a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub report: Report,
    pub evidence: Evidence,
}

impl Answer {
    /// An answer with no evidence.
    pub fn bare(report: Report) -> Self {
        Answer {
            report,
            evidence: Evidence::None,
        }
    }

    /// The answer as a line of text.
    ///
    /// `NO` if the query is not entailed, and otherwise `YES` followed by the evidence, if any.
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        match (self.report, &self.evidence) {
            (Report::NotEntailed, _) => self.report.to_string(),
            (Report::Entailed, Evidence::Models(count)) => format!("{}: {count}", self.report),
            (Report::Entailed, Evidence::Inferred(atoms)) => {
                format!("{}: {}", self.report, atom_db.names_of(atoms))
            }
            (Report::Entailed, Evidence::None) => self.report.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_entailed_hides_evidence() {
        let atom_db = AtomDB::default();
        let answer = Answer {
            report: Report::NotEntailed,
            evidence: Evidence::Models(0),
        };
        assert_eq!(answer.as_string(&atom_db), "NO");
        assert_eq!(Answer::bare(Report::Entailed).as_string(&atom_db), "YES");
        assert_eq!(Report::from(false), Report::NotEntailed);
    }
}
