/*!
Sentences, in general form or as definite clauses.

- A [Sentence] wraps an [Expression], together with the atoms of the expression in the order they were read.
- A [DefiniteClause] is a head atom together with a (possibly empty) body of atoms, read as the conjunction of the body implying the head.
- A [SentenceForm] is either of the above, and is what a [knowledge base](crate::db::knowledge) stores.
- A [Goal] is a conjunction of atoms, and is what the chaining procedures are asked.

Each form supports evaluation on a [valuation](crate::structures::valuation) and conversion to [clauses](crate::structures::clause), and so each procedure which does not require definite clauses may work on either form through a match.
*/

use crate::{
    cnf,
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        expression::{Arena, Expression, Node, NodeIndex},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// A general sentence.
#[derive(Clone, Debug)]
pub struct Sentence {
    expression: Expression,
    symbols: Vec<Atom>,
}

impl Sentence {
    pub fn new(expression: Expression) -> Self {
        let symbols = expression.atoms();
        Sentence {
            expression,
            symbols,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The atoms of the sentence, in the order they were read.
    pub fn symbols(&self) -> &[Atom] {
        &self.symbols
    }

    /// See [Expression::evaluate].
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        self.expression.evaluate(valuation)
    }

    /// The negation of the sentence, as a fresh sentence.
    pub fn negated(&self) -> Sentence {
        Sentence::new(self.expression.negated())
    }

    /// An equivalent sentence, whose expression is a conjunction of disjunctions of literals.
    pub fn cnf(&self) -> Sentence {
        Sentence::new(cnf::cnf_expression(&self.expression))
    }

    /// The clauses of the sentence, excluding any tautologies.
    pub fn clauses(&self) -> Vec<CClause> {
        cnf::normalize(&self.expression)
    }

    /// The sentence as a definite clause, if the expression of the sentence is an atom, or an implication from a conjunction of atoms to an atom.
    pub fn as_definite(&self) -> Option<DefiniteClause> {
        match self.expression.node(self.expression.root()) {
            Node::Symbol(atom) => Some(DefiniteClause::new(atom, Vec::default())),
            Node::Implies(left, right) => {
                let Node::Symbol(head) = self.expression.node(right) else {
                    return None;
                };
                let mut body = Vec::default();
                self.conjunct_atoms(left, &mut body)?;
                Some(DefiniteClause::new(head, body))
            }
            _ => None,
        }
    }

    fn conjunct_atoms(&self, index: NodeIndex, atoms: &mut Vec<Atom>) -> Option<()> {
        match self.expression.node(index) {
            Node::Symbol(atom) => {
                atoms.push(atom);
                Some(())
            }
            Node::And(left, right) => {
                self.conjunct_atoms(left, atoms)?;
                self.conjunct_atoms(right, atoms)
            }
            _ => None,
        }
    }

    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        self.expression.as_string(atom_db)
    }
}

/// A definite clause, i.e. the conjunction of the body implies the head.
///
/// A definite clause with an empty body is a fact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefiniteClause {
    head: Atom,
    body: Vec<Atom>,
}

impl DefiniteClause {
    /// A definite clause with the given head and body.
    /// Duplicate atoms in the body are dropped, keeping the first occurrence.
    pub fn new(head: Atom, body: Vec<Atom>) -> Self {
        let mut the_body: Vec<Atom> = Vec::with_capacity(body.len());
        for atom in body {
            if !the_body.contains(&atom) {
                the_body.push(atom);
            }
        }
        DefiniteClause {
            head,
            body: the_body,
        }
    }

    pub fn head(&self) -> Atom {
        self.head
    }

    pub fn body(&self) -> &[Atom] {
        &self.body
    }

    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    /// The atoms of the clause, body first and then the head.
    pub fn symbols(&self) -> Vec<Atom> {
        let mut symbols = self.body.clone();
        if !symbols.contains(&self.head) {
            symbols.push(self.head);
        }
        symbols
    }

    /// The value of the clause on the given valuation, if every atom of the clause has some value.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut body_value = Some(true);
        for atom in &self.body {
            body_value = match (body_value, valuation.value_of(*atom)) {
                (Some(previous), Some(value)) => Some(previous && value),
                _ => None,
            };
        }
        let (body_value, head_value) = (body_value?, valuation.value_of(self.head)?);
        Some(!body_value || head_value)
    }

    /// The clause as a disjunction: the negation of each atom of the body, together with the head.
    pub fn to_clause(&self) -> CClause {
        let mut clause: CClause = self
            .body
            .iter()
            .map(|atom| CLiteral::new(*atom, false))
            .collect();
        clause.push(CLiteral::new(self.head, true));
        clause.canonical()
    }

    /// The clause as an expression, with the body as a left-nested conjunction.
    pub fn to_expression(&self) -> Expression {
        let mut arena = Arena::default();
        let head = arena.symbol(self.head);

        let mut body: Option<NodeIndex> = None;
        for atom in &self.body {
            let node = arena.symbol(*atom);
            body = Some(match body {
                None => node,
                Some(previous) => arena.and(previous, node),
            });
        }

        let root = match body {
            None => head,
            Some(body) => arena.implies(body, head),
        };
        arena.finish(root)
    }

    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        let name = |atom: &Atom| atom_db.name(*atom).unwrap_or("?").to_string();
        match self.body.is_empty() {
            true => name(&self.head),
            false => format!(
                "{} => {}",
                self.body.iter().map(name).collect::<Vec<_>>().join(" & "),
                name(&self.head)
            ),
        }
    }
}

/// The form of a sentence stored in a knowledge base.
#[derive(Clone, Debug)]
pub enum SentenceForm {
    Definite(DefiniteClause),
    General(Sentence),
}

impl SentenceForm {
    /// The atoms of the sentence.
    pub fn symbols(&self) -> Vec<Atom> {
        match self {
            Self::Definite(clause) => clause.symbols(),
            Self::General(sentence) => sentence.symbols().to_vec(),
        }
    }

    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        match self {
            Self::Definite(clause) => clause.evaluate(valuation),
            Self::General(sentence) => sentence.evaluate(valuation),
        }
    }

    /// The clauses of the sentence, excluding any tautologies.
    pub fn clauses(&self) -> Vec<CClause> {
        match self {
            Self::Definite(clause) => {
                let the_clause = clause.to_clause();
                match the_clause.is_tautology() {
                    true => Vec::default(),
                    false => vec![the_clause],
                }
            }
            Self::General(sentence) => sentence.clauses(),
        }
    }

    pub fn as_definite(&self) -> Option<DefiniteClause> {
        match self {
            Self::Definite(clause) => Some(clause.clone()),
            Self::General(sentence) => sentence.as_definite(),
        }
    }

    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        match self {
            Self::Definite(clause) => clause.as_string(atom_db),
            Self::General(sentence) => sentence.as_string(atom_db),
        }
    }
}

/// A conjunction of (one or more) atoms, to be derived by chaining.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    atoms: Vec<Atom>,
}

impl Goal {
    /// A goal of the given atoms, without duplicates.
    pub fn new(atoms: Vec<Atom>) -> Self {
        let mut the_atoms: Vec<Atom> = Vec::with_capacity(atoms.len());
        for atom in atoms {
            if !the_atoms.contains(&atom) {
                the_atoms.push(atom);
            }
        }
        Goal { atoms: the_atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}
