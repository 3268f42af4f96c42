/*!
Expressions, aka. the parse tree of a sentence.

An [Expression] is an arena of [Node]s together with a root.
The children of a node are indicies into the same arena, and so:
- Every child index of a node is less than the index of the node, as children are pushed before their parents.
- An expression has exactly one root, and every node reachable from the root is part of the expression.
- A node may be reachable along more than one path (e.g. after eliminating a biconditional), though nodes are never shared between expressions.

Expressions are built through an [Arena], and are immutable once built.
Rewrites, such as those made during [normalisation](crate::cnf), build a fresh arena.

```rust
# use iengine::structures::expression::{Arena, Node};
# use iengine::structures::valuation::Valuation;
let mut arena = Arena::default();
let p = arena.symbol(0);
let q = arena.symbol(1);
let not_p = arena.not(p);
let root = arena.or(not_p, q);
let expression = arena.finish(root);

assert_eq!(expression.node(expression.root()), Node::Or(not_p, q));
assert_eq!(expression.atoms(), vec![0, 1]);
assert_eq!(expression.evaluate(&vec![Some(true), Some(false)]), Some(false));
assert_eq!(expression.evaluate(&vec![Some(false), None]), None);
```
*/

use crate::{
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::Literal,
        valuation::Valuation,
    },
};

/// The index of a node within an arena.
pub type NodeIndex = usize;

/// A node of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Symbol(Atom),
    Not(NodeIndex),
    And(NodeIndex, NodeIndex),
    Or(NodeIndex, NodeIndex),
    Implies(NodeIndex, NodeIndex),
    Iff(NodeIndex, NodeIndex),
}

/// A store of nodes, from which an expression is built.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// Adds a node to the arena, and returns the index of the node.
    pub fn push(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn symbol(&mut self, atom: Atom) -> NodeIndex {
        self.push(Node::Symbol(atom))
    }

    pub fn not(&mut self, child: NodeIndex) -> NodeIndex {
        self.push(Node::Not(child))
    }

    pub fn and(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.push(Node::And(left, right))
    }

    pub fn or(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.push(Node::Or(left, right))
    }

    pub fn implies(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.push(Node::Implies(left, right))
    }

    pub fn iff(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.push(Node::Iff(left, right))
    }

    /// The node at the given index.
    ///
    /// Panics if the index is not part of the arena.
    pub fn node(&self, index: NodeIndex) -> Node {
        self.nodes[index]
    }

    /// Copies the subtree of `expression` at `index` into the arena, and returns the index of the copy.
    pub fn transplant(&mut self, expression: &Expression, index: NodeIndex) -> NodeIndex {
        match expression.node(index) {
            Node::Symbol(atom) => self.symbol(atom),
            Node::Not(child) => {
                let child = self.transplant(expression, child);
                self.not(child)
            }
            Node::And(left, right) => {
                let (left, right) = self.transplant_pair(expression, left, right);
                self.and(left, right)
            }
            Node::Or(left, right) => {
                let (left, right) = self.transplant_pair(expression, left, right);
                self.or(left, right)
            }
            Node::Implies(left, right) => {
                let (left, right) = self.transplant_pair(expression, left, right);
                self.implies(left, right)
            }
            Node::Iff(left, right) => {
                let (left, right) = self.transplant_pair(expression, left, right);
                self.iff(left, right)
            }
        }
    }

    fn transplant_pair(
        &mut self,
        expression: &Expression,
        left: NodeIndex,
        right: NodeIndex,
    ) -> (NodeIndex, NodeIndex) {
        let left = self.transplant(expression, left);
        let right = self.transplant(expression, right);
        (left, right)
    }

    /// Closes the arena, with the given root.
    ///
    /// Panics if the root is not part of the arena.
    pub fn finish(self, root: NodeIndex) -> Expression {
        assert!(root < self.nodes.len(), "The root of an expression must be in the arena");
        Expression {
            nodes: self.nodes,
            root,
        }
    }
}

/// An arena of nodes, together with a root.
#[derive(Clone, Debug)]
pub struct Expression {
    nodes: Vec<Node>,
    root: NodeIndex,
}

impl Expression {
    /// The index of the root node.
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// The node at the given index.
    ///
    /// Panics if the index is not part of the expression.
    pub fn node(&self, index: NodeIndex) -> Node {
        self.nodes[index]
    }

    /// A count of nodes in the arena of the expression.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The atoms of the expression, without duplicates, in the order they are read from left to right.
    pub fn atoms(&self) -> Vec<Atom> {
        let mut atoms = Vec::default();
        let mut stack = vec![self.root];

        while let Some(index) = stack.pop() {
            match self.node(index) {
                Node::Symbol(atom) => {
                    if !atoms.contains(&atom) {
                        atoms.push(atom)
                    }
                }
                Node::Not(child) => stack.push(child),
                Node::And(left, right)
                | Node::Or(left, right)
                | Node::Implies(left, right)
                | Node::Iff(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        atoms
    }

    /// The value of the expression on the given valuation, if every atom required has some value.
    ///
    /// Both sides of each connective are evaluated, so the result is `None` whenever some atom of the expression has no value.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        self.evaluate_at(self.root, valuation)
    }

    fn evaluate_at(&self, index: NodeIndex, valuation: &impl Valuation) -> Option<bool> {
        match self.node(index) {
            Node::Symbol(atom) => valuation.value_of(atom),
            Node::Not(child) => self.evaluate_at(child, valuation).map(|value| !value),
            Node::And(left, right) => self.evaluate_pair(left, right, valuation, |l, r| l && r),
            Node::Or(left, right) => self.evaluate_pair(left, right, valuation, |l, r| l || r),
            Node::Implies(left, right) => {
                self.evaluate_pair(left, right, valuation, |l, r| !l || r)
            }
            Node::Iff(left, right) => self.evaluate_pair(left, right, valuation, |l, r| l == r),
        }
    }

    fn evaluate_pair(
        &self,
        left: NodeIndex,
        right: NodeIndex,
        valuation: &impl Valuation,
        connective: impl Fn(bool, bool) -> bool,
    ) -> Option<bool> {
        let left = self.evaluate_at(left, valuation);
        let right = self.evaluate_at(right, valuation);
        Some(connective(left?, right?))
    }

    /// A fresh expression whose root is the negation of the root of this expression.
    pub fn negated(&self) -> Expression {
        let mut arena = Arena {
            nodes: self.nodes.clone(),
        };
        let root = arena.not(self.root);
        arena.finish(root)
    }

    /// The conjunction of the given clauses, each clause written as a disjunction of literals.
    ///
    /// As there is no constant for truth or falsity, `None` is returned if there are no clauses or if some clause is empty.
    pub fn from_clauses(clauses: &[CClause]) -> Option<Expression> {
        let mut arena = Arena::default();
        let mut conjunction: Option<NodeIndex> = None;

        for clause in clauses {
            let mut disjunction: Option<NodeIndex> = None;
            for literal in clause {
                let mut node = arena.symbol(literal.atom());
                if !literal.polarity() {
                    node = arena.not(node);
                }
                disjunction = Some(match disjunction {
                    None => node,
                    Some(previous) => arena.or(previous, node),
                });
            }

            let disjunction = disjunction?;
            conjunction = Some(match conjunction {
                None => disjunction,
                Some(previous) => arena.and(previous, disjunction),
            });
        }

        conjunction.map(|root| arena.finish(root))
    }

    /// The expression written with external names, and with parentheses around each binary connective (other than at the root).
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        let mut the_string = String::default();
        self.write_at(self.root, atom_db, true, &mut the_string);
        the_string
    }

    fn write_at(&self, index: NodeIndex, atom_db: &AtomDB, top: bool, buffer: &mut String) {
        let (left, connective, right) = match self.node(index) {
            Node::Symbol(atom) => {
                buffer.push_str(atom_db.name(atom).unwrap_or("?"));
                return;
            }
            Node::Not(child) => {
                buffer.push('~');
                self.write_at(child, atom_db, false, buffer);
                return;
            }
            Node::And(left, right) => (left, " & ", right),
            Node::Or(left, right) => (left, " || ", right),
            Node::Implies(left, right) => (left, " => ", right),
            Node::Iff(left, right) => (left, " <=> ", right),
        };

        if !top {
            buffer.push('(');
        }
        self.write_at(left, atom_db, false, buffer);
        buffer.push_str(connective);
        self.write_at(right, atom_db, false, buffer);
        if !top {
            buffer.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::CLiteral;

    #[test]
    fn full_evaluation() {
        let mut arena = Arena::default();
        let p = arena.symbol(0);
        let q = arena.symbol(1);
        let root = arena.implies(p, q);
        let expression = arena.finish(root);

        // The antecedent is false, though the consequent is required all the same.
        assert_eq!(expression.evaluate(&vec![Some(false), None]), None);
        assert_eq!(expression.evaluate(&vec![Some(false), Some(false)]), Some(true));
        assert_eq!(expression.evaluate(&vec![Some(true), Some(false)]), Some(false));
    }

    #[test]
    fn negation_keeps_the_original() {
        let mut arena = Arena::default();
        let p = arena.symbol(0);
        let expression = arena.finish(p);
        let negated = expression.negated();

        assert_eq!(expression.size(), 1);
        assert_eq!(negated.size(), 2);
        assert_eq!(negated.node(negated.root()), Node::Not(p));
        assert_eq!(negated.evaluate(&vec![Some(true)]), Some(false));
    }

    #[test]
    fn clauses_as_an_expression() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let clauses = vec![vec![p, -q], vec![q]];

        let expression = Expression::from_clauses(&clauses).unwrap();
        assert_eq!(expression.evaluate(&vec![Some(true), Some(true)]), Some(true));
        assert_eq!(expression.evaluate(&vec![Some(false), Some(true)]), Some(false));

        assert!(Expression::from_clauses(&[]).is_none());
        assert!(Expression::from_clauses(&[vec![p], vec![]]).is_none());
    }

    #[test]
    fn transplant_copies_a_subtree() {
        let mut arena = Arena::default();
        let p = arena.symbol(0);
        let q = arena.symbol(1);
        let root = arena.iff(p, q);
        let expression = arena.finish(root);

        let mut fresh = Arena::default();
        let copy = fresh.transplant(&expression, expression.root());
        assert_eq!(fresh.node(copy), Node::Iff(0, 1));
    }
}
