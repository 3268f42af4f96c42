/*!
Normalisation of expressions to conjunctive normal form.

Normalisation is made in four passes, each building a fresh [Arena]:
1. [Implications and biconditionals are eliminated](eliminate_implications), leaving only `~`, `&`, and `||`.
   - `A <=> B` is rewritten to `(A => B) & (B => A)`, and `A => B` is rewritten to `~A || B`.
2. [Negations are pushed inward](push_negations), so that negation only appears directly on a symbol.
   - By De Morgan's laws, with double negations cancelled.
3. [Disjunctions are distributed over conjunctions](distribute), so that no conjunction is below a disjunction.
   - `A || (B & C)` is rewritten to `(A || B) & (A || C)`, and likewise for `(B & C) || A`.
4. The resulting conjunction is flattened to a list of [clauses](crate::structures::clause), one clause for each conjunct.

During the last pass each clause is made [canonical](crate::structures::clause::Clause::canonical), tautologies are dropped, and duplicate clauses are dropped (keeping the first).
As clauses are canonical, normalising an expression built [from the clauses](Expression::from_clauses) of a normalisation returns the same clauses.

Each pass is total on the output of the previous pass, and the second pass is total on any expression.

```rust
# use iengine::db::atom::AtomDB;
# use iengine::parse::parse_expression;
# use iengine::cnf::normalize;
# use iengine::structures::clause::Clause;
let mut atom_db = AtomDB::default();
let expression = parse_expression("a <=> (b || ~c)", &mut atom_db).unwrap();

let clauses: Vec<String> = normalize(&expression)
    .iter()
    .map(|clause| clause.as_string(&atom_db))
    .collect();

assert_eq!(clauses, vec!["~a || b || ~c", "a || ~b", "a || c"]);
```

# Size

Distribution may increase the size of an expression exponentially, e.g. on a disjunction of conjunctions.
No auxiliary atoms are introduced, as every clause is over the atoms of the given expression.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        expression::{Arena, Expression, Node, NodeIndex},
        literal::{CLiteral, Literal},
    },
};

/// Normalises `expression` to a list of clauses, without tautologies or duplicates.
pub fn normalize(expression: &Expression) -> Vec<CClause> {
    let cnf = cnf_expression(expression);
    let clauses = flatten(&cnf);
    log::trace!(target: targets::CNF, "{} clauses from {} nodes", clauses.len(), expression.size());
    clauses
}

/// An equivalent expression in conjunctive normal form, i.e. the output of the first three passes of normalisation.
pub fn cnf_expression(expression: &Expression) -> Expression {
    let without_implications = eliminate_implications(expression);
    let negation_normal = push_negations(&without_implications);
    distribute(&negation_normal)
}

/// The first pass, eliminating implications and biconditionals.
pub fn eliminate_implications(expression: &Expression) -> Expression {
    let mut arena = Arena::default();
    let mut memo = HashMap::default();
    let root = eliminate_at(expression, expression.root(), &mut arena, &mut memo);
    arena.finish(root)
}

fn eliminate_at(
    expression: &Expression,
    index: NodeIndex,
    arena: &mut Arena,
    memo: &mut HashMap<NodeIndex, NodeIndex>,
) -> NodeIndex {
    if let Some(done) = memo.get(&index) {
        return *done;
    }

    let fresh = match expression.node(index) {
        Node::Symbol(atom) => arena.symbol(atom),

        Node::Not(child) => {
            let child = eliminate_at(expression, child, arena, memo);
            arena.not(child)
        }

        Node::And(left, right) => {
            let left = eliminate_at(expression, left, arena, memo);
            let right = eliminate_at(expression, right, arena, memo);
            arena.and(left, right)
        }

        Node::Or(left, right) => {
            let left = eliminate_at(expression, left, arena, memo);
            let right = eliminate_at(expression, right, arena, memo);
            arena.or(left, right)
        }

        Node::Implies(left, right) => {
            let left = eliminate_at(expression, left, arena, memo);
            let right = eliminate_at(expression, right, arena, memo);
            let not_left = arena.not(left);
            arena.or(not_left, right)
        }

        Node::Iff(left, right) => {
            let left = eliminate_at(expression, left, arena, memo);
            let right = eliminate_at(expression, right, arena, memo);

            let not_left = arena.not(left);
            let forward = arena.or(not_left, right);
            let not_right = arena.not(right);
            let backward = arena.or(not_right, left);
            arena.and(forward, backward)
        }
    };

    memo.insert(index, fresh);
    fresh
}

/// The second pass, pushing negations inward.
///
/// Implications and biconditionals are rewritten as in the first pass when met, and so the pass may be made on any expression.
pub fn push_negations(expression: &Expression) -> Expression {
    let mut arena = Arena::default();
    let mut memo = HashMap::default();
    let root = negations_at(expression, expression.root(), true, &mut arena, &mut memo);
    arena.finish(root)
}

/// Writes the subexpression at `index` in negation normal form, negated if `polarity` is false.
fn negations_at(
    expression: &Expression,
    index: NodeIndex,
    polarity: bool,
    arena: &mut Arena,
    memo: &mut HashMap<(NodeIndex, bool), NodeIndex>,
) -> NodeIndex {
    if let Some(done) = memo.get(&(index, polarity)) {
        return *done;
    }

    let mut pair = |left: NodeIndex, left_polarity, right: NodeIndex, right_polarity, arena: &mut Arena| {
        let left = negations_at(expression, left, left_polarity, arena, memo);
        let right = negations_at(expression, right, right_polarity, arena, memo);
        (left, right)
    };

    let fresh = match expression.node(index) {
        Node::Symbol(atom) => {
            let symbol = arena.symbol(atom);
            match polarity {
                true => symbol,
                false => arena.not(symbol),
            }
        }

        Node::Not(child) => negations_at(expression, child, !polarity, arena, memo),

        Node::And(left, right) => {
            let (left, right) = pair(left, polarity, right, polarity, arena);
            match polarity {
                true => arena.and(left, right),
                false => arena.or(left, right),
            }
        }

        Node::Or(left, right) => {
            let (left, right) = pair(left, polarity, right, polarity, arena);
            match polarity {
                true => arena.or(left, right),
                false => arena.and(left, right),
            }
        }

        // A => B is ~A || B, and ~(A => B) is A & ~B.
        Node::Implies(left, right) => {
            let (left, right) = pair(left, !polarity, right, polarity, arena);
            match polarity {
                true => arena.or(left, right),
                false => arena.and(left, right),
            }
        }

        // A <=> B is (~A || B) & (~B || A), and ~(A <=> B) is (A & ~B) || (~A & B).
        Node::Iff(left, right) => {
            let (left_same, right_other) = pair(left, polarity, right, !polarity, arena);
            let (left_other, right_same) = pair(left, !polarity, right, polarity, arena);
            match polarity {
                true => {
                    let forward = arena.or(right_other, left_same);
                    let backward = arena.or(left_other, right_same);
                    arena.and(backward, forward)
                }
                false => {
                    let forward = arena.and(left_same, right_other);
                    let backward = arena.and(left_other, right_same);
                    arena.or(forward, backward)
                }
            }
        }
    };

    memo.insert((index, polarity), fresh);
    fresh
}

/// The third pass, distributing disjunctions over conjunctions.
///
/// The expression is expected to be in negation normal form, though a negation of something other than a symbol is copied as is.
pub fn distribute(expression: &Expression) -> Expression {
    let mut arena = Arena::default();
    let mut memo = HashMap::default();
    let root = distribute_at(expression, expression.root(), &mut arena, &mut memo);
    arena.finish(root)
}

fn distribute_at(
    expression: &Expression,
    index: NodeIndex,
    arena: &mut Arena,
    memo: &mut HashMap<NodeIndex, NodeIndex>,
) -> NodeIndex {
    if let Some(done) = memo.get(&index) {
        return *done;
    }

    let fresh = match expression.node(index) {
        Node::And(left, right) => {
            let left = distribute_at(expression, left, arena, memo);
            let right = distribute_at(expression, right, arena, memo);
            arena.and(left, right)
        }

        Node::Or(left, right) => {
            let left = distribute_at(expression, left, arena, memo);
            let right = distribute_at(expression, right, arena, memo);
            disjoin(arena, left, right)
        }

        _ => arena.transplant(expression, index),
    };

    memo.insert(index, fresh);
    fresh
}

/// The disjunction of two expressions in conjunctive normal form, as an expression in conjunctive normal form.
fn disjoin(arena: &mut Arena, left: NodeIndex, right: NodeIndex) -> NodeIndex {
    if let Node::And(left_left, left_right) = arena.node(left) {
        let first = disjoin(arena, left_left, right);
        let second = disjoin(arena, left_right, right);
        return arena.and(first, second);
    }

    if let Node::And(right_left, right_right) = arena.node(right) {
        let first = disjoin(arena, left, right_left);
        let second = disjoin(arena, left, right_right);
        return arena.and(first, second);
    }

    arena.or(left, right)
}

/// The fourth pass, from an expression in conjunctive normal form to a list of clauses.
fn flatten(expression: &Expression) -> Vec<CClause> {
    let mut clauses = Vec::default();
    let mut seen: HashSet<CClause> = HashSet::default();

    let mut conjuncts = vec![expression.root()];
    while let Some(index) = conjuncts.pop() {
        match expression.node(index) {
            Node::And(left, right) => {
                conjuncts.push(right);
                conjuncts.push(left);
            }

            _ => {
                let mut clause = CClause::default();
                let mut disjuncts = vec![index];

                while let Some(index) = disjuncts.pop() {
                    match expression.node(index) {
                        Node::Or(left, right) => {
                            disjuncts.push(right);
                            disjuncts.push(left);
                        }
                        Node::Symbol(atom) => clause.push(CLiteral::new(atom, true)),
                        Node::Not(child) => match expression.node(child) {
                            Node::Symbol(atom) => clause.push(CLiteral::new(atom, false)),
                            _ => unreachable!("Negation of a non-symbol after pushing negations"),
                        },
                        _ => unreachable!("Conjunction below a disjunction after distribution"),
                    }
                }

                let clause = clause.canonical();
                if clause.is_tautology() {
                    log::trace!(target: targets::CNF, "Dropped tautology {clause:?}");
                    continue;
                }
                if seen.insert(clause.clone()) {
                    clauses.push(clause);
                }
            }
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::atom::AtomDB, parse::parse_expression, structures::valuation::CValuation};

    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Every valuation of the given count of atoms.
    fn valuations(count: usize) -> impl Iterator<Item = CValuation> {
        (0..1_u32 << count).map(move |bits| (0..count).map(|i| Some(bits & (1 << i) != 0)).collect())
    }

    fn clauses_value(clauses: &[CClause], valuation: &CValuation) -> Option<bool> {
        let mut value = Some(true);
        for clause in clauses {
            value = match (value, clause.value_on(valuation)) {
                (Some(previous), Some(this)) => Some(previous && this),
                _ => None,
            };
        }
        value
    }

    fn assert_equivalent(source: &str) {
        let mut atom_db = AtomDB::default();
        let expression = parse_expression(source, &mut atom_db).unwrap();
        let clauses = normalize(&expression);
        let cnf = cnf_expression(&expression);

        for valuation in valuations(atom_db.count()) {
            assert_eq!(expression.evaluate(&valuation), clauses_value(&clauses, &valuation), "{source}");
            assert_eq!(expression.evaluate(&valuation), cnf.evaluate(&valuation), "{source}");
        }
    }

    fn random_expression(rng: &mut StdRng, arena: &mut Arena, atoms: u32, depth: usize) -> NodeIndex {
        if depth == 0 || rng.gen_bool(0.2) {
            return arena.symbol(rng.gen_range(0..atoms));
        }
        match rng.gen_range(0..5) {
            0 => {
                let child = random_expression(rng, arena, atoms, depth - 1);
                arena.not(child)
            }
            connective => {
                let left = random_expression(rng, arena, atoms, depth - 1);
                let right = random_expression(rng, arena, atoms, depth - 1);
                match connective {
                    1 => arena.and(left, right),
                    2 => arena.or(left, right),
                    3 => arena.implies(left, right),
                    _ => arena.iff(left, right),
                }
            }
        }
    }

    mod passes {
        use super::*;

        #[test]
        fn no_implications_after_elimination() {
            let mut atom_db = AtomDB::default();
            let expression = parse_expression("(a => b) <=> ~(c => d)", &mut atom_db).unwrap();
            let eliminated = eliminate_implications(&expression);

            for index in 0..eliminated.size() {
                assert!(!matches!(
                    eliminated.node(index),
                    Node::Implies(..) | Node::Iff(..)
                ));
            }
        }

        #[test]
        fn negations_only_on_symbols() {
            let mut atom_db = AtomDB::default();
            let expression = parse_expression("~(a & ~(b || ~~c)) || ~(a <=> b)", &mut atom_db).unwrap();
            let pushed = push_negations(&expression);

            for index in 0..pushed.size() {
                if let Node::Not(child) = pushed.node(index) {
                    assert!(matches!(pushed.node(child), Node::Symbol(_)));
                }
            }
        }

        #[test]
        fn double_negation() {
            let mut atom_db = AtomDB::default();
            let expression = parse_expression("~~~~a", &mut atom_db).unwrap();
            let pushed = push_negations(&expression);
            assert_eq!(pushed.node(pushed.root()), Node::Symbol(0));
        }

        #[test]
        fn distribution() {
            let mut atom_db = AtomDB::default();
            let expression = parse_expression("a || (b & c)", &mut atom_db).unwrap();
            assert_eq!(cnf_expression(&expression).as_string(&atom_db), "(a || b) & (a || c)");

            let expression = parse_expression("(b & c) || a", &mut atom_db).unwrap();
            assert_eq!(cnf_expression(&expression).as_string(&atom_db), "(b || a) & (c || a)");
        }
    }

    #[test]
    fn equivalence_on_fixed_sentences() {
        for source in [
            "a",
            "~a",
            "a <=> (c => ~d)",
            "(a <=> (c => ~d)) & b & (b => a)",
            "~d & (~g => ~f)",
            "(m => n) & (~n => p) || q",
            "r <=> (s & t)",
            "(x => y) & (y <=> z) & (z => ~w)",
            "~(a <=> b) <=> ~(c & (d || e))",
            "~p & (q => r) || (s <=> ~t)",
        ] {
            assert_equivalent(source);
        }
    }

    #[test]
    fn equivalence_on_random_expressions() {
        let mut rng = StdRng::seed_from_u64(91);
        let atoms = 4;

        for _ in 0..200 {
            let mut arena = Arena::default();
            let root = random_expression(&mut rng, &mut arena, atoms, 4);
            let expression = arena.finish(root);
            let clauses = normalize(&expression);

            for valuation in valuations(atoms as usize) {
                assert_eq!(expression.evaluate(&valuation), clauses_value(&clauses, &valuation));
            }
        }
    }

    #[test]
    fn idempotence() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..200 {
            let mut arena = Arena::default();
            let root = random_expression(&mut rng, &mut arena, 4, 4);
            let clauses = normalize(&arena.finish(root));

            match Expression::from_clauses(&clauses) {
                Some(rebuilt) => assert_eq!(normalize(&rebuilt), clauses),
                None => assert!(clauses.is_empty()),
            }
        }
    }

    #[test]
    fn tautologies_and_duplicates_dropped() {
        let mut atom_db = AtomDB::default();
        let expression = parse_expression("(a || ~a) & (b || c) & (c || b) & (b || b)", &mut atom_db).unwrap();
        let clauses = normalize(&expression);

        let a = CLiteral::new(0, true);
        let b = CLiteral::new(1, true);
        let c = CLiteral::new(2, true);
        assert_eq!(clauses, vec![vec![b, c], vec![b]]);
        assert!(!clauses.contains(&vec![-a, a]));

        let tautology = parse_expression("a || ~a", &mut atom_db).unwrap();
        assert!(normalize(&tautology).is_empty());
    }
}
