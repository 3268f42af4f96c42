//! Knowledge bases and queries of earlier test files, with the expected answer of each procedure.

use iengine::{
    config::Config,
    db::knowledge::{KnowledgeBase, SentenceKind},
    procedures::{
        backward::BackwardChaining, dpll::Dpll, forward::ForwardChaining,
        resolution::Resolution, truth_table::TruthTable,
    },
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The answer of each procedure applicable to the knowledge base, with `None` for a procedure which does not apply.
struct Expected<'a> {
    truth_table: &'a str,
    chaining: Option<(&'a str, &'a str)>,
    refutation: &'a str,
}

fn check(tell: &[&str], ask: &str, expected: Expected) {
    init();
    let mut kb = KnowledgeBase::from_sentences(tell, SentenceKind::General).unwrap();
    let query = kb.query(ask).unwrap();

    let truth_table = TruthTable::new(&kb, Config::default()).solve(&query);
    assert_eq!(truth_table.as_string(kb.atom_db()), expected.truth_table, "TT");

    let resolution = Resolution::new(&kb, Config::default()).solve(&query);
    assert_eq!(resolution.as_string(kb.atom_db()), expected.refutation, "RP");

    let dpll = Dpll::new(&kb, Config::default()).solve(&query);
    assert_eq!(dpll.as_string(kb.atom_db()), expected.refutation, "DPLL");

    match expected.chaining {
        Some((forward_expected, backward_expected)) => {
            let goal = kb.goal(ask).unwrap();

            let forward = ForwardChaining::from_kb(&kb, Config::default()).unwrap().solve(&goal);
            assert_eq!(forward.as_string(kb.atom_db()), forward_expected, "FC");

            let backward = BackwardChaining::from_kb(&kb, Config::default()).unwrap().solve(&goal);
            assert_eq!(backward.as_string(kb.atom_db()), backward_expected, "BC");
        }
        None => assert!(ForwardChaining::from_kb(&kb, Config::default()).is_err()),
    }
}

mod horn {
    use super::*;

    #[test]
    fn test_1() {
        check(
            &["p2=> p3", "p3 => p1", "c => e", "b&e => f", "f&g => h", "p2&p1&p3 => d", "p1&p3 => c", "a", "b", "p2"],
            "d",
            Expected {
                truth_table: "YES: 3",
                chaining: Some(("YES: a, b, p2, p3, p1, d", "YES: p2, p3, p1, d")),
                refutation: "YES",
            },
        );
    }

    #[test]
    fn test_4() {
        check(
            &["q1 => q2", "q2 => q3", "q3 => q4", "q1", "q5 => q6", "q6 => q7", "q7 => q8", "q5"],
            "q4",
            Expected {
                truth_table: "YES: 1",
                chaining: Some(("YES: q1, q5, q2, q6, q3, q7, q4", "YES: q1, q2, q3, q4")),
                refutation: "YES",
            },
        );
    }

    #[test]
    fn test_7() {
        check(
            &["r1 => r2", "r2 => r3", "r3 & r4 => r5", "r1", "r4"],
            "r5",
            Expected {
                truth_table: "YES: 1",
                chaining: Some(("YES: r1, r4, r2, r3, r5", "YES: r1, r2, r3, r4, r5")),
                refutation: "YES",
            },
        );
    }
}

mod general {
    use super::*;

    #[test]
    fn test_2() {
        check(
            &["(a <=> (c => ~d)) & b & (b => a)", "c", "~f || g"],
            "d",
            Expected {
                truth_table: "NO",
                chaining: None,
                refutation: "NO",
            },
        );
    }

    #[test]
    fn test_3() {
        check(
            &["(a <=> (c => ~d)) & b & (b => a)", "c", "~f || g"],
            "~d & (~g => ~f)",
            Expected {
                truth_table: "YES: 3",
                chaining: None,
                refutation: "YES",
            },
        );
    }

    #[test]
    fn test_5() {
        check(
            &["(m => n) & (~n => p) || q", "r <=> (s & t)", "u & (v || ~w)"],
            "p",
            Expected {
                truth_table: "NO",
                chaining: None,
                refutation: "NO",
            },
        );
    }

    #[test]
    fn test_6() {
        check(
            &["(x => y) & (y <=> z) & (z => ~w)", "a & b & (c || d)"],
            "~w & (~d => a)",
            Expected {
                truth_table: "NO",
                chaining: None,
                refutation: "NO",
            },
        );
    }
}
