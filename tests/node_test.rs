//! Tests for rule tree evaluation semantics

use std::thread;

use rstest::{fixture, rstest};

use booltree::domain::meal_rule;
use booltree::{Node, Sentence};

fn empty() -> Vec<Node> {
    Vec::new()
}

#[fixture]
fn a() -> Node {
    Node::keyword("a")
}

#[fixture]
fn b() -> Node {
    Node::keyword("b")
}

// ============================================================
// Identity elements
// ============================================================

#[rstest]
#[case("")]
#[case("a")]
#[case("a b")]
#[case("anything at all")]
fn given_empty_and_when_evaluating_then_true(#[case] line: &str) {
    assert!(Node::and(empty()).evaluate(&Sentence::new(line)));
}

#[rstest]
#[case("")]
#[case("a")]
#[case("a b")]
#[case("anything at all")]
fn given_empty_or_when_evaluating_then_false(#[case] line: &str) {
    assert!(!Node::or(empty()).evaluate(&Sentence::new(line)));
}

// ============================================================
// Truth tables
// ============================================================

#[rstest]
#[case("a b", true, true)]
#[case("a", true, false)]
#[case("b", false, true)]
#[case("c", false, false)]
fn given_two_keywords_when_combining_then_matches_truth_table(
    a: Node,
    b: Node,
    #[case] line: &str,
    #[case] has_a: bool,
    #[case] has_b: bool,
) {
    let sentence = Sentence::new(line);
    assert_eq!(a.evaluate(&sentence), has_a);
    assert_eq!(b.evaluate(&sentence), has_b);

    let and = Node::and([a.clone(), b.clone()]);
    let or = Node::or([a.clone(), b.clone()]);
    assert_eq!(and.evaluate(&sentence), has_a && has_b);
    assert_eq!(or.evaluate(&sentence), has_a || has_b);
    assert_eq!(Node::not(a).evaluate(&sentence), !has_a);
}

#[rstest]
#[case("a b")]
#[case("a")]
#[case("b")]
#[case("c")]
fn given_any_sentence_when_double_negating_then_same_result(a: Node, #[case] line: &str) {
    let sentence = Sentence::new(line);
    let twice = Node::not(Node::not(a.clone()));
    assert_eq!(twice.evaluate(&sentence), a.evaluate(&sentence));
}

#[rstest]
#[case("a b")]
#[case("a")]
#[case("b")]
#[case("c")]
fn given_any_sentence_when_applying_de_morgan_then_both_forms_agree(
    a: Node,
    b: Node,
    #[case] line: &str,
) {
    let sentence = Sentence::new(line);
    let not_or = Node::not(Node::or([a.clone(), b.clone()]));
    let and_not = Node::and([Node::not(a.clone()), Node::not(b.clone())]);
    assert_eq!(not_or.evaluate(&sentence), and_not.evaluate(&sentence));

    let not_and = Node::not(Node::and([a.clone(), b.clone()]));
    let or_not = Node::or([Node::not(a), Node::not(b)]);
    assert_eq!(not_and.evaluate(&sentence), or_not.evaluate(&sentence));
}

#[test]
fn given_many_children_when_one_fails_then_and_is_false_and_or_is_true() {
    let words = ["x", "y", "z"];
    let sentence = Sentence::new("x z");
    let and = Node::and(words.iter().map(|w| Node::keyword(*w)));
    let or = Node::or(words.iter().map(|w| Node::keyword(*w)));
    assert!(!and.evaluate(&sentence));
    assert!(or.evaluate(&sentence));
}

// ============================================================
// Meal rule scenario
// ============================================================

#[rstest]
#[case("I had dinner yesterday", true)]
#[case("I had dinner and lunch", false)]
#[case("I had cereal", false)]
#[case("breakfast", true)]
#[case("supper and brunch", false)]
#[case("Dinner", false)]
#[case("", false)]
fn given_meal_rule_when_evaluating_then_expected_verdict(
    #[case] line: &str,
    #[case] expected: bool,
) {
    assert_eq!(meal_rule().evaluate(&Sentence::new(line)), expected);
}

#[test]
fn given_empty_keyword_when_line_has_double_space_then_matches() {
    let rule = Node::and([Node::keyword("dinner"), Node::keyword("")]);
    assert!(rule.evaluate(&Sentence::new("dinner  today")));
    assert!(!rule.evaluate(&Sentence::new("dinner today")));
}

// ============================================================
// Concurrency
// ============================================================

#[test]
fn given_shared_rule_when_evaluating_from_threads_then_results_agree() {
    let rule = meal_rule();
    let lines = [
        ("I had dinner yesterday", true),
        ("I had dinner and lunch", false),
        ("I had cereal", false),
        ("supper", true),
    ];

    thread::scope(|scope| {
        let handles: Vec<_> = lines
            .iter()
            .map(|(line, expected)| {
                let rule = &rule;
                scope.spawn(move || {
                    let sentence = Sentence::new(line);
                    assert_eq!(rule.evaluate(&sentence), *expected, "line: {}", line);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn given_rule_when_checking_thread_safety_then_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Node>();
    assert_send_sync::<Sentence>();
}
