//! Integration-level concrete scenarios: grammars assembled purely from the public combinator
//! API, each exercising one of the engine's headline claims (ambiguity, direct and indirect left
//! recursion, exponential-but-finite ambiguity, and a cyclic grammar that must not hang).

use ricochet::prelude::*;

fn eval(value: &Value) -> i64 {
    match value {
        Value::Node(Tag::Action(action), children) if action.name() == "num" => match &children[0] {
            Value::Leaf(digits) => digits.parse().expect("digit leaf should parse as i64"),
            other => panic!("expected a digit leaf under a num node, got {other:?}"),
        },
        Value::Node(Tag::Action(action), children) if action.name() == "add" => {
            eval(&children[0]) + eval(&children[2])
        }
        Value::Node(Tag::Action(action), children) if action.name() == "sub" => {
            eval(&children[0]) - eval(&children[2])
        }
        other => panic!("unexpected value in arithmetic tree: {other:?}"),
    }
}

fn arithmetic_expr() -> Parser {
    let num = alt_reduced(
        (0..=9).map(|d| d.to_string()).collect::<Vec<_>>(),
        Action::symbol("num"),
    );
    define_parser("expr", move |expr, _tag| {
        alt([
            seq_reduced([expr.clone(), term("+"), expr.clone()], Action::symbol("add")),
            seq_reduced([expr.clone(), term("-"), expr.clone()], Action::symbol("sub")),
            num.clone(),
        ])
    })
}

#[test]
fn ambiguous_arithmetic_grammar_yields_every_grouping() {
    let expr = arithmetic_expr();

    let mut sums: Vec<i64> = expr.parse("1+2+3").map(|tree| eval(&tree)).collect();
    sums.sort();
    assert_eq!(sums, vec![6, 6]);

    let mut mixed: Vec<i64> = expr.parse("1-2+3").map(|tree| eval(&tree)).collect();
    mixed.sort();
    assert_eq!(mixed, vec![-4, 2]);
}

#[test]
fn right_recursive_ambiguous_tail_terminates_and_reconstructs_input() {
    // S ::= "a" S | "a" | ε
    let s = define_parser("s", |s, _tag| {
        alt([seq([term("a"), s.clone()]), term("a"), epsilon()])
    });

    let results: Vec<_> = s.parse("aaa").collect();
    assert!(!results.is_empty());
    for tree in &results {
        assert_eq!(tree.flatten(), "aaa");
    }
}

#[test]
fn direct_left_recursion_terminates_with_at_least_one_parse() {
    // S ::= S "a" | "a"
    let s = define_parser("s", |s, _tag| alt([seq([s.clone(), term("a")]), term("a")]));

    let results: Vec<_> = s.parse("aaa").collect();
    assert!(!results.is_empty());
    for tree in &results {
        assert_eq!(tree.flatten(), "aaa");
    }
}

#[test]
fn indirect_left_recursion_across_three_mutually_recursive_rules() {
    // A ::= B "a"
    // B ::= C "b"
    // C ::= B | A | "c"
    //
    // Each rule forward-references the others before they've finished being defined, nested the
    // same way `define_parser`'s own self-reference works: `a_handle` and `b_handle` are the
    // not-yet-defined rules' own handles, usable inside a sibling's body because their bodies are
    // bound only after the whole nested expression returns.
    let a = define_parser("a", |a_handle, _tag_a| {
        let b = define_parser("b", |b_handle, _tag_b| {
            let c = define_parser("c", |_c_handle, _tag_c| {
                alt([b_handle.clone(), a_handle.clone(), term("c")])
            });
            seq([c, term("b")])
        });
        seq([b, term("a")])
    });

    let results: Vec<_> = a.parse("cba").collect();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].flatten(), "cba");
}

#[test]
fn exponential_ambiguity_stays_finite_and_reconstructs_input() {
    // S ::= "b" | S S | S S S
    let s = define_parser("s", |s, _tag| {
        alt([
            term("b"),
            seq([s.clone(), s.clone()]),
            seq([s.clone(), s.clone(), s.clone()]),
        ])
    });

    let results: Vec<_> = s.parse("bbbbbbb").collect();
    assert!(!results.is_empty());
    for tree in &results {
        assert_eq!(tree.flatten(), "bbbbbbb");
    }
}

#[test]
fn cyclic_grammar_does_not_hang_and_answers_promptly() {
    // S ::= S | "a" — purely cyclic, with a single genuine alternative.
    let s = define_parser("s", |s, _tag| alt([s.clone(), term("a")]));

    let mut stream = s.parse("a");
    let first = stream.next().expect("a cyclic-but-grounded grammar should still find a parse");
    assert_eq!(first.flatten(), "a");
}

fn sicp_sentence() -> Parser {
    let article = alt(["the ", "a "]);
    let noun = alt(["student ", "professor ", "cat ", "class "]);
    let verb = alt(["studies ", "lectures ", "eats ", "sleeps "]);
    let preposition = alt(["for ", "to ", "in ", "with "]);

    let preposition_for_np = preposition.clone();
    let noun_phrase = define_parser("noun-phrase", move |np_handle, _tag| {
        let np_handle = np_handle.clone();
        let prep_phrase = define_parser("prep-phrase", move |_pp_handle, _tag2| {
            seq([preposition_for_np.clone(), np_handle.clone()])
        });
        seq([article.clone(), noun.clone(), maybe(prep_phrase)])
    });

    let noun_phrase_for_vp = noun_phrase.clone();
    let verb_phrase = define_parser("verb-phrase", move |_vp_handle, _tag| {
        let prep_phrase = define_parser("verb-prep-phrase", move |_pp_handle, _tag2| {
            seq([preposition.clone(), noun_phrase_for_vp.clone()])
        });
        seq([verb.clone(), maybe(prep_phrase)])
    });

    seq([noun_phrase, verb_phrase])
}

#[test]
fn sicp_toy_grammar_parses_a_prepositionally_nested_sentence() {
    let sentence = sicp_sentence();
    let input = "the student with the cat sleeps in the class ";

    let results: Vec<_> = sentence.parse(input).collect();
    assert!(!results.is_empty());
    assert!(results.iter().all(|tree| tree.flatten() == input));
}
