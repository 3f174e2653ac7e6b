//! Integration tests for rejections and outcome helpers.

use serde_json::{json, Value};
use shapecast::outcome::{all_of, collect, collect_all, collect_with, filter_accepted, reduce};
use shapecast::{
    accept, reject, reject_message, Cast, CastError, CastPath, Outcome, OutcomeExt, Rejection,
    Rejections, Shape,
};
use stillwater::prelude::*;
use stillwater::Validation;

#[test]
fn test_cast_error_full_context() {
    let value = json!({"tags": ["a", 1]});
    let rejection = Shape::structure()
        .field("tags", Shape::array_of(Shape::string()))
        .cast(&value)
        .unwrap_err();

    assert_eq!(rejection.path.to_string(), "tags.1");
    assert_eq!(rejection.expected, "string");
    assert_eq!(rejection.received, Some(json!(1)));
    assert_eq!(rejection.message, "Value at 'tags.1' is not of type 'string'");
    assert_eq!(rejection.to_string(), rejection.message);

    let error: CastError = rejection.into_error();
    assert_eq!(error.to_string(), "Value at 'tags.1' is not of type 'string'");
}

#[test]
fn test_within_regenerates_message() {
    let value = json!(false);
    let rejection = Shape::string().cast(&value).unwrap_err();
    assert_eq!(rejection.message, "Value is not of type 'string'");

    let rejection = rejection.within("name").within("user");
    assert_eq!(rejection.path, CastPath::root().push_field("user").push_field("name"));
    assert_eq!(rejection.message, "Value at 'user.name' is not of type 'string'");
    assert_eq!(rejection.received, Some(value));
}

#[test]
fn test_rejection_with_unit_payload() {
    let outcome: Outcome<i32> = reject_message("nope");
    let rejection = outcome.unwrap_err();

    assert_eq!(rejection.message, "nope");
    assert_eq!(rejection.to_string(), "nope");
}

#[test]
fn test_accepted_and_rejected_are_exclusive() {
    let accepted: Outcome<i32, &str> = accept(1);
    let rejected: Outcome<i32, &str> = reject("bad", "payload");

    assert!(accepted.is_accepted() && !accepted.is_rejected());
    assert!(rejected.is_rejected() && !rejected.is_accepted());
    assert_eq!(*rejected.unwrap_err(), "payload");
}

#[derive(Debug, PartialEq)]
struct Opaque(u8);

#[test]
fn test_outcome_helpers_take_payloads_without_clone() {
    let accepted: Outcome<i32, Opaque> = accept(1);
    let rejected: Outcome<i32, Opaque> = reject("bad", Opaque(3));

    assert!(accepted.is_accepted());
    assert!(rejected.is_rejected());

    match rejected.into_validation() {
        Validation::Failure(rejections) => assert_eq!(rejections.first().error, Opaque(3)),
        Validation::Success(_) => panic!("Expected failure"),
    }

    let batch: Vec<Outcome<i32, Opaque>> = vec![accept(1), reject("two", Opaque(2)), accept(3)];
    match collect_all(batch) {
        Validation::Failure(rejections) => {
            assert_eq!(rejections.len(), 1);
            assert_eq!(rejections.first().message, "two");
        }
        Validation::Success(_) => panic!("Expected failure"),
    }
}

#[test]
fn test_unwrap_accepted_returns_value() {
    let value = json!("x");
    assert_eq!(Shape::string().cast(&value).unwrap_accepted(), "x");
}

#[test]
#[should_panic(expected = "Unexpected error: Value is not of type 'string'")]
fn test_unwrap_accepted_panics_with_message() {
    let value = json!(1);
    Shape::string().cast(&value).unwrap_accepted();
}

#[test]
fn test_rejections_never_empty() {
    let value = json!(1);
    let rejection = Shape::string().cast(&value).unwrap_err();
    let rejections = Rejections::single(rejection);

    // is_empty always returns false for Rejections (guarantees at least one)
    assert!(!rejections.is_empty());
    assert_eq!(rejections.len(), 1);
}

#[test]
fn test_rejections_combine() {
    let a = json!(1);
    let b = json!("x");
    let first = Rejections::single(Shape::string().cast(&a).unwrap_err());
    let second = Rejections::single(Shape::number().cast(&b).unwrap_err());

    let combined = first.combine(second);
    assert_eq!(combined.len(), 2);
    assert_eq!(combined.first().expected, "string");

    let expected: Vec<_> = combined.iter().map(|r| r.expected.clone()).collect();
    assert_eq!(expected, vec!["string", "number"]);
}

#[test]
fn test_rejections_display() {
    let a = json!(1);
    let b = json!("x");
    let rejections = Rejections::single(Shape::string().cast(&a).unwrap_err())
        .combine(Rejections::single(Shape::number().cast(&b).unwrap_err()));

    let display = rejections.to_string();
    assert!(display.starts_with("Rejected with 2 error(s):"));
    assert!(display.contains("1. Value is not of type 'string'"));
    assert!(display.contains("2. Value is not of type 'number'"));
}

#[test]
fn test_rejections_at_path() {
    let items = json!([1, "a", 2, "b"]);
    let cast = Shape::string();
    let outcomes = items
        .as_array()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, item)| cast.cast(item).map_err(|r| r.within(i)));

    match collect_all(outcomes) {
        Validation::Failure(rejections) => {
            assert_eq!(rejections.len(), 2);
            assert_eq!(rejections.at_path(&CastPath::root().push_index(0)).len(), 1);
            assert_eq!(rejections.at_path(&CastPath::root().push_index(2)).len(), 1);
            assert!(rejections.at_path(&CastPath::root().push_index(1)).is_empty());
        }
        Validation::Success(_) => panic!("Expected failure"),
    }
}

#[test]
fn test_collect_all_success() {
    let items = [json!("a"), json!("b")];
    let outcomes = items.iter().map(|item| Shape::string().cast(item));

    match collect_all(outcomes) {
        Validation::Success(values) => assert_eq!(values, vec!["a", "b"]),
        Validation::Failure(_) => panic!("Expected success"),
    }
}

#[test]
fn test_into_validation() {
    let good = json!(true);
    let bad = json!(null);

    assert!(matches!(
        Shape::boolean().cast(&good).into_validation(),
        Validation::Success(true)
    ));
    match Shape::boolean().cast(&bad).into_validation() {
        Validation::Failure(rejections) => assert_eq!(rejections.first().expected, "boolean"),
        Validation::Success(_) => panic!("Expected failure"),
    }
}

// ====== Batch Helpers ======

fn positive(n: i64) -> Outcome<i64> {
    if n > 0 {
        accept(n)
    } else {
        reject_message(format!("{} is not positive", n))
    }
}

fn join(a: Rejection, b: Rejection) -> Rejection {
    Rejection::new(format!("{}; {}", a.message, b.message), ())
}

#[test]
fn test_all_of_stops_at_first_rejection() {
    let mut seen = Vec::new();
    let outcome = all_of([3, -1, -2], |n, i| {
        seen.push(i);
        positive(n)
    });

    assert_eq!(outcome.unwrap_err().message, "-1 is not positive");
    assert_eq!(seen, vec![0, 1]);
    assert_eq!(all_of([1, 2], |n, _| positive(n)), Ok(vec![1, 2]));
}

#[test]
fn test_collect_keeps_first_rejection() {
    let outcome = collect([positive(1), positive(0), positive(-5)]);
    assert_eq!(outcome.unwrap_err().message, "0 is not positive");
}

#[test]
fn test_collect_with_merges_rejections() {
    let outcome = collect_with([positive(0), positive(1), positive(-5)], join);
    assert_eq!(outcome.unwrap_err().message, "0 is not positive; -5 is not positive");
}

#[test]
fn test_reduce() {
    let sum = reduce([positive(1), positive(2), positive(3)], 0, |acc, n| acc + n, join);
    assert_eq!(sum, Ok(6));

    let failed = reduce([positive(1), positive(-2)], 0, |acc, n| acc + n, join);
    assert_eq!(failed.unwrap_err().message, "-2 is not positive");
}

#[test]
fn test_filter_accepted_reports_skipped() {
    let values: Vec<Value> = vec![json!("a"), json!(1), json!("b"), json!(null)];
    let mut skipped = Vec::new();

    let strings = filter_accepted(
        &values,
        |value, _| Shape::string().cast(value),
        |rejection| skipped.push(rejection.received.clone()),
    );

    assert_eq!(strings, vec!["a", "b"]);
    assert_eq!(skipped, vec![Some(json!(1)), Some(json!(null))]);
}
