//! End-to-end tests on a realistic API response shape.

use serde_json::{json, Value};
use shapecast::{
    narrow_from, Cast, CastPath, CastResult, PathSegment, Rejection, Shape, Structure, Unknown,
};

fn api_response() -> Structure {
    Shape::structure()
        .field(
            "header",
            Shape::structure()
                .field("success", Shape::boolean())
                .field("tags", Shape::array_of(Shape::string()))
                .field(
                    "code",
                    Shape::tuple([Shape::number().boxed(), Shape::string().boxed()]),
                ),
        )
        .field(
            "data",
            Shape::array_of(
                Shape::structure()
                    .field("direction", Shape::literal(["left", "right"]))
                    .field("angle", Shape::number().or(Shape::literal(["unknown"])))
                    .field("arguments", Shape::object_of(Shape::string()))
                    .optional("comment", Shape::string())
                    .field(
                        "user",
                        Shape::nullable(Shape::structure().field("name", Shape::string())),
                    )
                    .field("extra", Shape::unknown()),
            ),
        )
}

// Same shape, tightened to the point where only one of the samples passes
fn constrained_api_response() -> Structure {
    Shape::structure()
        .field(
            "header",
            Shape::structure()
                .field("success", Shape::literal([false]))
                .field(
                    "tags",
                    Shape::tuple([Shape::string().boxed(), Shape::string().boxed()]),
                )
                .field(
                    "code",
                    Shape::tuple([Shape::literal([404]).boxed(), Shape::string().boxed()]),
                ),
        )
        .field(
            "data",
            Shape::array_of(
                Shape::structure()
                    .field("direction", Shape::literal(["left"]))
                    .field("angle", Shape::number())
                    .field(
                        "arguments",
                        Shape::structure().field("someKey", Shape::string()),
                    )
                    .field("comment", Shape::undefined())
                    .field("user", Shape::null())
                    .field("extra", Shape::unknown()),
            ),
        )
}

fn good_value() -> Value {
    json!({
        "header": {
            "success": true,
            "tags": ["foo", "bar"],
            "code": [200, "success"]
        },
        "data": [
            {
                "direction": "left",
                "angle": "unknown",
                "arguments": {"foo": "FOO", "bar": "123"},
                "comment": "I am just commenting here",
                "user": {"name": "John Doe"},
                "extra": [1, 2, true]
            },
            {
                "direction": "right",
                "angle": 33,
                "arguments": {},
                "user": null
            }
        ]
    })
}

fn constrained_value() -> Value {
    json!({
        "header": {
            "success": false,
            "tags": ["foo", "bar"],
            "code": [404, "success"]
        },
        "data": [
            {
                "direction": "left",
                "angle": 300,
                "arguments": {"someKey": "FOO", "bar": "123"},
                "user": null,
                "extra": [1, 2, true]
            }
        ]
    })
}

// The second element has no `user` key at all
fn bad_value() -> Value {
    let mut value = good_value();
    value["data"][1]
        .as_object_mut()
        .unwrap()
        .remove("user");
    value
}

#[test]
fn test_api_response_accepts_good_values() {
    let good = good_value();
    let constrained = constrained_value();

    let narrowed = api_response().cast(&good).unwrap();
    assert!(std::ptr::eq(narrowed, good.as_object().unwrap()));
    assert!(api_response().cast(&constrained).is_ok());
}

#[test]
fn test_api_response_rejects_missing_user() {
    let bad = bad_value();
    let rejection = api_response().cast(&bad).unwrap_err();

    assert_eq!(rejection.path.to_string(), "data.1.user");
    assert_eq!(rejection.expected, "null | object");
    assert_eq!(rejection.received, None);
}

#[test]
fn test_constrained_response() {
    let good = good_value();
    let constrained = constrained_value();
    let bad = bad_value();

    assert!(constrained_api_response().cast(&good).is_err());
    assert!(constrained_api_response().cast(&constrained).is_ok());
    assert!(constrained_api_response().cast(&bad).is_err());
}

#[test]
fn test_guard_agrees_with_cast() {
    let is_api_response = narrow_from(api_response());
    let cast = api_response();

    for value in [good_value(), constrained_value(), bad_value()] {
        assert_eq!(is_api_response.test(&value), cast.cast(&value).is_ok());
    }
    assert!(!is_api_response.test(None));
}

#[test]
fn test_bad_header_rejection() {
    let value = json!({
        "header": {
            "success": true,
            "tags": ["a", "b", 3],
            "code": [200, "success"]
        },
        "data": []
    });

    let rejection = api_response().cast(&value).unwrap_err();
    assert_eq!(rejection.message, "Value at 'header.tags.2' is not of type 'string'");
    assert_eq!(
        rejection.path,
        [
            PathSegment::field("header"),
            PathSegment::field("tags"),
            PathSegment::index(2),
        ]
        .into_iter()
        .collect::<CastPath>()
    );
    assert_eq!(rejection.expected, "string");
    assert_eq!(rejection.received, Some(json!(3)));
}

#[test]
fn test_rejection_path_resolves_to_received() {
    let value = json!({
        "header": {
            "success": true,
            "tags": ["a", "b", 3],
            "code": [200, "success"]
        },
        "data": []
    });

    let rejection = api_response().cast(&value).unwrap_err();
    assert_eq!(rejection.path.to_pointer(), "/header/tags/2");
    assert_eq!(
        value.pointer(&rejection.path.to_pointer()),
        rejection.received.as_ref()
    );
}

// ====== Compound Casts ======

fn inner() -> Structure {
    Shape::structure().field("a", Shape::string())
}

// `inner()` with no keys besides `a`
fn exact_inner(value: Unknown<'_>) -> CastResult<Unknown<'_>> {
    let map = Shape::object().check(value)?;
    if map.len() != 1 {
        return Err(Rejection::mismatch("{ a: string } without extra keys", value));
    }
    Shape::string()
        .check(map.get("a"))
        .map_err(|r| r.within("a"))?;
    Ok(value)
}

// Same as `exact_inner`, reusing `inner()` for the field check
fn exact_inner_piped(value: Unknown<'_>) -> CastResult<Unknown<'_>> {
    let map = inner().check(value)?;
    if map.len() != 1 {
        return Err(Rejection::mismatch("{ a: string } without extra keys", value));
    }
    Ok(value)
}

#[test]
fn test_compound_casts() {
    let loose = json!({"b": {"a": "foo", "x": "bar"}});
    let strict = json!({"b": {"a": "foo"}});
    let bad = json!({"c": {"a": "foo"}});

    let inline = Shape::structure().field("b", Shape::structure().field("a", Shape::string()));
    let reused = Shape::structure().field("b", inner());
    let exact = Shape::structure().field("b", Shape::custom(exact_inner));
    let piped = Shape::structure().field("b", Shape::custom(exact_inner_piped));

    for cast in [inline.clone(), reused.clone()] {
        assert!(cast.cast(&loose).is_ok());
        assert!(cast.cast(&strict).is_ok());
        assert!(cast.cast(&bad).is_err());
    }

    for cast in [exact.boxed(), piped.boxed()] {
        assert!(cast.cast(&loose).is_err());
        assert!(cast.cast(&strict).is_ok());
        assert!(cast.cast(&bad).is_err());
    }
}

#[test]
fn test_custom_cast_paths() {
    let exact = Shape::structure().field("b", Shape::custom(exact_inner));

    let extra = json!({"b": {"a": "foo", "x": "bar"}});
    let rejection = exact.cast(&extra).unwrap_err();
    assert_eq!(rejection.path.to_string(), "b");
    assert_eq!(
        rejection.message,
        "Value at 'b' is not of type '{ a: string } without extra keys'"
    );

    let wrong_type = json!({"b": {"a": 1}});
    let rejection = exact.cast(&wrong_type).unwrap_err();
    assert_eq!(rejection.path.to_string(), "b.a");
    assert_eq!(rejection.expected, "string");
}
