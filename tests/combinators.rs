use rust_array_manip::prelude::*;

fn obj(json: &str) -> Value {
    parse_json(json).unwrap()
}

#[test]
fn prop_empty_or_none_is_identity() {
    for v in [obj(r#"{"a":1}"#), Value::Int64(4), Value::from("s"), Value::Null] {
        assert_eq!(prop("").apply(&v), v);
        assert_eq!(prop(None).apply(&v), v);
    }
}

#[test]
fn prop_nested_and_missing() {
    assert_eq!(prop("a.b").apply(&obj(r#"{"a":{"b":5}}"#)), Value::Int64(5));
    assert_eq!(prop("a.b").apply(&obj(r#"{"a":null}"#)), Value::Undefined);
}

#[test]
fn op_plus_and_abs() {
    assert_eq!(op("+", 3).apply(&Value::Int64(2)), Value::Int64(5));
    assert_eq!(op("abs", ()).apply(&Value::Int64(-4)), Value::Int64(4));
    assert_eq!(op("abs", Operand::UseItem).apply(&Value::Int64(-4)), Value::Int64(4));
}

#[test]
fn in_set_membership() {
    let t = in_set(obj("[1,2,3]"));
    assert_eq!(t.apply(&Value::Int64(2)), Value::Bool(true));
    assert_eq!(t.apply(&Value::Int64(9)), Value::Bool(false));
}

#[test]
fn chaining_matches_nested_application() {
    let v = obj(r#"{"a":10}"#);
    let chained = prop("a").op(">", 5).apply(&v);
    let nested = op(">", 5).apply(&prop("a").apply(&v));
    assert_eq!(chained, nested);
    assert_eq!(chained, Value::Bool(true));
}

#[test]
fn not_is() {
    let t = is(3).not();
    assert_eq!(t.apply(&Value::Int64(3)), Value::Bool(false));
    assert_eq!(t.apply(&Value::Int64(4)), Value::Bool(true));
}

#[test]
fn and_or_truth_table() {
    let f = prop("x");
    let g = prop("y");
    for (x, y) in [(true, true), (true, false), (false, true), (false, false)] {
        let v: Value = [("x", Value::Bool(x)), ("y", Value::Bool(y))].into_iter().collect();
        let both = and([Transform::from(f.clone()), g.clone().into()]);
        let either = or([Transform::from(f.clone()), g.clone().into()]);
        assert_eq!(both.apply(&v), Value::Bool(x && y));
        assert_eq!(either.apply(&v), Value::Bool(x || y));
    }
}

#[test]
fn to_arr_triple() {
    let v = obj(r#"{"a":1}"#);
    let t = to_arr([Slot::from(prop("a")), Slot::from(Value::Null), Slot::from(7)]);
    assert_eq!(
        t.apply(&v),
        Value::Array(vec![Value::Int64(1), v.clone(), Value::Int64(7)])
    );
}

#[test]
fn to_obj_chained_after_prop() {
    let v = obj(r#"{"user":{"first":"Ada","last":"Lovelace"}}"#);
    let t = prop("user").to_obj([
        ("full", Slot::from(prop("first").op("+", " ").op("+", prop("last")))),
        ("kind", Slot::from("person")),
    ]);
    let out = t.apply(&v);
    assert_eq!(out.get_path("full"), Value::from("Ada Lovelace"));
    assert_eq!(out.get_path("kind"), Value::from("person"));
}

#[test]
fn from_set_translates_codes() {
    let names = obj(r#"{"us":"United States","fr":"France"}"#);
    let t = prop("country").from_set(names);
    assert_eq!(t.apply(&obj(r#"{"country":"fr"}"#)), Value::from("France"));
    assert_eq!(t.apply(&obj(r#"{"country":"xx"}"#)), Value::Undefined);
}

#[test]
fn unknown_operator_degrades_through_the_chain() {
    let t = prop("a").op("<>", 1).op("+", 1);
    match t.apply(&obj(r#"{"a":1}"#)) {
        Value::Float64(f) => assert!(f.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
    assert_eq!(prop("a").op("<>", 1).apply(&obj(r#"{"a":1}"#)), Value::Undefined);
}

#[test]
fn custom_operator() {
    let shout = Operator::custom(|v| Value::from(v.to_string().to_uppercase()));
    assert_eq!(prop("w").op(shout, Operand::UseItem).apply(&obj(r#"{"w":"hi"}"#)), Value::from("HI"));
}

#[test]
fn same_transform_same_result() {
    let t = prop("a").op("*", 2).in_set(obj("[2,4,6]"));
    let v = obj(r#"{"a":2}"#);
    let first = t.apply(&v);
    assert_eq!(first, Value::Bool(true));
    for _ in 0..10 {
        assert_eq!(t.apply(&v), first);
    }
}
