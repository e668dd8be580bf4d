//! Combinator constructors.
//!
//! Each constructor returns a [`FullTransform`] so the result can be chained further
//! (see [`super::Chain`]).

use std::borrow::Cow;

use crate::types::{Object, Value};

use super::{FullTransform, Operand, Operator, Slot, Transform};

/// Identity transform; the default base of every chain.
pub fn item() -> FullTransform {
    FullTransform::new(|item, _, _| item.clone())
}

/// Nested property lookup by dot path.
///
/// An empty or `None` path returns the identity transform. Missing intermediates yield
/// [`Value::Undefined`].
pub fn prop<'a>(path: impl Into<Option<&'a str>>) -> FullTransform {
    match path.into() {
        None | Some("") => item(),
        Some(path) => {
            let path = path.to_string();
            FullTransform::new(move |item, _, _| item.get_path(&path))
        }
    }
}

/// Inverse of [`prop`]: the item is the key (or dot path) into `collection`.
pub fn from_set(collection: impl Into<Value>) -> FullTransform {
    let collection = collection.into();
    FullTransform::new(move |item, _, _| collection.get_path(&item.to_string()))
}

/// Membership test.
///
/// For an array, true when some element strictly equals the item. For any other
/// collection, true when the item (as a key) maps to a non-null value.
pub fn in_set(collection: impl Into<Value>) -> FullTransform {
    let collection = collection.into();
    FullTransform::new(move |item, _, _| {
        let found = match &collection {
            Value::Array(items) => items.iter().any(|v| v.strict_eq(item)),
            other => other
                .get(&item.to_string())
                .is_some_and(|v| !v.is_nullish()),
        };
        Value::Bool(found)
    })
}

/// Loose equality against a fixed value.
pub fn is(value: impl Into<Value>) -> FullTransform {
    let value = value.into();
    FullTransform::new(move |item, _, _| Value::Bool(item.loose_eq(&value)))
}

/// Apply `item <operator> operand`.
///
/// [`Operand::Derived`] is evaluated against the original item of the chain link, which
/// lets a derived value be compared with another property of the same record.
/// [`Operand::UseItem`] takes whatever sits in the index slot; in [`crate::processing::reduce`]
/// that is the next element, so `op("+", Operand::UseItem)` sums a sequence. Unary operators
/// take `()` as their operand: `op("abs", ())`.
pub fn op(operator: impl Into<Operator>, operand: impl Into<Operand>) -> FullTransform {
    let operator = operator.into();
    let operand = operand.into();
    FullTransform::new(move |item, second, original| {
        let other = match &operand {
            Operand::Literal(v) => Cow::Borrowed(v),
            Operand::Derived(t) => Cow::Owned(t.apply(original)),
            Operand::UseItem => Cow::Borrowed(second),
        };
        operator.apply(item, &other)
    })
}

/// Yields the index slot.
pub fn index() -> FullTransform {
    FullTransform::new(|_, index, _| index.clone())
}

/// Boolean negation of the item's truthiness.
pub fn not() -> FullTransform {
    FullTransform::new(|item, _, _| Value::Bool(!item.is_truthy()))
}

/// True when every transform is truthy on the item.
pub fn and<I>(transforms: I) -> FullTransform
where
    I: IntoIterator,
    I::Item: Into<Transform>,
{
    let transforms: Vec<Transform> = transforms.into_iter().map(Into::into).collect();
    FullTransform::new(move |item, index, _| {
        Value::Bool(transforms.iter().all(|t| t.call(item, index, item).is_truthy()))
    })
}

/// True when any transform is truthy on the item.
pub fn or<I>(transforms: I) -> FullTransform
where
    I: IntoIterator,
    I::Item: Into<Transform>,
{
    let transforms: Vec<Transform> = transforms.into_iter().map(Into::into).collect();
    FullTransform::new(move |item, index, _| {
        Value::Bool(transforms.iter().any(|t| t.call(item, index, item).is_truthy()))
    })
}

/// Project the item into an array, one element per slot.
pub fn to_arr<I>(slots: I) -> FullTransform
where
    I: IntoIterator,
    I::Item: Into<Slot>,
{
    let slots: Vec<Slot> = slots.into_iter().map(Into::into).collect();
    FullTransform::new(move |item, index, _| {
        Value::Array(slots.iter().map(|slot| slot.resolve(item, index)).collect())
    })
}

/// Project the item into an object, one key per slot.
pub fn to_obj<I, K, S>(slots: I) -> FullTransform
where
    I: IntoIterator<Item = (K, S)>,
    K: Into<String>,
    S: Into<Slot>,
{
    let slots: Vec<(String, Slot)> = slots
        .into_iter()
        .map(|(k, s)| (k.into(), s.into()))
        .collect();
    FullTransform::new(move |item, index, _| {
        let out: Object = slots
            .iter()
            .map(|(key, slot)| (key.clone(), slot.resolve(item, index)))
            .collect();
        Value::Object(out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Chain;

    fn record(pairs: &[(&str, Value)]) -> Value {
        pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
    }

    #[test]
    fn prop_with_empty_path_is_identity() {
        for v in [
            Value::Int64(3),
            Value::from("s"),
            Value::Undefined,
            record(&[("a", Value::Int64(1))]),
        ] {
            assert_eq!(prop("").apply(&v), v);
            assert_eq!(prop(None).apply(&v), v);
            assert_eq!(item().apply(&v), v);
        }
    }

    #[test]
    fn prop_reads_nested_paths() {
        let v = record(&[("a", record(&[("b", Value::Int64(5))]))]);
        assert_eq!(prop("a.b").apply(&v), Value::Int64(5));

        let with_null = record(&[("a", Value::Null)]);
        assert_eq!(prop("a.b").apply(&with_null), Value::Undefined);
        assert_eq!(prop("x.y.z").apply(&Value::Int64(1)), Value::Undefined);
    }

    #[test]
    fn from_set_uses_item_as_key() {
        let lookup = record(&[("red", Value::from("#f00")), ("blue", Value::from("#00f"))]);
        let color = from_set(lookup);
        assert_eq!(color.apply(&Value::from("red")), Value::from("#f00"));
        assert_eq!(color.apply(&Value::from("green")), Value::Undefined);

        let names = from_set(vec![Value::from("zero"), Value::from("one")]);
        assert_eq!(names.apply(&Value::Int64(1)), Value::from("one"));
    }

    #[test]
    fn in_set_on_arrays_and_objects() {
        let small = in_set(vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]);
        assert_eq!(small.apply(&Value::Int64(2)), Value::Bool(true));
        assert_eq!(small.apply(&Value::Int64(9)), Value::Bool(false));
        assert_eq!(small.apply(&Value::from("2")), Value::Bool(false));

        let keys = in_set(record(&[("a", Value::Int64(0)), ("b", Value::Null)]));
        assert_eq!(keys.apply(&Value::from("a")), Value::Bool(true));
        assert_eq!(keys.apply(&Value::from("b")), Value::Bool(false));
        assert_eq!(keys.apply(&Value::from("c")), Value::Bool(false));

        assert_eq!(in_set(Value::Int64(5)).apply(&Value::Int64(5)), Value::Bool(false));
    }

    #[test]
    fn is_compares_loosely() {
        assert_eq!(is(3).apply(&Value::Int64(3)), Value::Bool(true));
        assert_eq!(is(3).apply(&Value::from("3")), Value::Bool(true));
        assert_eq!(is("x").apply(&Value::from("y")), Value::Bool(false));
    }

    #[test]
    fn op_with_literal_operand() {
        assert_eq!(op("+", 3).apply(&Value::Int64(2)), Value::Int64(5));
        assert_eq!(op("abs", Operand::UseItem).apply(&Value::Int64(-4)), Value::Int64(4));
        assert_eq!(op("??", 1).apply(&Value::Int64(1)), Value::Undefined);
    }

    #[test]
    fn op_with_use_item_reads_the_index_slot() {
        let plus = op("+", Operand::UseItem);
        assert_eq!(
            plus.call(&Value::Int64(10), &Value::Int64(4), &Value::Undefined),
            Value::Int64(14)
        );
    }

    #[test]
    fn op_with_derived_operand_reads_the_original_item() {
        let row = record(&[("spent", Value::Int64(120)), ("budget", Value::Int64(100))]);
        let over_budget = prop("spent").op(">", prop("budget"));
        assert_eq!(over_budget.apply(&row), Value::Bool(true));

        let standalone = op(">", prop("budget"));
        assert_eq!(
            standalone.call(&Value::Int64(50), &Value::Undefined, &row),
            Value::Bool(false)
        );
    }

    #[test]
    fn index_and_not() {
        assert_eq!(index().apply_at(&Value::from("x"), 3), Value::Int64(3));
        assert_eq!(not().apply(&Value::Int64(0)), Value::Bool(true));
        assert_eq!(not().apply(&Value::from("x")), Value::Bool(false));
    }

    #[test]
    fn and_or_combine_truthiness() {
        let positive = op(">", 0);
        let even = Transform::new(|item, _, _| Value::Bool(item.as_i64().is_some_and(|n| n % 2 == 0)));
        let both = and([positive.clone().into(), even.clone()]);
        let either = or([positive.into(), even]);

        for (n, want_and, want_or) in [(4, true, true), (3, false, true), (-2, false, true), (-3, false, false)] {
            let v = Value::Int64(n);
            assert_eq!(both.apply(&v), Value::Bool(want_and), "and({n})");
            assert_eq!(either.apply(&v), Value::Bool(want_or), "or({n})");
        }

        assert_eq!(and(Vec::<Transform>::new()).apply(&Value::Null), Value::Bool(true));
        assert_eq!(or(Vec::<Transform>::new()).apply(&Value::Null), Value::Bool(false));
    }

    #[test]
    fn to_arr_resolves_each_slot() {
        let v = record(&[("a", Value::Int64(1))]);
        let t = to_arr([Slot::from(prop("a")), Slot::Item, Slot::from(7)]);
        assert_eq!(
            t.apply(&v),
            Value::Array(vec![Value::Int64(1), v.clone(), Value::Int64(7)])
        );
    }

    #[test]
    fn to_obj_resolves_each_slot() {
        let v = record(&[("first", Value::from("Ada")), ("born", Value::Int64(1815))]);
        let t = to_obj([
            ("name", Slot::from(prop("first"))),
            ("kind", Slot::from("person")),
            ("raw", Slot::from(Value::Null)),
            ("pos", Slot::from(index())),
        ]);
        let out = t.apply_at(&v, 2);
        assert_eq!(out.get_path("name"), Value::from("Ada"));
        assert_eq!(out.get_path("kind"), Value::from("person"));
        assert_eq!(out.get_path("raw"), v);
        assert_eq!(out.get_path("pos"), Value::Int64(2));
    }
}
