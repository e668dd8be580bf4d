//! Reductions over in-memory sequences.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::transform::{ChainableTransform, FullTransform, Transform, item};
use crate::types::Value;

/// Fold `items` with a transform.
///
/// The transform is called as `(accumulator, next, accumulator)`: the index slot carries the
/// next element, which is what [`crate::transform::Operand::UseItem`] reads. Without `init`
/// the first element seeds the fold and an empty sequence yields `None`.
///
/// ```rust
/// use rust_array_manip::processing::reduce;
/// use rust_array_manip::transform::{op, Operand};
/// use rust_array_manip::types::Value;
///
/// let items = vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)];
/// assert_eq!(reduce(&items, &op("+", Operand::UseItem), None), Some(Value::Int64(6)));
/// assert_eq!(reduce(&items, &op("max", Operand::UseItem), None), Some(Value::Int64(3)));
/// ```
pub fn reduce<T>(items: &[Value], transform: &T, init: Option<Value>) -> Option<Value>
where
    T: AsRef<Transform> + ?Sized,
{
    let transform = transform.as_ref();
    let (seed, rest) = match init {
        Some(seed) => (seed, items),
        None => {
            let (first, rest) = items.split_first()?;
            (first.clone(), rest)
        }
    };
    Some(
        rest.iter()
            .fold(seed, |acc, next| transform.call(&acc, next, &acc)),
    )
}

/// Built-in reductions over a transform's outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReduceOp {
    /// Count all elements (including nulls).
    Count,
    /// Sum numeric outputs, ignoring everything else.
    Sum,
    /// Minimum numeric output.
    Min,
    /// Maximum numeric output.
    Max,
}

/// Reduce the outputs of `transform` over `items` using a built-in [`ReduceOp`].
///
/// - `Count` always returns `Int64(items.len())`.
/// - `Sum`/`Min`/`Max` skip non-numeric outputs and return [`Value::Null`] if none remain.
///   Integer inputs stay integers unless a sum overflows.
pub fn reduce_op<T>(items: &[Value], transform: &T, op: ReduceOp) -> Value
where
    T: AsRef<Transform> + ?Sized,
{
    let transform = transform.as_ref();
    if op == ReduceOp::Count {
        return Value::from(items.len());
    }

    let mut acc: Option<Value> = None;
    for (i, item) in items.iter().enumerate() {
        let v = transform.apply_at(item, i);
        if !v.is_number() {
            continue;
        }
        acc = Some(match acc {
            None => v,
            Some(a) => combine(op, a, v),
        });
    }
    acc.unwrap_or(Value::Null)
}

fn combine(op: ReduceOp, a: Value, b: Value) -> Value {
    match op {
        ReduceOp::Sum => match (&a, &b) {
            (Value::Int64(x), Value::Int64(y)) => x
                .checked_add(*y)
                .map(Value::Int64)
                .unwrap_or(Value::Float64(*x as f64 + *y as f64)),
            _ => Value::Float64(a.to_number() + b.to_number()),
        },
        ReduceOp::Min => match a.partial_compare(&b) {
            Some(Ordering::Greater) => b,
            _ => a,
        },
        ReduceOp::Max => match a.partial_compare(&b) {
            Some(Ordering::Less) => b,
            _ => a,
        },
        ReduceOp::Count => unreachable!("count handled before folding"),
    }
}

/// Reducer tracking the position of the smallest element.
///
/// Elements are compared by a transform (identity by default) with the `<` ordering.
#[derive(Debug, Clone)]
pub struct MinIndex {
    compare: Transform,
}

/// Build a [`MinIndex`] reducer comparing elements by `compare`.
pub fn min_index(compare: impl Into<Transform>) -> MinIndex {
    MinIndex {
        compare: compare.into(),
    }
}

impl Default for MinIndex {
    fn default() -> Self {
        min_index(item())
    }
}

impl MinIndex {
    /// One fold step: returns the new best position given the current best.
    ///
    /// At position 1 the running best is reset to 0, so a seed other than 0 is harmless.
    /// A best position that is out of range or points at a null element is replaced.
    pub fn step(&self, best: usize, item: &Value, i: usize, list: &[Value]) -> usize {
        let best = if i == 1 { 0 } else { best };
        match list.get(best) {
            None => i,
            Some(current) if current.is_nullish() => i,
            Some(current) => {
                let candidate = self.compare.apply(item);
                let incumbent = self.compare.apply(current);
                if candidate.partial_compare(&incumbent) == Some(Ordering::Less) {
                    i
                } else {
                    best
                }
            }
        }
    }

    /// Position of the first minimum, or `None` for an empty sequence.
    pub fn reduce(&self, list: &[Value]) -> Option<usize> {
        if list.is_empty() {
            return None;
        }
        Some(
            list.iter()
                .enumerate()
                .skip(1)
                .fold(0, |best, (i, item)| self.step(best, item, i, list)),
        )
    }
}

impl From<FullTransform> for MinIndex {
    fn from(t: FullTransform) -> Self {
        min_index(t)
    }
}

impl From<ChainableTransform> for MinIndex {
    fn from(t: ChainableTransform) -> Self {
        min_index(t)
    }
}
