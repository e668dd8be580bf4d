//! Transforms and the combinators that build them.
//!
//! A [`Transform`] is a shared, immutable function of `(item, index, original)`:
//!
//! - `item` is the value being transformed,
//! - `index` is the positional index in map/filter (or the next element in reductions),
//! - `original` is the value that was fed into the previous link of a chain.
//!
//! Combinator constructors ([`prop`], [`op`], [`in_set`], ...) return a [`FullTransform`].
//! Both [`FullTransform`] and [`ChainableTransform`] implement [`Chain`], so further
//! combinators can be appended fluently; only a [`FullTransform`] additionally offers
//! [`FullTransform::not`] and [`FullTransform::index`].
//!
//! ```rust
//! use rust_array_manip::transform::{prop, Chain};
//! use rust_array_manip::types::Value;
//!
//! let record: Value = [("a", Value::Int64(10))].into_iter().collect();
//! let big = prop("a").op(">", 5);
//! assert_eq!(big.apply(&record), Value::Bool(true));
//! assert_eq!(big.not().apply(&record), Value::Bool(false));
//! ```

mod chain;
pub mod combinators;
mod operator;

use std::fmt;
use std::sync::Arc;

use crate::types::Value;

pub use chain::{Chain, ChainableTransform, FullTransform};
pub use combinators::{and, from_set, in_set, index, is, item, not, op, or, prop, to_arr, to_obj};
pub use operator::Operator;

type TransformFn = dyn Fn(&Value, &Value, &Value) -> Value + Send + Sync;

/// Shared transform function.
///
/// Cloning is cheap (reference-counted); a transform never changes after construction.
#[derive(Clone)]
pub struct Transform {
    func: Arc<TransformFn>,
}

impl Transform {
    /// Wrap a `(item, index, original)` function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value, &Value, &Value) -> Value + Send + Sync + 'static,
    {
        Self { func: Arc::new(func) }
    }

    /// Invoke with all three arguments.
    pub fn call(&self, item: &Value, index: &Value, original: &Value) -> Value {
        (self.func)(item, index, original)
    }

    /// Invoke on a lone item; the index slot is undefined and the item is its own original.
    pub fn apply(&self, item: &Value) -> Value {
        self.call(item, &Value::Undefined, item)
    }

    /// Invoke on an item at a position in a sequence.
    pub fn apply_at(&self, item: &Value, index: usize) -> Value {
        self.call(item, &Value::from(index), item)
    }

    /// `next` applied to this transform's output, with this transform's input as the
    /// `original` of the next link.
    pub(crate) fn then(&self, next: Transform) -> Transform {
        let base = self.clone();
        Transform::new(move |item, index, original| {
            let out = base.call(item, index, original);
            next.call(&out, index, item)
        })
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

impl AsRef<Transform> for Transform {
    fn as_ref(&self) -> &Transform {
        self
    }
}

/// Right-hand side of [`op`].
#[derive(Debug, Clone)]
pub enum Operand {
    /// A fixed value.
    Literal(Value),
    /// Computed from the original (pre-chain) item, e.g. another property of the same record.
    Derived(Transform),
    /// Whatever arrives in the index slot: the position in a map, the next element in a reduction.
    UseItem,
}

/// One output slot of [`to_arr`] / [`to_obj`].
#[derive(Debug, Clone)]
pub enum Slot {
    /// The item itself.
    Item,
    /// A fixed value.
    Literal(Value),
    /// The result of a transform applied to the item.
    Map(Transform),
}

impl Slot {
    pub(crate) fn resolve(&self, item: &Value, index: &Value) -> Value {
        match self {
            Slot::Item => item.clone(),
            Slot::Literal(v) => v.clone(),
            Slot::Map(t) => t.call(item, index, item),
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        if v.is_nullish() {
            Operand::UseItem
        } else {
            Operand::Literal(v)
        }
    }
}

impl From<Value> for Slot {
    fn from(v: Value) -> Self {
        if v.is_nullish() {
            Slot::Item
        } else {
            Slot::Literal(v)
        }
    }
}

/// No operand: `op("abs", ())` reads like the one-argument form.
impl From<()> for Operand {
    fn from(_: ()) -> Self {
        Operand::UseItem
    }
}

impl From<()> for Slot {
    fn from(_: ()) -> Self {
        Slot::Item
    }
}

macro_rules! literal_from {
    ($target:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for $target {
                fn from(v: $ty) -> Self {
                    $target::from(Value::from(v))
                }
            }
        )+
    };
}

literal_from!(Operand: bool, i32, i64, usize, f64, &str, String);
literal_from!(Slot: bool, i32, i64, usize, f64, &str, String);

macro_rules! transform_from {
    ($target:ident, $variant:ident) => {
        impl From<Transform> for $target {
            fn from(t: Transform) -> Self {
                $target::$variant(t)
            }
        }

        impl From<FullTransform> for $target {
            fn from(t: FullTransform) -> Self {
                $target::$variant(t.into())
            }
        }

        impl From<ChainableTransform> for $target {
            fn from(t: ChainableTransform) -> Self {
                $target::$variant(t.into())
            }
        }
    };
}

transform_from!(Operand, Derived);
transform_from!(Slot, Map);
