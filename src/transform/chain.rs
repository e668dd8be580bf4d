//! Fluent chaining.
//!
//! `f.op(">", 5)` builds a new transform computing `op(">", 5)(f(item, i, orig), i, item)`.
//! Neither side is modified; every call returns a fresh transform.

use crate::types::Value;

use super::{Operand, Operator, Slot, Transform, combinators};

/// Combinators that can be appended to any transform.
pub trait Chain {
    /// The underlying transform.
    fn transform(&self) -> &Transform;

    fn call(&self, item: &Value, index: &Value, original: &Value) -> Value {
        self.transform().call(item, index, original)
    }

    fn apply(&self, item: &Value) -> Value {
        self.transform().apply(item)
    }

    fn apply_at(&self, item: &Value, index: usize) -> Value {
        self.transform().apply_at(item, index)
    }

    /// Append an arbitrary transform.
    fn then(&self, next: impl Into<Transform>) -> FullTransform {
        FullTransform(self.transform().then(next.into()))
    }

    fn prop<'a>(&self, path: impl Into<Option<&'a str>>) -> FullTransform {
        self.then(combinators::prop(path))
    }

    fn from_set(&self, collection: impl Into<Value>) -> FullTransform {
        self.then(combinators::from_set(collection))
    }

    fn in_set(&self, collection: impl Into<Value>) -> FullTransform {
        self.then(combinators::in_set(collection))
    }

    fn is(&self, value: impl Into<Value>) -> FullTransform {
        self.then(combinators::is(value))
    }

    fn op(&self, operator: impl Into<Operator>, operand: impl Into<Operand>) -> FullTransform {
        self.then(combinators::op(operator, operand))
    }

    fn to_arr<I>(&self, slots: I) -> FullTransform
    where
        I: IntoIterator,
        I::Item: Into<Slot>,
    {
        self.then(combinators::to_arr(slots))
    }

    fn to_obj<I, K, S>(&self, slots: I) -> FullTransform
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<Slot>,
    {
        self.then(combinators::to_obj(slots))
    }
}

/// A transform exposing the whole chain surface, including [`not`](Self::not) and
/// [`index`](Self::index).
#[derive(Debug, Clone)]
pub struct FullTransform(Transform);

/// A transform that only accepts parameterized chain links.
///
/// Produced by [`FullTransform::not`] and [`FullTransform::index`]. Parameterized links are
/// still available, and they return a [`FullTransform`] again:
///
/// ```rust
/// use rust_array_manip::transform::{is, Chain};
/// use rust_array_manip::types::Value;
///
/// let t = is(3).not().is(false).not();
/// assert_eq!(t.apply(&Value::Int64(4)), Value::Bool(true));
/// assert_eq!(t.apply(&Value::Int64(3)), Value::Bool(false));
/// ```
///
/// `not` and `index` cannot be chained directly:
///
/// ```compile_fail
/// use rust_array_manip::transform::{is, Chain};
///
/// let _ = is(3).not().not();
/// ```
///
/// ```compile_fail
/// use rust_array_manip::transform::{prop, Chain};
///
/// let _ = prop("a").index().index();
/// ```
#[derive(Debug, Clone)]
pub struct ChainableTransform(Transform);

impl FullTransform {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value, &Value, &Value) -> Value + Send + Sync + 'static,
    {
        Self(Transform::new(func))
    }

    /// Negate this transform's result.
    pub fn not(&self) -> ChainableTransform {
        ChainableTransform(self.0.then(combinators::not().into()))
    }

    /// Replace this transform's result by the index slot.
    pub fn index(&self) -> ChainableTransform {
        ChainableTransform(self.0.then(combinators::index().into()))
    }
}

impl Chain for FullTransform {
    fn transform(&self) -> &Transform {
        &self.0
    }
}

impl Chain for ChainableTransform {
    fn transform(&self) -> &Transform {
        &self.0
    }
}

impl From<FullTransform> for Transform {
    fn from(t: FullTransform) -> Self {
        t.0
    }
}

impl From<ChainableTransform> for Transform {
    fn from(t: ChainableTransform) -> Self {
        t.0
    }
}

impl From<Transform> for FullTransform {
    fn from(t: Transform) -> Self {
        Self(t)
    }
}

impl AsRef<Transform> for FullTransform {
    fn as_ref(&self) -> &Transform {
        &self.0
    }
}

impl AsRef<Transform> for ChainableTransform {
    fn as_ref(&self) -> &Transform {
        &self.0
    }
}
