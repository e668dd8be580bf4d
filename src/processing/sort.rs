//! Sort comparators built from transforms.

use std::cmp::{Ordering, Reverse};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::transform::{ChainableTransform, FullTransform, Transform, prop};
use crate::types::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest key first.
    #[default]
    Increasing,
    /// Largest key first.
    Decreasing,
}

impl FromStr for Direction {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inc" | "increasing" | "asc" => Ok(Direction::Increasing),
            "dec" | "decreasing" | "desc" => Ok(Direction::Decreasing),
            _ => Err(TransformError::UnknownDirection {
                direction: s.to_string(),
            }),
        }
    }
}

/// What a [`Comparator`] compares.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Compare the transform's output for each element.
    Transform(Transform),
    /// Compare a (dot path) property of each element.
    Path(String),
    /// Compare the elements themselves as text.
    Alpha,
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        if s == "alpha" {
            SortKey::Alpha
        } else {
            SortKey::Path(s.to_string())
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::from(s.as_str())
    }
}

impl From<Transform> for SortKey {
    fn from(t: Transform) -> Self {
        SortKey::Transform(t)
    }
}

impl From<FullTransform> for SortKey {
    fn from(t: FullTransform) -> Self {
        SortKey::Transform(t.into())
    }
}

impl From<ChainableTransform> for SortKey {
    fn from(t: ChainableTransform) -> Self {
        SortKey::Transform(t.into())
    }
}

#[derive(Debug, Clone)]
enum Mode {
    Keyed(Transform),
    Alpha,
}

/// Two-argument ordering derived from a [`SortKey`] and a [`Direction`].
#[derive(Debug, Clone)]
pub struct Comparator {
    mode: Mode,
    direction: Direction,
}

/// Build a comparator.
///
/// Paths go through [`prop`] (an empty path compares the elements themselves). Keys are
/// ranked numbers first, then strings, then everything without a numeric value (`NaN`,
/// undefined, arrays and objects). Numbers compare numerically, strings
/// lexicographically, and the last rank keeps input order. [`SortKey::Alpha`] compares
/// elements case-insensitively as text.
///
/// ```rust
/// use rust_array_manip::processing::{by, Direction};
/// use rust_array_manip::types::Value;
///
/// let mut names = vec![Value::from("bob"), Value::from("Alice"), Value::from("carol")];
/// by("alpha", Direction::Decreasing).sort(&mut names);
/// assert_eq!(names[0], Value::from("carol"));
/// ```
pub fn by(key: impl Into<SortKey>, direction: impl Into<Option<Direction>>) -> Comparator {
    let mode = match key.into() {
        SortKey::Transform(t) => Mode::Keyed(t),
        SortKey::Path(path) => Mode::Keyed(prop(path.as_str()).into()),
        SortKey::Alpha => Mode::Alpha,
    };
    Comparator {
        mode,
        direction: direction.into().unwrap_or_default(),
    }
}

impl Comparator {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ord = match &self.mode {
            Mode::Keyed(key) => key_order(&key.apply(a), &key.apply(b)),
            Mode::Alpha => alpha_compare(a, b),
        };
        match self.direction {
            Direction::Increasing => ord,
            Direction::Decreasing => ord.reverse(),
        }
    }

    /// Stable in-place sort. Keys are computed once per element.
    pub fn sort(&self, items: &mut [Value]) {
        match (&self.mode, self.direction) {
            (Mode::Keyed(key), Direction::Increasing) => {
                items.sort_by_cached_key(|v| OrderKey(key.apply(v)));
            }
            (Mode::Keyed(key), Direction::Decreasing) => {
                items.sort_by_cached_key(|v| Reverse(OrderKey(key.apply(v))));
            }
            (Mode::Alpha, _) => items.sort_by(|a, b| self.compare(a, b)),
        }
    }
}

/// Where a key falls in the sort order.
enum Rank<'a> {
    /// Numeric value, variant tag (floats before integers on a tie) and exact integer.
    Number(f64, u8, i64),
    Text(&'a str),
    Unordered,
}

impl Rank<'_> {
    fn of(v: &Value) -> Rank<'_> {
        match v {
            Value::Utf8(s) => Rank::Text(s.as_str()),
            Value::Int64(n) => Rank::Number(*n as f64, 1, *n),
            other => match other.to_number() {
                n if n.is_nan() => Rank::Unordered,
                n => Rank::Number(n, 0, 0),
            },
        }
    }

    fn tier(&self) -> u8 {
        match self {
            Rank::Number(..) => 0,
            Rank::Text(_) => 1,
            Rank::Unordered => 2,
        }
    }
}

/// Total order over sort keys.
fn key_order(a: &Value, b: &Value) -> Ordering {
    match (Rank::of(a), Rank::of(b)) {
        (Rank::Number(x, xt, xi), Rank::Number(y, yt, yi)) => x
            .partial_cmp(&y)
            .unwrap_or(Ordering::Equal)
            .then(xt.cmp(&yt))
            .then(xi.cmp(&yi)),
        (Rank::Text(x), Rank::Text(y)) => x.cmp(y),
        (x, y) => x.tier().cmp(&y.tier()),
    }
}

struct OrderKey(Value);

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        key_order(&self.0, &other.0)
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}

/// Case-insensitive text order; on a tie lowercase sorts first, so `"a" < "b" < "B"`.
fn alpha_compare(a: &Value, b: &Value) -> Ordering {
    let (a, b) = (a.to_string(), b.to_string());
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(&a))
}

/// Returns a sorted copy of `items`.
pub fn sort(items: &[Value], comparator: &Comparator) -> Vec<Value> {
    let mut out = items.to_vec();
    comparator.sort(&mut out);
    out
}
