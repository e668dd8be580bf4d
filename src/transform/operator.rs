//! Operators accepted by [`super::op`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::TransformError;
use crate::types::Value;

type UnaryFn = dyn Fn(&Value) -> Value + Send + Sync;

/// Binary (or unary) operator applied as `item <op> other`.
#[derive(Clone)]
pub enum Operator {
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==` (loose equality)
    Eq,
    /// `!=`
    Ne,
    /// `+` (string concatenation when either side is a string)
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `^` (power)
    Pow,
    /// `/`
    Div,
    /// `abs` (unary; the operand is ignored)
    Abs,
    /// `min`
    Min,
    /// `max`
    Max,
    /// Arbitrary unary function of the item.
    Custom(Arc<UnaryFn>),
    /// An unrecognized symbol. Always evaluates to [`Value::Undefined`].
    Unknown(String),
}

impl Operator {
    /// Wrap a unary function as an operator.
    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Operator::Custom(Arc::new(func))
    }

    /// Symbol as accepted by [`FromStr`].
    pub fn symbol(&self) -> &str {
        match self {
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Pow => "^",
            Operator::Div => "/",
            Operator::Abs => "abs",
            Operator::Min => "min",
            Operator::Max => "max",
            Operator::Custom(_) => "<fn>",
            Operator::Unknown(symbol) => symbol,
        }
    }

    /// Evaluate `item <op> other`.
    pub fn apply(&self, item: &Value, other: &Value) -> Value {
        match self {
            Operator::Gt => relational(item, other, Ordering::is_gt),
            Operator::Ge => relational(item, other, Ordering::is_ge),
            Operator::Lt => relational(item, other, Ordering::is_lt),
            Operator::Le => relational(item, other, Ordering::is_le),
            Operator::Eq => Value::Bool(item.loose_eq(other)),
            Operator::Ne => Value::Bool(!item.loose_eq(other)),
            Operator::Add => add(item, other),
            Operator::Sub => arith(item, other, i64::checked_sub, |a, b| a - b),
            Operator::Mul => arith(item, other, i64::checked_mul, |a, b| a * b),
            Operator::Div => arith(item, other, exact_div, |a, b| a / b),
            Operator::Pow => arith(item, other, int_pow, f64::powf),
            Operator::Abs => abs(item),
            Operator::Min => extremum(item, other, Ordering::is_le),
            Operator::Max => extremum(item, other, Ordering::is_ge),
            Operator::Custom(func) => func(item),
            Operator::Unknown(_) => Value::Undefined,
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Unknown(symbol) => f.debug_tuple("Unknown").field(symbol).finish(),
            other => write!(f, "Operator({})", other.symbol()),
        }
    }
}

impl FromStr for Operator {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Operator::from(s) {
            Operator::Unknown(symbol) => Err(TransformError::UnknownOperator { symbol }),
            known => Ok(known),
        }
    }
}

/// Lenient conversion: unknown symbols become [`Operator::Unknown`].
impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        match s {
            ">" => Operator::Gt,
            ">=" => Operator::Ge,
            "<" => Operator::Lt,
            "<=" => Operator::Le,
            "==" => Operator::Eq,
            "!=" => Operator::Ne,
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "^" => Operator::Pow,
            "/" => Operator::Div,
            "abs" => Operator::Abs,
            "min" => Operator::Min,
            "max" => Operator::Max,
            other => Operator::Unknown(other.to_string()),
        }
    }
}

fn relational(a: &Value, b: &Value, pred: fn(Ordering) -> bool) -> Value {
    Value::Bool(a.partial_compare(b).is_some_and(pred))
}

fn add(a: &Value, b: &Value) -> Value {
    let stringy = |v: &Value| matches!(v, Value::Utf8(_) | Value::Array(_) | Value::Object(_));
    if stringy(a) || stringy(b) {
        Value::Utf8(format!("{a}{b}"))
    } else {
        arith(a, b, i64::checked_add, |x, y| x + y)
    }
}

/// Integer view of values whose numeric form is always integral (`null` is 0, booleans are 0/1).
fn as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Int64(n) => Some(*n),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null => Some(0),
        _ => None,
    }
}

/// Integer arithmetic when both sides are integral and the result is exact and in range,
/// float arithmetic otherwise.
fn arith(
    a: &Value,
    b: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Value {
    if let (Some(x), Some(y)) = (as_int(a), as_int(b)) {
        if let Some(n) = int_op(x, y) {
            return Value::Int64(n);
        }
    }
    Value::Float64(float_op(a.to_number(), b.to_number()))
}

fn exact_div(x: i64, y: i64) -> Option<i64> {
    if x.checked_rem(y)? == 0 {
        x.checked_div(y)
    } else {
        None
    }
}

fn int_pow(base: i64, exp: i64) -> Option<i64> {
    u32::try_from(exp).ok().and_then(|e| base.checked_pow(e))
}

fn abs(v: &Value) -> Value {
    match as_int(v) {
        Some(n) => n
            .checked_abs()
            .map(Value::Int64)
            .unwrap_or(Value::Float64((n as f64).abs())),
        None => Value::Float64(v.to_number().abs()),
    }
}

/// `keep_left(a.cmp(b))` selects `a`; a `NaN` on either side poisons the result.
fn extremum(a: &Value, b: &Value, keep_left: fn(Ordering) -> bool) -> Value {
    if let (Some(x), Some(y)) = (as_int(a), as_int(b)) {
        return Value::Int64(if keep_left(x.cmp(&y)) { x } else { y });
    }
    let (x, y) = (a.to_number(), b.to_number());
    match x.partial_cmp(&y) {
        Some(ord) => Value::Float64(if keep_left(ord) { x } else { y }),
        None => Value::Float64(f64::NAN),
    }
}
