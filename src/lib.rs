//! `rust-array-manip` turns common array manipulations into readable single expressions.
//!
//! Instead of writing a closure for every `map`/`filter`/`sort`/`reduce`, you build a
//! [`transform::Transform`] from small combinators and chain them fluently:
//!
//! ```rust
//! use rust_array_manip::prelude::*;
//!
//! let items = parse_json_array(r#"[
//!     {"name": "Ada",   "age": 36, "team": "core"},
//!     {"name": "Grace", "age": 85, "team": "infra"},
//!     {"name": "Linus", "age": 21, "team": "core"}
//! ]"#).unwrap();
//!
//! // items.filter(x => x.team == "core").map(x => x.name)
//! let core = filter(&items, &prop("team").is("core"));
//! assert_eq!(map(&core, &prop("name")), vec![Value::from("Ada"), Value::from("Linus")]);
//!
//! // items.sort((a, b) => b.age - a.age)
//! let by_age = sort(&items, &by("age", Direction::Decreasing));
//! assert_eq!(by_age[0].get_path("name"), Value::from("Grace"));
//!
//! // index of the youngest
//! assert_eq!(min_index(prop("age")).reduce(&items), Some(2));
//! ```
//!
//! ## Combinators
//!
//! | name | builds |
//! |---|---|
//! | [`prop`](transform::prop) | nested property lookup by dot path (empty path = identity) |
//! | [`from_set`](transform::from_set) | lookup of the item as a key into a collection |
//! | [`in_set`](transform::in_set) | membership test |
//! | [`is`](transform::is) | loose equality test |
//! | [`op`](transform::op) | `item <op> operand` for `> >= < <= == != + - * ^ / abs min max` or a custom function |
//! | [`index`](transform::index) | the element's position |
//! | [`not`](transform::not), [`and`](transform::and), [`or`](transform::or) | boolean logic |
//! | [`to_arr`](transform::to_arr), [`to_obj`](transform::to_obj) | projections into arrays / objects |
//! | [`item`](transform::item) | identity |
//!
//! Every combinator can also be chained onto an existing transform through
//! [`transform::Chain`]; `not` and `index` are only chainable on a
//! [`transform::FullTransform`].
//!
//! Malformed input never panics or errors: a missing property or an unknown operator yields
//! [`types::Value::Undefined`], which then flows through the rest of the chain.
//!
//! ## Modules
//!
//! - [`types`]: the untyped [`types::Value`] model
//! - [`transform`]: transforms, combinators and chaining
//! - [`processing`]: map/filter/sort/reduce over `&[Value]`, sort comparators, min-index reducer
//! - [`execution`]: map/filter/sort/reduce runs reported to observers, with per-run metrics
//! - [`json`]: conversions between [`types::Value`] and JSON
//! - [`error`]: error types for the strict (opt-in) parsers and the JSON bridge

pub mod error;
pub mod execution;
pub mod json;
pub mod processing;
pub mod transform;
pub mod types;

pub use error::{TransformError, TransformResult};

/// Everything needed for typical single-expression pipelines.
pub mod prelude {
    pub use crate::json::{parse_json, parse_json_array};
    pub use crate::processing::{
        Comparator, Direction, MinIndex, ReduceOp, by, filter, map, min_index, reduce, reduce_op,
        sort,
    };
    pub use crate::transform::{
        Chain, ChainableTransform, FullTransform, Operand, Operator, Slot, Transform, and,
        from_set, in_set, index, is, item, not, op, or, prop, to_arr, to_obj,
    };
    pub use crate::types::Value;
}
