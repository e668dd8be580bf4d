//! Sequence operations driven by transforms.
//!
//! Transforms describe *what* to compute per element; this layer runs them over fully
//! materialized `&[Value]` sequences.
//!
//! Currently implemented:
//!
//! - [`map()`]: element mapping
//! - [`filter()`]: element filtering by truthiness
//! - [`sort()`] / [`by()`]: comparators from property paths, transforms or text order
//! - [`reduce()`]: folds where the index slot carries the next element
//! - [`reduce_op()`]: common reductions (count/sum/min/max)
//! - [`min_index()`]: position of the smallest element
//!
//! ## Example: filter → map → sort
//!
//! ```rust
//! use rust_array_manip::processing::{by, filter, map, sort, Direction};
//! use rust_array_manip::transform::{prop, Chain};
//! use rust_array_manip::types::Value;
//!
//! let people: Vec<Value> = [("Ada", 36), ("Grace", 85), ("Linus", 21)]
//!     .into_iter()
//!     .map(|(name, age)| {
//!         [("name", Value::from(name)), ("age", Value::Int64(age))]
//!             .into_iter()
//!             .collect::<Value>()
//!     })
//!     .collect();
//!
//! let adults = filter(&people, &prop("age").op(">=", 30));
//! let oldest_first = sort(&adults, &by("age", Direction::Decreasing));
//! let names = map(&oldest_first, &prop("name"));
//! assert_eq!(names, vec![Value::from("Grace"), Value::from("Ada")]);
//! ```

pub mod filter;
pub mod map;
pub mod reduce;
pub mod sort;

pub use filter::filter;
pub use map::map;
pub use reduce::{MinIndex, ReduceOp, min_index, reduce, reduce_op};
pub use sort::{Comparator, Direction, SortKey, by, sort};
