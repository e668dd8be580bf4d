//! Element mapping for in-memory sequences.

use crate::transform::Transform;
use crate::types::Value;

/// Returns a new sequence by applying `transform` to every element.
///
/// Each element is passed as `(item, position, item)`.
pub fn map<T>(items: &[Value], transform: &T) -> Vec<Value>
where
    T: AsRef<Transform> + ?Sized,
{
    let transform = transform.as_ref();
    items
        .iter()
        .enumerate()
        .map(|(i, item)| transform.apply_at(item, i))
        .collect()
}
