//! Element filtering for in-memory sequences.

use crate::transform::Transform;
use crate::types::Value;

/// Returns the elements for which `predicate` yields a truthy value.
///
/// Each element is passed as `(item, position, item)`.
pub fn filter<T>(items: &[Value], predicate: &T) -> Vec<Value>
where
    T: AsRef<Transform> + ?Sized,
{
    let predicate = predicate.as_ref();
    items
        .iter()
        .enumerate()
        .filter(|(i, item)| predicate.apply_at(item, *i).is_truthy())
        .map(|(_, item)| item.clone())
        .collect()
}
