use serde_json::Value;

use crate::error::NormalizeResult;
use crate::tree::check_depth;

/// Remove null values and empty containers from every mapping and sequence.
///
/// Children are cleaned before their parent entry is checked, so a
/// container that only held removable values is itself removed. The node
/// passed in is never removed, even when it ends up empty.
pub fn clean(node: &mut Value) -> NormalizeResult<&mut Value> {
    prune(node, 0, &mut 0)?;
    Ok(node)
}

/// Post-order prune; `pruned` accumulates the number of removed entries.
///
/// Containers are filtered with `retain` once their children are done,
/// which keeps surviving entries in their original order and never skips
/// an element after a removal.
pub(crate) fn prune(node: &mut Value, depth: usize, pruned: &mut usize) -> NormalizeResult<()> {
    check_depth(depth)?;

    match node {
        Value::Object(map) => {
            for value in map.values_mut() {
                prune(value, depth + 1, pruned)?;
            }
            let before = map.len();
            map.retain(|_, value| !is_removable(value));
            *pruned += before - map.len();
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                prune(item, depth + 1, pruned)?;
            }
            let before = items.len();
            items.retain(|item| !is_removable(item));
            *pruned += before - items.len();
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }

    Ok(())
}

/// Null, `{}` and `[]`. Falsy scalars such as `0`, `""` and `false` stay.
fn is_removable(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}
