use serde_json::{Map, Value};

use crate::error::NormalizeResult;
use crate::tree::check_depth;
use crate::{ANNOTATION_KEYS, PROPERTIES_KEY};

/// Give every mapping stored under an annotation key an empty `properties`.
///
/// Any existing `properties` value is replaced. Values under an annotation
/// key that are not mappings (scalars, null, sequences) are left as they
/// are; sequences are still searched for nested annotation keys.
pub fn annotate(node: &mut Value) -> NormalizeResult<&mut Value> {
    mark(node, 0, &mut 0)?;
    Ok(node)
}

pub(crate) fn mark(node: &mut Value, depth: usize, annotated: &mut usize) -> NormalizeResult<()> {
    check_depth(depth)?;

    match node {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                mark(value, depth + 1, annotated)?;

                if !is_annotation_key(key) {
                    continue;
                }
                if let Value::Object(target) = value {
                    target.insert(PROPERTIES_KEY.to_string(), Value::Object(Map::new()));
                    *annotated += 1;
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                mark(item, depth + 1, annotated)?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }

    Ok(())
}

fn is_annotation_key(key: &str) -> bool {
    ANNOTATION_KEYS.contains(&key)
}
