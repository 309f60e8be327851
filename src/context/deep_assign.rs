//! Recursive partial-override merge over JSON values.

#[cfg(test)]
#[path = "deep_assign_test.rs"]
mod deep_assign_test;

use serde_json::Value;

/// Merge `source` into `target` in place.
///
/// For every key in `source`: when both sides hold an object the merge
/// recurses, otherwise the target slot is overwritten (or inserted). Keys
/// missing from `source` are left alone. Arrays are leaves and are replaced
/// wholesale.
pub fn deep_assign(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(key) {
                    Some(slot) => deep_assign(slot, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}
