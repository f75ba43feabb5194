//! Deep merging of configuration trees.
//!
//! Trees are merged left to right, so later trees take precedence:
//!
//! - Tables present on both sides are merged recursively.
//! - Every other value (strings, booleans, null, arrays) replaces the target
//!   value wholesale. Arrays are never concatenated or merged by index.
//! - Keys are never removed by a later tree that lacks them.

use serde_json::Value;

use crate::config::ini::ConfigTree;

/// Merges configuration trees according to precedence rules.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strata::config::ConfigMerger;
///
/// let common = json!({"x": 1, "y": {"a": 1}});
/// let local = json!({"y": {"a": 2, "b": 3}});
///
/// let merged = ConfigMerger::merge([
///     common.as_object().unwrap().clone(),
///     local.as_object().unwrap().clone(),
/// ]);
/// assert_eq!(serde_json::Value::Object(merged), json!({"x": 1, "y": {"a": 2, "b": 3}}));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge trees into the first one, lowest precedence first.
    ///
    /// Returns an empty tree if `trees` is empty.
    #[must_use]
    pub fn merge(trees: impl IntoIterator<Item = ConfigTree>) -> ConfigTree {
        let mut trees = trees.into_iter();
        let mut target = trees.next().unwrap_or_default();

        for source in trees {
            Self::merge_into(&mut target, source);
        }

        target
    }

    /// Merge `source` into `target` (source overwrites target).
    pub fn merge_into(target: &mut ConfigTree, source: ConfigTree) {
        for (key, incoming) in source {
            let Value::Object(incoming_table) = incoming else {
                target.insert(key, incoming);
                continue;
            };

            if let Some(Value::Object(existing)) = target.get_mut(&key) {
                Self::merge_into(existing, incoming_table);
                continue;
            }

            target.insert(key, Value::Object(incoming_table));
        }
    }
}
