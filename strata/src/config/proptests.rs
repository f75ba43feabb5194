//! Property-based tests for configuration merging.

use super::ini::ConfigTree;
use super::merger::ConfigMerger;
use proptest::prelude::*;
use serde_json::Value;

// Small key alphabet so generated trees overlap often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        "[a-z0-9]{0,8}".prop_map(Value::String),
        prop::collection::vec("[a-z]{1,4}".prop_map(Value::String), 0..4).prop_map(Value::Array),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 32, 4, |inner| {
        prop::collection::btree_map(key_strategy(), inner, 0..4)
            .prop_map(|map| Value::Object(map.into_iter().collect()))
    })
}

fn tree_strategy() -> impl Strategy<Value = ConfigTree> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 0..5)
        .prop_map(|map| map.into_iter().collect())
}

// Walks `high` and checks every leaf it holds is present in `merged`
fn assert_high_wins(merged: &ConfigTree, high: &ConfigTree) -> Result<(), TestCaseError> {
    for (key, value) in high {
        let merged_value = merged.get(key);
        prop_assert!(merged_value.is_some(), "key {} lost", key);
        match (merged_value, value) {
            (Some(Value::Object(m)), Value::Object(h)) => assert_high_wins(m, h)?,
            (Some(m), h) => prop_assert_eq!(m, h),
            (None, _) => unreachable!(),
        }
    }
    Ok(())
}

fn assert_keys_kept(merged: &ConfigTree, low: &ConfigTree) -> Result<(), TestCaseError> {
    for (key, value) in low {
        prop_assert!(merged.contains_key(key), "key {} deleted", key);
        if let (Some(Value::Object(m)), Value::Object(l)) = (merged.get(key), value) {
            assert_keys_kept(m, l)?;
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every value in the later tree appears in the result
    #[test]
    fn merge_later_tree_wins(low in tree_strategy(), high in tree_strategy()) {
        let merged = ConfigMerger::merge([low, high.clone()]);
        assert_high_wins(&merged, &high)?;
    }

    // Keys of the earlier tree are never removed
    #[test]
    fn merge_never_deletes_keys(low in tree_strategy(), high in tree_strategy()) {
        let merged = ConfigMerger::merge([low.clone(), high]);
        assert_keys_kept(&merged, &low)?;
    }

    // Empty tree is identity on both sides
    #[test]
    fn merge_identity(tree in tree_strategy()) {
        prop_assert_eq!(&ConfigMerger::merge([tree.clone(), ConfigTree::new()]), &tree);
        prop_assert_eq!(&ConfigMerger::merge([ConfigTree::new(), tree.clone()]), &tree);
    }

    // Merging a tree with itself changes nothing
    #[test]
    fn merge_idempotent(tree in tree_strategy()) {
        prop_assert_eq!(ConfigMerger::merge([tree.clone(), tree.clone()]), tree);
    }
}
