use proptest::prelude::*;

/// Strategy for generating recognizer names as they appear in configuration
pub fn recognizer_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,31}"
}

/// Strategy for generating sets of distinct recognizer names
pub fn recognizer_names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(recognizer_name_strategy(), 0..16)
        .prop_map(|names| names.into_iter().collect())
}
