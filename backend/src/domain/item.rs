//! The todo item entity and its wire contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single todo entry persisted in the `todolist` table.
///
/// ## Invariants
/// - `id` is assigned by storage on insert and never changes afterwards;
///   every persisted id is at least [`Item::MIN_ID`].
/// - `title` is non-empty for items written through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Storage-assigned primary key.
    #[schema(example = 1)]
    pub id: i64,
    /// Short label for the entry.
    #[schema(example = "buy milk")]
    pub title: String,
    /// Free-form detail; omitted from serialized output when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[schema(example = "semi-skimmed")]
    pub description: String,
    /// Whether the entry has been completed.
    pub completed: bool,
}

impl Item {
    /// Lowest identifier storage will ever assign. Lookups below this value
    /// short-circuit to not-found without touching storage.
    pub const MIN_ID: i64 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn sample() -> Item {
        Item {
            id: 1,
            title: "buy milk".to_owned(),
            description: String::new(),
            completed: false,
        }
    }

    #[rstest]
    fn empty_description_is_omitted_from_output() {
        let value = serde_json::to_value(sample()).expect("serialize item");
        assert_eq!(
            value,
            json!({"id": 1, "title": "buy milk", "completed": false})
        );
    }

    #[rstest]
    fn non_empty_description_is_serialized() {
        let item = Item {
            description: "semi-skimmed".to_owned(),
            ..sample()
        };
        let value = serde_json::to_value(item).expect("serialize item");
        assert_eq!(value.get("description"), Some(&json!("semi-skimmed")));
    }

    #[rstest]
    fn missing_description_decodes_to_empty_string() {
        let raw = json!({"id": 7, "title": "walk dog", "completed": true});
        let item: Item = serde_json::from_value(raw).expect("decode item");
        assert_eq!(item.description, "");
        assert!(item.completed);
    }

    #[rstest]
    #[case(json!({"id": 1, "title": "x", "completed": false}), 1)]
    #[case(json!({"id": 9_007_199_254_740_993_i64, "title": "x", "completed": false}), 9_007_199_254_740_993_i64)]
    fn id_round_trips_as_64_bit(#[case] raw: Value, #[case] expected: i64) {
        let item: Item = serde_json::from_value(raw).expect("decode item");
        assert_eq!(item.id, expected);
    }
}
