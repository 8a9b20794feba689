//! Field-keyed validation accumulator for one request.

use std::collections::BTreeMap;

use crate::domain::Item;

/// Transient accumulator of `field → message` validation failures.
///
/// The first message recorded for a field wins; a second violation of the
/// same field is not distinguished. "Valid" means no field has a message.
#[derive(Debug, Default)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` under `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.errors
                .entry(field.to_owned())
                .or_insert_with(|| message.to_owned());
        }
    }

    /// True iff no field has a recorded message.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the validator, yielding the accumulated failures.
    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// Validation policy applied to decoded and merged items.
///
/// The title must be present. The description may be empty; partial updates
/// of items created without one must keep working.
pub fn validate_item(v: &mut Validator, item: &Item) {
    v.check(!item.title.is_empty(), "title", "must be provided");
    // A decoded bool is always present; placeholder until the flag gets
    // real rules.
    v.check(
        item.completed || !item.completed,
        "completed",
        "must be provided",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(title: &str, description: &str, completed: bool) -> Item {
        Item {
            id: 0,
            title: title.to_owned(),
            description: description.to_owned(),
            completed,
        }
    }

    #[rstest]
    fn new_validator_is_valid() {
        assert!(Validator::new().valid());
    }

    #[rstest]
    fn failed_check_records_message_under_field() {
        let mut v = Validator::new();
        v.check(false, "title", "must be provided");
        assert!(!v.valid());
        assert_eq!(
            v.into_errors().get("title").map(String::as_str),
            Some("must be provided")
        );
    }

    #[rstest]
    fn first_message_per_field_wins() {
        let mut v = Validator::new();
        v.check(false, "title", "must be provided");
        v.check(false, "title", "must not exceed 500 characters");
        assert_eq!(
            v.into_errors().get("title").map(String::as_str),
            Some("must be provided")
        );
    }

    #[rstest]
    fn passing_check_records_nothing() {
        let mut v = Validator::new();
        v.check(true, "title", "must be provided");
        assert!(v.valid());
    }

    #[rstest]
    #[case(item("buy milk", "", false), true)]
    #[case(item("buy milk", "semi-skimmed", true), true)]
    #[case(item("", "details", false), false)]
    fn item_policy_requires_title_only(#[case] candidate: Item, #[case] expected: bool) {
        let mut v = Validator::new();
        validate_item(&mut v, &candidate);
        assert_eq!(v.valid(), expected);
    }

    #[rstest]
    fn empty_title_reports_the_title_field() {
        let mut v = Validator::new();
        validate_item(&mut v, &item("", "", true));
        let errors = v.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("title").map(String::as_str),
            Some("must be provided")
        );
    }
}
