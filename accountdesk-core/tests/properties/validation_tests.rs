//! Property tests for field rules

use accountdesk_core::{FieldRule, RowField, ValidationRules};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: Max length accepts exactly the values within the limit
    #[test]
    fn max_length_matches_char_count(value in "\\PC{0,120}", max in 0usize..110) {
        let result = FieldRule::MaxLength(max).check(RowField::Login, Some(value.as_str()));
        prop_assert_eq!(result.is_none(), value.chars().count() <= max);
    }

    /// Property: Required rejects exactly the blank values
    #[test]
    fn required_rejects_blank(value in "[ \\t]{0,5}[a-z]{0,3}") {
        let result = FieldRule::Required.check(RowField::Login, Some(value.as_str()));
        prop_assert_eq!(result.is_some(), value.trim().is_empty());
    }

    /// Property: Tags are optional but bounded
    #[test]
    fn tag_rules(value in "[a-z; ]{0,80}") {
        let messages = ValidationRules::default().check(RowField::Tags, Some(value.as_str()));
        prop_assert_eq!(messages.is_empty(), value.chars().count() <= 50);
    }
}
