//! Property tests for account/row mapping

use accountdesk_core::{
    Account, AccountRow, RecordType, Tag, decode_tags, encode_tags, new_id, to_account, to_row,
};
use proptest::prelude::*;
use secrecy::SecretString;

/// Strategy for tag text that survives the `"; "` encoding
fn arb_clean_tag() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]([a-zA-Z0-9 _-]{0,10}[a-zA-Z0-9_-])?"
}

/// Strategy for arbitrary record types
fn arb_record_type() -> impl Strategy<Value = RecordType> {
    prop_oneof![Just(RecordType::Ldap), Just(RecordType::Local)]
}

/// Strategy for arbitrary edited rows
fn arb_row() -> impl Strategy<Value = AccountRow> {
    (
        ".{0,30}",
        arb_record_type(),
        ".{0,20}",
        proptest::option::of(".{0,20}"),
    )
        .prop_map(|(tag_string, record_type, login, password)| AccountRow {
            id: new_id(),
            tag_string,
            record_type,
            login,
            password: password.map(SecretString::from),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: Tags without separators or edge whitespace round-trip
    #[test]
    fn clean_tags_round_trip(texts in prop::collection::vec(arb_clean_tag(), 0..6)) {
        let tags: Vec<Tag> = texts.iter().map(Tag::new).collect();
        prop_assert_eq!(decode_tags(&encode_tags(&tags)), tags);
    }

    /// Property: Decoded tags are never empty and never padded
    #[test]
    fn decoded_tags_are_trimmed(tag_string in ".{0,40}") {
        for tag in decode_tags(&tag_string) {
            prop_assert!(!tag.text.is_empty());
            prop_assert_eq!(tag.text.trim(), tag.text.as_str());
            prop_assert!(!tag.text.contains(';'));
        }
    }

    /// Property: A committed LDAP account never carries a password
    #[test]
    fn committed_password_follows_record_type(row in arb_row()) {
        let account = to_account(&row);
        match account.record_type {
            RecordType::Ldap => prop_assert!(account.password.is_none()),
            RecordType::Local => prop_assert!(account.password.is_some()),
        }
        prop_assert_eq!(account.login.trim(), account.login.as_str());
    }

    /// Property: Committing is stable once a row came from an account
    #[test]
    fn commit_is_idempotent(row in arb_row()) {
        let account = to_account(&row);
        let again: Account = to_account(&to_row(&account));
        prop_assert_eq!(again, account);
    }
}
