//! Save-field scenarios with the built-in rule validator

use accountdesk_core::{
    Account, AccountFormStore, FieldPath, MemoryStore, RecordType, RowField, RuleValidator,
    SaveOutcome,
};

fn local_store() -> AccountFormStore<MemoryStore> {
    let mut store = AccountFormStore::new(MemoryStore::new()).unwrap();
    store.add_account().unwrap();
    store.on_record_type_change(0, RecordType::Local).unwrap();
    store
}

#[tokio::test]
async fn blank_login_is_rejected_and_not_committed() {
    let mut store = local_store();
    let validator = RuleValidator::default();
    let before = store.accounts().to_vec();
    let writes = store.gateway().backend().write_count();

    store.row_mut(0).unwrap().login = "   ".to_string();
    let outcome = store
        .save_field(0, RowField::Login, Some(&validator))
        .await
        .unwrap();

    let SaveOutcome::Rejected(rejection) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert!(rejection.contains(FieldPath::new(0, RowField::Login)));
    assert_eq!(store.accounts(), before.as_slice());
    assert_eq!(store.rows()[0].login, "   ");
    assert_eq!(store.gateway().backend().write_count(), writes);
}

#[tokio::test]
async fn overlong_tag_line_is_rejected() {
    let mut store = local_store();
    let validator = RuleValidator::default();

    store.row_mut(0).unwrap().tag_string = "t".repeat(51);
    let outcome = store
        .save_field(0, RowField::Tags, Some(&validator))
        .await
        .unwrap();
    assert!(matches!(outcome, SaveOutcome::Rejected(_)));

    store.row_mut(0).unwrap().tag_string = "t".repeat(50);
    let outcome = store
        .save_field(0, RowField::Tags, Some(&validator))
        .await
        .unwrap();
    assert!(outcome.is_committed());
    assert_eq!(store.accounts()[0].tags.len(), 1);
}

#[tokio::test]
async fn password_limit_counts_characters() {
    let mut store = local_store();
    let validator = RuleValidator::default();

    store.row_mut(0).unwrap().set_password("п".repeat(100));
    let outcome = store
        .save_field(0, RowField::Password, Some(&validator))
        .await
        .unwrap();
    assert!(outcome.is_committed());

    store.row_mut(0).unwrap().set_password("п".repeat(101));
    let outcome = store
        .save_field(0, RowField::Password, Some(&validator))
        .await
        .unwrap();
    assert!(matches!(outcome, SaveOutcome::Rejected(_)));
    assert_eq!(
        store.accounts()[0].exposed_password(),
        Some("п".repeat(100).as_str())
    );
}

#[tokio::test]
async fn ldap_password_field_always_passes() {
    let mut store = AccountFormStore::new(MemoryStore::new()).unwrap();
    store.add_account().unwrap();
    store.row_mut(0).unwrap().login = "bob".to_string();
    let validator = RuleValidator::default();

    let outcome = store
        .save_field(0, RowField::Password, Some(&validator))
        .await
        .unwrap();
    assert!(outcome.is_committed());
    assert_eq!(store.accounts()[0], Account::ldap("bob"));
}

#[tokio::test]
async fn missing_validator_changes_nothing() {
    let mut store = local_store();
    let writes = store.gateway().backend().write_count();

    store.row_mut(0).unwrap().login = "carol".to_string();
    let outcome = store
        .save_field::<RuleValidator>(0, RowField::Login, None)
        .await
        .unwrap();

    assert_eq!(outcome, SaveOutcome::Skipped);
    assert_eq!(store.accounts()[0].login, "");
    assert_eq!(store.gateway().backend().write_count(), writes);
}
