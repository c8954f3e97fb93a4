//! Form store scenarios over the file-backed store
//!
//! Each test opens a fresh store on a temp directory, so reopening the same
//! directory observes exactly what a restart would.

use accountdesk_core::{
    ACCOUNTS_KEY, Account, AccountFormStore, FileStore, KeyValueStore, RecordType, RowField,
    RuleValidator, SaveOutcome,
};
use tempfile::TempDir;

fn open(dir: &TempDir) -> AccountFormStore<FileStore> {
    AccountFormStore::new(FileStore::new(dir.path())).expect("store should open")
}

fn stored_accounts(dir: &TempDir) -> Vec<Account> {
    let raw = FileStore::new(dir.path())
        .get(ACCOUNTS_KEY)
        .expect("read should succeed")
        .expect("accounts should be stored");
    serde_json::from_str(&raw).expect("stored accounts should parse")
}

#[test]
fn empty_directory_opens_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);

    assert!(store.is_empty());
    assert!(store.rows().is_empty());
    assert!(!FileStore::new(dir.path()).path_for(ACCOUNTS_KEY).exists());
}

#[test]
fn added_account_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open(&dir);
        assert_eq!(store.add_account().unwrap(), 0);
    }

    let store = open(&dir);
    assert_eq!(store.len(), 1);
    assert_eq!(store.accounts()[0], Account::ldap(""));
    assert_eq!(store.rows()[0].record_type, RecordType::Ldap);
    assert!(store.rows()[0].password.is_none());
}

#[test]
fn removing_last_account_writes_empty_list() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.add_account().unwrap();
    store.remove_account(0).unwrap();

    let raw = std::fs::read_to_string(FileStore::new(dir.path()).path_for(ACCOUNTS_KEY)).unwrap();
    assert_eq!(raw, "[]");
    assert!(open(&dir).is_empty());
}

#[test]
fn record_type_change_persists_password_shape() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.add_account().unwrap();

    store.on_record_type_change(0, RecordType::Local).unwrap();
    assert_eq!(stored_accounts(&dir)[0].exposed_password(), Some(""));

    store.row_mut(0).unwrap().set_password("typed");
    store.on_record_type_change(0, RecordType::Ldap).unwrap();
    assert!(stored_accounts(&dir)[0].password.is_none());
    assert!(store.rows()[0].password.is_none());
}

#[tokio::test]
async fn committed_edit_reloads_as_normalized_row() {
    let dir = TempDir::new().unwrap();
    let validator = RuleValidator::default();
    {
        let mut store = open(&dir);
        store.add_account().unwrap();
        store.on_record_type_change(0, RecordType::Local).unwrap();

        let row = store.row_mut(0).unwrap();
        row.tag_string = " web ;; prod ".to_string();
        row.login = "  alice  ".to_string();
        row.set_password("s3cret");

        let outcome = store
            .save_field(0, RowField::Login, Some(&validator))
            .await
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Committed);
    }

    let store = open(&dir);
    let account = &store.accounts()[0];
    assert_eq!(account.tag_texts().collect::<Vec<_>>(), ["web", "prod"]);
    assert_eq!(account.login, "alice");
    assert_eq!(account.exposed_password(), Some("s3cret"));

    let row = &store.rows()[0];
    assert_eq!(row.tag_string, "web; prod");
    assert_eq!(row.login, "alice");
}

#[test]
fn malformed_file_opens_empty_and_is_replaced_on_write() {
    let dir = TempDir::new().unwrap();
    let backend = FileStore::new(dir.path());
    std::fs::write(backend.path_for(ACCOUNTS_KEY), "{ not json").unwrap();

    let mut store = open(&dir);
    assert!(store.is_empty());

    store.add_account().unwrap();
    assert_eq!(stored_accounts(&dir).len(), 1);
}

#[test]
fn non_utf8_file_opens_empty_and_is_replaced_on_write() {
    let dir = TempDir::new().unwrap();
    let backend = FileStore::new(dir.path());
    std::fs::write(backend.path_for(ACCOUNTS_KEY), [0xff, 0xfe, b'[', b']']).unwrap();

    let mut store = open(&dir);
    assert!(store.is_empty());

    store.add_account().unwrap();
    assert_eq!(stored_accounts(&dir), [Account::ldap("")]);
}

#[test]
fn legacy_local_label_loads_as_local() {
    let dir = TempDir::new().unwrap();
    let backend = FileStore::new(dir.path());
    std::fs::write(
        backend.path_for(ACCOUNTS_KEY),
        r#"[{"tag":[{"text":"old"}],"recordType":"Локальная","login":"eve","password":"pw"}]"#,
    )
    .unwrap();

    let store = open(&dir);
    assert_eq!(store.accounts()[0].record_type, RecordType::Local);
    assert_eq!(store.rows()[0].tag_string, "old");
    assert_eq!(store.rows()[0].exposed_password(), Some("pw"));
}

#[test]
fn rows_get_fresh_ids_on_every_open() {
    let dir = TempDir::new().unwrap();
    let first = {
        let mut store = open(&dir);
        store.add_account().unwrap();
        store.rows()[0].id.clone()
    };
    let second = open(&dir).rows()[0].id.clone();
    assert_ne!(first, second);
}
