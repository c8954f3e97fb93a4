//! Property tests for form store invariants

use accountdesk_core::{ACCOUNTS_KEY, Account, AccountFormStore, MemoryStore, RecordType};
use proptest::prelude::*;

/// Store operations driven by the generated sequences
#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    SetType(usize, RecordType),
    TypePassword(usize, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        1 => (0usize..8).prop_map(Op::Remove),
        2 => (0usize..8, prop_oneof![Just(RecordType::Ldap), Just(RecordType::Local)])
            .prop_map(|(i, t)| Op::SetType(i, t)),
        1 => (0usize..8, "[a-z]{1,8}").prop_map(|(i, p)| Op::TypePassword(i, p)),
    ]
}

fn apply(store: &mut AccountFormStore<MemoryStore>, op: &Op) {
    // Out-of-range indices are expected to fail without side effects
    match op {
        Op::Add => {
            store.add_account().unwrap();
        }
        Op::Remove(i) => {
            let _ = store.remove_account(*i);
        }
        Op::SetType(i, t) => {
            let _ = store.on_record_type_change(*i, *t);
        }
        Op::TypePassword(i, p) => {
            if let Ok(row) = store.row_mut(*i) {
                row.set_password(p.clone());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: Accounts and rows stay aligned after any operation sequence
    #[test]
    fn accounts_and_rows_stay_aligned(ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut store = AccountFormStore::new(MemoryStore::new()).unwrap();
        for op in &ops {
            apply(&mut store, op);
            prop_assert_eq!(store.accounts().len(), store.rows().len());
        }
    }

    /// Property: No committed LDAP account has a password
    #[test]
    fn ldap_accounts_have_no_password(ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut store = AccountFormStore::new(MemoryStore::new()).unwrap();
        for op in &ops {
            apply(&mut store, op);
        }
        for account in store.accounts() {
            if account.record_type == RecordType::Ldap {
                prop_assert!(account.password.is_none());
            }
        }
    }

    /// Property: Storage mirrors the committed list after every mutation
    #[test]
    fn storage_mirrors_accounts(ops in prop::collection::vec(arb_op(), 1..20)) {
        let mut store = AccountFormStore::new(MemoryStore::new()).unwrap();
        store.add_account().unwrap();
        for op in &ops {
            apply(&mut store, op);
        }
        let raw = store.gateway().backend().raw(ACCOUNTS_KEY).unwrap();
        let stored: Vec<Account> = serde_json::from_str(raw).unwrap();
        prop_assert_eq!(stored.as_slice(), store.accounts());
    }

    /// Property: Adding then removing the new account restores the list
    #[test]
    fn add_then_remove_restores(ops in prop::collection::vec(arb_op(), 0..15)) {
        let mut store = AccountFormStore::new(MemoryStore::new()).unwrap();
        for op in &ops {
            apply(&mut store, op);
        }
        let before = store.accounts().to_vec();
        let index = store.add_account().unwrap();
        store.remove_account(index).unwrap();
        prop_assert_eq!(store.accounts(), before.as_slice());
    }
}
