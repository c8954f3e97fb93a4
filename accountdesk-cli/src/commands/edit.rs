//! Edit account fields command.
//!
//! Each supplied field is written into the account's row and saved through
//! the rule validator, one field at a time, like a form committing on blur.
//! The first rejected field stops the command; fields saved before it stay
//! committed.

use accountdesk_core::{AccountRow, RowField, RuleValidator, SaveOutcome};
use secrecy::SecretString;

use crate::error::CliError;
use crate::util::{CliStore, Context};

/// Parameters for the `edit` command
pub struct EditParams {
    pub index: usize,
    pub tags: Option<String>,
    pub login: Option<String>,
    pub password: Option<SecretString>,
}

impl EditParams {
    fn edits(self) -> Vec<FieldEdit> {
        [
            self.tags.map(FieldEdit::Tags),
            self.login.map(FieldEdit::Login),
            self.password.map(FieldEdit::Password),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// A new value for one editable field
enum FieldEdit {
    Tags(String),
    Login(String),
    Password(SecretString),
}

impl FieldEdit {
    const fn field(&self) -> RowField {
        match self {
            Self::Tags(_) => RowField::Tags,
            Self::Login(_) => RowField::Login,
            Self::Password(_) => RowField::Password,
        }
    }

    fn apply(self, row: &mut AccountRow) {
        match self {
            Self::Tags(value) => row.tag_string = value,
            Self::Login(value) => row.login = value,
            Self::Password(value) => row.password = Some(value),
        }
    }
}

/// Edit account command handler
pub fn cmd_edit(context: &Context, params: EditParams) -> Result<(), CliError> {
    let index = params.index;
    let edits = params.edits();
    if edits.is_empty() {
        context.report("Nothing to change");
        return Ok(());
    }

    let mut store = context.open_store()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(apply_edits(context, &mut store, index, edits))
}

async fn apply_edits(
    context: &Context,
    store: &mut CliStore,
    index: usize,
    edits: Vec<FieldEdit>,
) -> Result<(), CliError> {
    let validator = RuleValidator::default();

    for edit in edits {
        let field = edit.field();
        let row = store.row_mut(index)?;
        if field == RowField::Password && !row.record_type.has_password() {
            tracing::warn!(index, "Ignoring password for an LDAP account");
            context.report("LDAP accounts have no password; use `set-type` to switch to local");
            continue;
        }
        edit.apply(row);

        match store.save_field(index, field, Some(&validator)).await? {
            SaveOutcome::Committed => context.report(&format!("Saved {field} of account {index}")),
            SaveOutcome::Rejected(rejection) => {
                return Err(CliError::Validation(rejection.to_string()));
            }
            SaveOutcome::Skipped => {}
        }
    }

    Ok(())
}
