//! Remove account command.

use crate::error::CliError;
use crate::util::Context;

/// Remove account command handler
pub fn cmd_remove(context: &Context, index: usize) -> Result<(), CliError> {
    let mut store = context.open_store()?;
    let login = store
        .accounts()
        .get(index)
        .map(|a| a.login.clone())
        .unwrap_or_default();

    store.remove_account(index)?;

    if login.is_empty() {
        context.report(&format!("Removed account at index {index}"));
    } else {
        context.report(&format!("Removed account '{login}' (index {index})"));
    }
    Ok(())
}
