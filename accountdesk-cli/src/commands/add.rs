//! Add account command.

use crate::error::CliError;
use crate::util::Context;

/// Add account command handler
pub fn cmd_add(context: &Context) -> Result<(), CliError> {
    let mut store = context.open_store()?;
    let index = store.add_account()?;
    context.report(&format!("Added LDAP account at index {index}"));
    Ok(())
}
