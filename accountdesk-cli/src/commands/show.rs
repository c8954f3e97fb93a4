//! Show account details command.

use crate::error::CliError;
use crate::util::{Context, mask_password};

/// Show account details command handler
pub fn cmd_show(context: &Context, index: usize, reveal: bool) -> Result<(), CliError> {
    let store = context.open_store()?;
    let account = store
        .accounts()
        .get(index)
        .ok_or(CliError::AccountNotFound {
            index,
            len: store.len(),
        })?;

    println!("Account Details:");
    println!("  Index:    {index}");
    println!("  Type:     {}", account.record_type);
    println!("  Login:    {}", account.login);

    if account.tags.is_empty() {
        println!("  Tags:     -");
    } else {
        let tags: Vec<_> = account.tag_texts().collect();
        println!("  Tags:     {}", tags.join(", "));
    }

    if account.record_type.has_password() {
        let password = if reveal {
            account.exposed_password().unwrap_or_default()
        } else {
            mask_password(account.exposed_password())
        };
        println!("  Password: {password}");
    }

    Ok(())
}
