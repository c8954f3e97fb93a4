//! Record type change command.

use accountdesk_core::RecordType;

use crate::error::CliError;
use crate::util::Context;

/// Set record type command handler
pub fn cmd_set_type(
    context: &Context,
    index: usize,
    record_type: RecordType,
) -> Result<(), CliError> {
    let mut store = context.open_store()?;
    store.on_record_type_change(index, record_type)?;

    context.report(&format!("Account {index} is now {record_type}"));
    if record_type == RecordType::Local {
        context.report("Set a password with `accountdesk edit <index> --password <value>`");
    }
    Ok(())
}
