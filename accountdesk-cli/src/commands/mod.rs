//! Command handler modules for the CLI.

mod add;
mod columns;
mod completions;
mod edit;
mod list;
mod remove;
mod set_type;
mod show;

use secrecy::SecretString;

use crate::cli::Commands;
use crate::error::CliError;
use crate::util::Context;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(context: &Context, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List { format } => list::cmd_list(context, format),
        Commands::Show { index, reveal } => show::cmd_show(context, index, reveal),
        Commands::Add => add::cmd_add(context),
        Commands::Remove { index } => remove::cmd_remove(context, index),
        Commands::SetType { index, record_type } => {
            set_type::cmd_set_type(context, index, record_type.into())
        }
        Commands::Edit {
            index,
            tags,
            login,
            password,
        } => edit::cmd_edit(
            context,
            edit::EditParams {
                index,
                tags,
                login,
                password: password.map(SecretString::from),
            },
        ),
        Commands::Columns { format } => columns::cmd_columns(context, format),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
