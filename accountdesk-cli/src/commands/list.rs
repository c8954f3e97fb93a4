//! List accounts command.

use std::fmt::Write as _;

use accountdesk_core::{Account, AccountRow, CellSpan, ColumnKey, MergedColumn};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::{CliStore, Context, mask_password};

/// List accounts command handler
pub fn cmd_list(context: &Context, format: OutputFormat) -> Result<(), CliError> {
    let store = context.open_store()?;

    match format {
        OutputFormat::Table => println!("{}", format_table(&store)),
        OutputFormat::Json => println!("{}", format_json(store.accounts())?),
    }

    Ok(())
}

/// Text of `row`'s cell in `column`
fn cell_text(column: ColumnKey, row: &AccountRow) -> String {
    match column {
        ColumnKey::Tags => row.tag_string.clone(),
        ColumnKey::RecordType => row.record_type.to_string(),
        ColumnKey::Login => row.login.clone(),
        ColumnKey::Password => mask_password(row.exposed_password()).to_string(),
        ColumnKey::Actions => String::new(),
    }
}

/// Format accounts as a table string
///
/// Cells follow the merged column layout, so an LDAP login runs across the
/// password column.
#[must_use]
pub fn format_table(store: &CliStore) -> String {
    let rows = store.rows();
    if rows.is_empty() {
        return "No accounts found.".to_string();
    }

    let columns: Vec<MergedColumn> = store
        .merged_columns()
        .into_iter()
        .filter(|c| c.descriptor.key != ColumnKey::Actions)
        .collect();

    let index_width = (rows.len() - 1).to_string().len().max(1);
    let widths: Vec<usize> = columns
        .iter()
        .map(|column| {
            rows.iter()
                .zip(&column.spans)
                .filter(|(_, span)| **span == CellSpan::Normal)
                .map(|(row, _)| cell_text(column.descriptor.key, row).chars().count())
                .chain(std::iter::once(column.descriptor.title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();

    // Header
    let _ = write!(output, "{:<index_width$}", "#");
    for (column, width) in columns.iter().zip(&widths) {
        let _ = write!(
            output,
            "  {:<width$}",
            column.descriptor.title.to_uppercase(),
            width = *width
        );
    }
    output = output.trim_end().to_string();
    output.push('\n');

    let _ = write!(output, "{:-<index_width$}", "");
    for width in &widths {
        let _ = write!(output, "  {:-<width$}", "", width = *width);
    }
    output.push('\n');

    // Rows
    for (i, row) in rows.iter().enumerate() {
        let mut line = format!("{i:<index_width$}");
        for (c, column) in columns.iter().enumerate() {
            let width = match column.spans[i] {
                CellSpan::Hidden => continue,
                CellSpan::Normal => widths[c],
                CellSpan::Merged(n) => {
                    let end = (c + usize::from(n)).min(widths.len());
                    widths[c..end].iter().sum::<usize>() + 2 * (end - c - 1)
                }
            };
            let _ = write!(line, "  {:<width$}", cell_text(column.descriptor.key, row));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Format accounts as JSON string
///
/// Passwords are reduced to a presence flag.
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_json(accounts: &[Account]) -> Result<String, CliError> {
    let output: Vec<AccountOutput> = accounts
        .iter()
        .enumerate()
        .map(|(index, account)| AccountOutput::new(index, account))
        .collect();
    serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}

/// Simplified account output for CLI
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AccountOutput {
    pub index: usize,
    pub tags: Vec<String>,
    pub record_type: String,
    pub login: String,
    pub has_password: bool,
}

impl AccountOutput {
    fn new(index: usize, account: &Account) -> Self {
        Self {
            index,
            tags: account.tag_texts().map(str::to_string).collect(),
            record_type: account.record_type.to_string(),
            login: account.login.clone(),
            has_password: account.exposed_password().is_some_and(|p| !p.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_hides_password() {
        let accounts = vec![
            Account::local("alice", "secret").with_tags(["ops", "db"]),
            Account::ldap("bob"),
        ];
        let json = format_json(&accounts).unwrap();
        assert!(!json.contains("secret"));

        let parsed: Vec<AccountOutput> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].tags, ["ops", "db"]);
        assert!(parsed[0].has_password);
        assert_eq!(parsed[1].record_type, "LDAP");
        assert!(!parsed[1].has_password);
    }
}
