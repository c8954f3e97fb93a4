//! Column layout command.

use std::fmt::Write as _;

use accountdesk_core::{CellSpan, MergedColumn};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::Context;

/// Columns command handler
pub fn cmd_columns(context: &Context, format: OutputFormat) -> Result<(), CliError> {
    let store = context.open_store()?;
    let columns = store.merged_columns();

    match format {
        OutputFormat::Table => println!("{}", format_columns(&columns)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&columns)
                .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn span_label(span: CellSpan) -> String {
    match span.col_span() {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

/// Format the column layout, one line per column with each row's span
///
/// Spans print as the `colSpan` value, `-` for a normal cell.
#[must_use]
pub fn format_columns(columns: &[MergedColumn]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{:<12}  {:<12}  SPANS", "TITLE", "DATA INDEX");

    for column in columns {
        let spans: Vec<String> = column
            .spans
            .iter()
            .map(|span| span_label(*span))
            .collect();
        let title = if column.descriptor.title.is_empty() {
            "(none)"
        } else {
            column.descriptor.title
        };
        let _ = writeln!(
            output,
            "{:<12}  {:<12}  {}",
            title,
            column.descriptor.data_index,
            spans.join(" ")
        );
    }

    output.trim_end().to_string()
}
