//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use accountdesk_core::RecordType;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// `AccountDesk` command-line interface for editing LDAP and local accounts
#[derive(Parser)]
#[command(name = "accountdesk")]
#[command(author, version, about = "AccountDesk command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the stored account list
    #[arg(short, long, global = true, env = "ACCOUNTDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to the settings file
    #[arg(short, long, global = true, env = "ACCOUNTDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all accounts
    #[command(about = "List all stored accounts")]
    List {
        /// Output format for the account list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Show one account
    #[command(about = "Show the details of one account")]
    Show {
        /// Account index as shown by `list`
        index: usize,

        /// Print the stored password instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// Append a blank LDAP account
    #[command(about = "Append a blank LDAP account")]
    Add,

    /// Remove an account
    #[command(about = "Remove the account at the given index")]
    Remove {
        /// Account index as shown by `list`
        index: usize,
    },

    /// Change the record type of an account
    #[command(about = "Switch an account between LDAP and local")]
    SetType {
        /// Account index as shown by `list`
        index: usize,

        /// New record type
        #[arg(value_enum)]
        record_type: RecordTypeArg,
    },

    /// Edit fields of an account
    #[command(about = "Edit and validate fields of an account")]
    Edit {
        /// Account index as shown by `list`
        index: usize,

        /// Tags separated by `;`
        #[arg(short, long)]
        tags: Option<String>,

        /// Login name
        #[arg(short, long)]
        login: Option<String>,

        /// Password (local accounts only)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the table column layout
    #[command(about = "Show the column layout and per-row cell spans")]
    Columns {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    #[default]
    Table,
    /// Output as JSON
    Json,
}

/// Record type argument
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecordTypeArg {
    /// Directory-authenticated account without a local password
    Ldap,
    /// Account with a locally stored password
    Local,
}

impl From<RecordTypeArg> for RecordType {
    fn from(arg: RecordTypeArg) -> Self {
        match arg {
            RecordTypeArg::Ldap => Self::Ldap,
            RecordTypeArg::Local => Self::Local,
        }
    }
}
