//! Shared utility functions used across command modules.

use std::path::PathBuf;

use accountdesk_core::{
    AccountFormStore, FileStore, Settings, TracingLevel, config::default_data_dir, init_tracing,
};

use crate::error::CliError;

/// Store type every command operates on
pub type CliStore = AccountFormStore<FileStore>;

/// Global options shared by all commands
#[derive(Debug, Clone)]
pub struct Context {
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    quiet: bool,
}

impl Context {
    /// Creates a context from the global CLI options
    pub const fn new(data_dir: Option<PathBuf>, config: Option<PathBuf>, quiet: bool) -> Self {
        Self {
            data_dir,
            config,
            quiet,
        }
    }

    /// Loads settings from `--config` or the default location
    ///
    /// A missing file yields defaults; an explicit `--config` that is
    /// missing is still fine, so first runs work without setup.
    pub fn settings(&self) -> Result<Settings, CliError> {
        let path = match self.config {
            Some(ref path) => path.clone(),
            None => match Settings::default_path() {
                Ok(path) => path,
                Err(_) => return Ok(Settings::default()),
            },
        };
        Ok(Settings::load_or_default(&path)?)
    }

    /// Resolves the data directory: `--data-dir`, then settings, then the
    /// platform default
    pub fn data_dir(&self) -> Result<PathBuf, CliError> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        match self.settings()?.storage.data_dir {
            Some(dir) => Ok(dir),
            None => Ok(default_data_dir()?),
        }
    }

    /// Opens the form store over the resolved data directory
    pub fn open_store(&self) -> Result<CliStore, CliError> {
        let dir = self.data_dir()?;
        tracing::debug!(dir = %dir.display(), "Opening account store");
        Ok(AccountFormStore::new(FileStore::new(dir))?)
    }

    /// Prints a status line unless `--quiet` was given
    pub fn report(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

/// Initializes logging from settings, with `-v` overriding the level
pub fn init_logging(context: &Context, verbose: u8) -> Result<(), CliError> {
    let mut config = context.settings()?.logging.tracing_config();
    if verbose > 0 {
        config.level = TracingLevel::from_verbosity(verbose);
        config.filter = None;
    }
    init_tracing(&config)?;
    Ok(())
}

/// Masks a password for display
pub fn mask_password(password: Option<&str>) -> &'static str {
    match password {
        None => "-",
        Some("") => "(empty)",
        Some(_) => "********",
    }
}
