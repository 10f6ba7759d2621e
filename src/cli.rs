use crate::config_file::{APP_DOCUMENT, ConfigStore, THEME_DOCUMENT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log file name relative to the dashboard root
pub const LOG_FILE: &str = "pagedash.log";

/// pagedash - a multi-page terminal dashboard
#[derive(Parser, Debug)]
#[command(name = "pagedash")]
#[command(about = "A multi-page terminal dashboard with persisted theme and layout")]
#[command(version)]
pub struct Cli {
    /// Directory holding both configuration documents
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Theme document (default: <root>/.pagedash/config.toml)
    #[arg(long, global = true)]
    pub theme_file: Option<PathBuf>,

    /// Layout document (default: <root>/app_config.toml)
    #[arg(long, global = true)]
    pub app_config: Option<PathBuf>,

    /// Log file used while the dashboard owns the terminal (default: <root>/pagedash.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive dashboard (default)
    Run,
    /// Print the page menu in display order
    Pages,
    /// Print the merged theme and layout
    ShowConfig {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Create any missing configuration document
    Init,
    /// Overwrite both configuration documents with the defaults
    Reset,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Subcommand, `run` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }

    /// Log file path, next to the documents unless overridden
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.root.join(LOG_FILE))
    }

    /// Config store for the selected document paths
    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(
            self.theme_file
                .clone()
                .unwrap_or_else(|| self.root.join(THEME_DOCUMENT)),
            self.app_config
                .clone()
                .unwrap_or_else(|| self.root.join(APP_DOCUMENT)),
        )
    }
}
