use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::io::config_io::Overrides;

#[derive(Parser)]
#[command(name = "ws", about = concat!("ws v", env!("CARGO_PKG_VERSION"), " - browse your workspaces"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory whose subdirectories are the workspaces
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// SQLite file holding checkpoints
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Editor used to write checkpoints
    #[arg(long, global = true)]
    pub editor: Option<String>,

    /// Program that opens a workspace
    #[arg(long, global = true)]
    pub ide: Option<String>,

    /// Rows in the workspace list
    #[arg(long, global = true)]
    pub max_rows: Option<usize>,
}

impl Cli {
    /// Flags that take precedence over config.toml
    pub fn overrides(&self) -> Overrides {
        Overrides {
            root: self.root.clone(),
            store: self.store.clone(),
            editor: self.editor.clone(),
            ide: self.ide.clone(),
            max_rows: self.max_rows,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List workspaces in browse order
    List,
    /// Show stored checkpoints for a workspace
    Checkpoints(CheckpointsArgs),
}

#[derive(Args)]
pub struct CheckpointsArgs {
    /// Workspace name
    pub name: String,
}
