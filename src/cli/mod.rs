//! Command-line surface

pub mod orchestration;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use orchestration::{BumpOutcome, WorkflowSettings};

#[derive(Debug, Parser)]
#[command(
    name = "tag-bump",
    version,
    about = "Compute the next semantic version from git tags and publish it",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the current version
    Current,
    /// Show the version a bump would produce, without creating it
    Next {
        /// One of patch, minor or major
        #[arg(value_name = "KIND")]
        bump: String,
    },
    /// Create (and push) the next version tag
    Bump(BumpArgs),
}

#[derive(Debug, Args, Clone)]
pub struct BumpArgs {
    /// One of patch, minor or major
    #[arg(value_name = "KIND")]
    pub bump: String,

    /// Annotation message for the new tag
    pub message: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Create the tag locally without pushing it
    #[arg(long)]
    pub no_push: bool,

    /// Remote to push to, overriding the configured one
    #[arg(long)]
    pub remote: Option<String>,
}

impl BumpArgs {
    /// Applies the flags on top of settings loaded from the configuration file.
    pub fn apply(&self, mut settings: WorkflowSettings) -> WorkflowSettings {
        if self.yes {
            settings.skip_confirmation = true;
        }
        if self.no_push {
            settings.push = false;
        }
        if let Some(remote) = &self.remote {
            settings.remote = remote.clone();
        }
        settings
    }
}
