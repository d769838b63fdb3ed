//! Command workflows
//!
//! Each CLI command maps to one function here. They take an already-resolved
//! [WorkflowSettings] and a [Repository] so they can run against the mock
//! repository in tests. Argument parsing and process exit codes stay in
//! main.rs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{Version, VersionBump};
use crate::git::{Git2Repository, Repository};
use crate::tags;
use crate::ui;

/// Effective settings after merging the configuration file with CLI flags
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowSettings {
    /// Tag prefix used to select and format version tags
    pub prefix: String,

    /// Remote that new tags are pushed to
    pub remote: String,

    /// Whether to push after creating the tag
    pub push: bool,

    /// Skip the interactive confirmation before writing
    pub skip_confirmation: bool,
}

impl WorkflowSettings {
    pub fn from_config(config: &Config) -> Self {
        WorkflowSettings {
            prefix: config.tag.prefix.clone(),
            remote: config.remote.name.clone(),
            push: config.remote.push,
            skip_confirmation: config.behavior.skip_confirmation,
        }
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of a bump that ran to completion
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    /// The tag was created, and pushed when `pushed_to` is set
    Created {
        tag: String,
        pushed_to: Option<String>,
    },

    /// The user declined the confirmation; nothing was written
    Cancelled,
}

/// Reads the current version of the repository containing `dir`.
///
/// Not being inside a repository is treated like having no tags.
pub fn read_current_version(dir: &Path, settings: &WorkflowSettings) -> String {
    match Git2Repository::open(dir) {
        Ok(repo) => tags::current_version(&repo, &settings.prefix),
        Err(e) => {
            warn!(error = %e, "could not open repository, assuming no tags");
            Version::default().to_tag(&settings.prefix)
        }
    }
}

/// Computes the tag a bump of kind `bump` would create, without writing anything.
pub fn run_next(current: &str, bump: &str, settings: &WorkflowSettings) -> Result<String> {
    let bump: VersionBump = bump.parse()?;
    Ok(tags::next_tag(current, bump, &settings.prefix)?)
}

/// Computes the next tag, asks for confirmation, then creates and pushes it.
///
/// The bump kind arrives already parsed so a bad kind is rejected before the
/// repository is touched. `confirm` receives the prompt and is skipped when
/// the settings say so.
/// Creating or pushing the tag failing is an error; a tag whose push failed
/// is left in place.
pub fn run_bump<R, F>(
    repo: &R,
    settings: &WorkflowSettings,
    kind: VersionBump,
    message: &str,
    confirm: F,
) -> Result<BumpOutcome>
where
    R: Repository + ?Sized,
    F: FnOnce(&str) -> Result<bool>,
{
    let current = tags::current_version(repo, &settings.prefix);
    let next = tags::next_tag(&current, kind, &settings.prefix)?;

    ui::display_bump_plan(&current, kind.as_str(), &next, message);

    if !settings.skip_confirmation && !confirm("Proceed?")? {
        println!("Cancelled");
        return Ok(BumpOutcome::Cancelled);
    }

    repo.create_annotated_tag(&next, message)
        .with_context(|| format!("Failed to create tag '{}'", next))?;
    ui::display_success(&format!("Created tag {}", next));
    info!(tag = %next, from = %current, bump = %kind, "created release tag");

    if !settings.push {
        ui::display_manual_push_instruction(&next, &settings.remote);
        return Ok(BumpOutcome::Created {
            tag: next,
            pushed_to: None,
        });
    }

    ui::display_status(&format!("Pushing tag {} to {}", next, settings.remote));
    repo.push_tag(&settings.remote, &next).with_context(|| {
        format!(
            "Failed to push tag '{}' to {} (the local tag was kept)",
            next, settings.remote
        )
    })?;
    ui::display_success(&format!("Pushed tag {} to {}", next, settings.remote));

    Ok(BumpOutcome::Created {
        tag: next,
        pushed_to: Some(settings.remote.clone()),
    })
}
