use crate::error::{Result, TagBumpError};
use git2::{
    Cred, CredentialType, ErrorClass, PushOptions, RemoteCallbacks, Repository as Git2Repo,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Credential attempts before giving up on a remote
const MAX_CREDENTIAL_ATTEMPTS: usize = 5;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at `path` or any of its parents
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| TagBumpError::tag(format!("Cannot resolve HEAD commit: {}", e)))?;

        let tagger = self
            .repo
            .signature()
            .map_err(|e| TagBumpError::tag(format!("No tagger identity configured: {}", e)))?;

        let oid = self
            .repo
            .tag(name, head.as_object(), &tagger, message, false)
            .map_err(|e| TagBumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;
        debug!(tag = name, object = %oid, target = %head.id(), "created annotated tag");

        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|_| TagBumpError::remote(format!("No remote named '{}' found", remote)))?;

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(remote_callbacks());

        let refspec = format!("refs/tags/{0}:refs/tags/{0}", tag_name);
        debug!(remote, refspec = %refspec, "pushing tag");

        remote_handle
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                ErrorClass::Net => TagBumpError::remote(format!("Network error during push: {}", e)),
                ErrorClass::Reference => {
                    TagBumpError::remote(format!("Reference error during push: {}", e))
                }
                _ => TagBumpError::remote(format!("Failed to push tag '{}': {}", tag_name, e)),
            })
    }
}

/// Callbacks for authenticating against a remote and surfacing
/// per-reference rejections as push errors.
///
/// Credentials are tried in order: SSH keys from `~/.ssh`, the SSH agent,
/// then whatever libgit2 considers the default.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    let attempts = Cell::new(0usize);

    callbacks.credentials(move |_url, username_from_url, allowed_types| {
        attempts.set(attempts.get() + 1);
        if attempts.get() > MAX_CREDENTIAL_ATTEMPTS {
            return Err(git2::Error::from_str("authentication failed"));
        }

        let username = username_from_url.unwrap_or("git");
        if allowed_types.contains(CredentialType::SSH_KEY) {
            for key_path in ssh_key_candidates() {
                if key_path.exists() {
                    if let Ok(cred) = Cred::ssh_key(username, None, &key_path, None) {
                        return Ok(cred);
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });

    callbacks.push_update_reference(|refname, status| match status {
        Some(status) => Err(git2::Error::from_str(&format!(
            "remote rejected {}: {}",
            refname, status
        ))),
        None => Ok(()),
    });

    callbacks
}

fn ssh_key_candidates() -> Vec<PathBuf> {
    let ssh_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ssh");

    ["id_ed25519", "id_rsa", "id_ecdsa"]
        .iter()
        .map(|name| ssh_dir.join(name))
        .collect()
}
