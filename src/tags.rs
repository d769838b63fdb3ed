//! Reading the current version from tags and computing the next one.

use crate::domain::{Version, VersionBump, DEFAULT_PREFIX};
use crate::error::Result;
use crate::git::Repository;
use tracing::{debug, warn};

/// Picks the highest version tag among `tags`.
///
/// Only tags starting with `prefix` are considered. Tags are ordered by
/// their parsed version, then by name, so the choice is deterministic even
/// when several tags parse to the same version (or fall back to `0.0.0`).
pub fn latest_version_tag<S: AsRef<str>>(tags: &[S], prefix: &str) -> Option<String> {
    tags.iter()
        .map(AsRef::as_ref)
        .filter(|tag| tag.starts_with(prefix))
        .inspect(|tag| {
            if Version::try_parse_with_prefix(tag, prefix).is_none() {
                debug!(tag, "tag does not parse as a version, treating it as 0.0.0");
            }
        })
        .max_by(|a, b| {
            let va = Version::parse_with_prefix(a, prefix);
            let vb = Version::parse_with_prefix(b, prefix);
            va.cmp(&vb).then_with(|| a.cmp(b))
        })
        .map(str::to_string)
}

/// Returns the current version tag of the repository.
///
/// Falls back to `<prefix>0.0.0` when there are no matching tags or the tag
/// list cannot be read.
pub fn current_version<R: Repository + ?Sized>(repo: &R, prefix: &str) -> String {
    let fallback = Version::default().to_tag(prefix);

    match repo.list_tags() {
        Ok(tags) => {
            debug!(count = tags.len(), "listed tags");
            latest_version_tag(tags.as_slice(), prefix).unwrap_or(fallback)
        }
        Err(e) => {
            warn!(error = %e, "could not list tags, assuming {}", fallback);
            fallback
        }
    }
}

/// Computes the tag that follows `current` for a typed bump.
pub fn next_tag(current: &str, bump: VersionBump, prefix: &str) -> Result<String> {
    let next = Version::parse_with_prefix(current, prefix).bump(bump)?;
    Ok(next.to_tag(prefix))
}

/// Computes the next canonical version string (e.g., "v1.2.3" + "minor" -> "v1.3.0").
///
/// Any bump kind other than `major`, `minor` or `patch` is an
/// [`InvalidBump`](crate::error::TagBumpError::InvalidBump) error.
pub fn next_version(current: &str, bump: &str) -> Result<String> {
    let bump: VersionBump = bump.parse()?;
    next_tag(current, bump, DEFAULT_PREFIX)
}
