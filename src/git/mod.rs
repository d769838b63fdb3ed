//! Git operations abstraction layer
//!
//! tag-bump only needs three things from a repository: the names of its
//! tags, a way to create an annotated tag on HEAD, and a way to push one tag
//! to a remote. The [Repository] trait captures exactly that so the bump
//! workflow can run against either implementation:
//!
//! - [repository::Git2Repository]: a real repository opened through the `git2` crate
//! - [mock::MockRepository]: an in-memory repository for tests
//!
//! ```rust
//! # use tag_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_tags()?;
//! if !tags.iter().any(|t| t == "v1.0.0") {
//!     repo.create_annotated_tag("v1.0.0", "First stable release")?;
//!     repo.push_tag("origin", "v1.0.0")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Tag operations the bump workflow depends on
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying failures (like `git2::Error`) to the matching
/// [crate::error::TagBumpError] variant: `Tag` for local tag problems,
/// `Remote` for anything involving the remote.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Order is unspecified; callers sort by version themselves.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Create an annotated tag on the current HEAD commit
    ///
    /// # Arguments
    /// * `name` - Name for the new tag (e.g., "v1.3.0")
    /// * `message` - Annotation message stored in the tag object
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err` - If the tag already exists, HEAD does not point at a commit,
    ///   or no tagger identity is configured
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push a single tag to a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `tag_name` - Name of an existing local tag
    ///
    /// # Returns
    /// * `Ok(())` - The remote accepted `refs/tags/<tag_name>`
    /// * `Err` - If the remote doesn't exist, rejects the reference, or the
    ///   transport fails
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;
}
