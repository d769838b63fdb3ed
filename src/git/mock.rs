use crate::error::{Result, TagBumpError};
use crate::git::Repository;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
///
/// Created tags are added to the tag list, so a later `list_tags` sees them.
/// Each operation can be made to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: RefCell<Vec<String>>,
    created: RefCell<Vec<(String, String)>>,
    pushed: RefCell<Vec<(String, String)>>,
    remotes: Vec<String>,
    fail_list: bool,
    fail_create: bool,
    fail_push: bool,
}

impl MockRepository {
    /// Create a new empty mock repository with an `origin` remote
    pub fn new() -> Self {
        MockRepository {
            remotes: vec!["origin".to_string()],
            ..Default::default()
        }
    }

    /// Create a mock repository that already has the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        repo.tags
            .borrow_mut()
            .extend(tags.into_iter().map(Into::into));
        repo
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().push(name.into());
    }

    /// Register an additional remote
    pub fn add_remote(&mut self, name: impl Into<String>) {
        self.remotes.push(name.into());
    }

    /// Make `list_tags` fail
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `create_annotated_tag` fail
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Make `push_tag` fail
    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Tags created through the trait, as (name, message)
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.created.borrow().clone()
    }

    /// Tags pushed through the trait, as (remote, name)
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.fail_list {
            return Err(TagBumpError::Git(git2::Error::from_str(
                "could not read refs/tags",
            )));
        }
        Ok(self.tags.borrow().clone())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        if self.fail_create {
            return Err(TagBumpError::tag(format!("Cannot create tag '{}'", name)));
        }
        if self.tags.borrow().iter().any(|t| t == name) {
            return Err(TagBumpError::tag(format!("Tag '{}' already exists", name)));
        }

        self.tags.borrow_mut().push(name.to_string());
        self.created
            .borrow_mut()
            .push((name.to_string(), message.to_string()));
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        if !self.remotes.iter().any(|r| r == remote) {
            return Err(TagBumpError::remote(format!(
                "No remote named '{}' found",
                remote
            )));
        }
        if self.fail_push {
            return Err(TagBumpError::remote(format!(
                "Failed to push tag '{}'",
                tag_name
            )));
        }
        if !self.tags.borrow().iter().any(|t| t == tag_name) {
            return Err(TagBumpError::remote(format!(
                "src refspec refs/tags/{} does not match any",
                tag_name
            )));
        }

        self.pushed
            .borrow_mut()
            .push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }
}
