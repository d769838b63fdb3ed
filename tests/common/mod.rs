// Shared fixtures for integration tests
#![allow(dead_code)]

use git2::Repository;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary repository with one commit and a configured identity
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        fs::write(dir.path().join("README.md"), "Initial content\n")
            .expect("Could not write initial file");

        {
            let mut index = repo.index().expect("Could not get index");
            index
                .add_path(Path::new("README.md"))
                .expect("Could not add file to index");
            index.write().expect("Could not write index");

            let tree_id = index.write_tree().expect("Could not write tree");
            let tree = repo.find_tree(tree_id).expect("Could not find tree");
            let sig = repo.signature().expect("Could not get sig");
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .expect("Could not create commit");
        }

        TestRepo { dir, repo }
    }

    pub fn with_tags(tags: &[&str]) -> Self {
        let test_repo = Self::new();
        for tag in tags {
            test_repo.tag(tag);
        }
        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|r| r.peel_to_commit())
            .expect("Could not resolve HEAD");
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Could not create tag");
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.repo
            .find_reference(&format!("refs/tags/{}", name))
            .is_ok()
    }

    pub fn tag_message(&self, name: &str) -> Option<String> {
        self.repo
            .find_reference(&format!("refs/tags/{}", name))
            .ok()?
            .peel_to_tag()
            .ok()?
            .message()
            .map(str::to_string)
    }

    /// Attach a fresh bare repository as `origin` and return its directory
    pub fn add_bare_origin(&self) -> TempDir {
        let remote_dir = TempDir::new().expect("Could not create remote dir");
        Repository::init_bare(remote_dir.path()).expect("Could not init bare repo");
        self.repo
            .remote("origin", remote_dir.path().to_str().expect("utf-8 path"))
            .expect("Could not add remote");
        remote_dir
    }
}

pub fn remote_has_tag(remote_dir: &Path, name: &str) -> bool {
    let repo = Repository::open_bare(remote_dir).expect("Could not open remote");
    let found = repo.find_reference(&format!("refs/tags/{}", name)).is_ok();
    found
}
