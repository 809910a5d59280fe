//! Repository context: binds a repo-root path to its object store and ref
//! store, and hosts the commit model, name resolution, and remote sync
//! built on top of the lower crates.
//!
//! Unlike the source this is modeled on, there is no process-wide mutable
//! "current repo" — a [`Repo`] is an explicit handle threaded through every
//! operation. Talking to a remote is just opening a second handle against
//! the remote's path (see [`remote`]).

mod commit;
mod error;
mod merge;
mod porcelain;
mod remote;
mod resolve;

pub use commit::{commit, get_commit};
pub use error::RepoError;
pub use merge::{merge, read_tree_merged};
pub use porcelain::{checkout, create_branch, create_tag, iter_branch_names, reset};
pub use remote::{can_push, fetch, push};
pub use resolve::get_oid;

use std::fs;
use std::path::{Path, PathBuf};

use rgit_odb::ObjectDatabase;
use rgit_ref::{RefStore, RefValue};

/// Directory name for repository state, matching the on-disk layout named
/// in spec §6.
pub const RGIT_DIR: &str = ".rgit";

/// A handle to a repository: its working-tree root plus the object and ref
/// stores rooted under `<root>/.rgit`.
pub struct Repo {
    root: PathBuf,
    rgit_dir: PathBuf,
    odb: ObjectDatabase,
    refs: RefStore,
}

impl Repo {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rgit_dir(&self) -> &Path {
        &self.rgit_dir
    }

    pub fn odb(&self) -> &ObjectDatabase {
        &self.odb
    }

    pub fn refs(&self) -> &RefStore {
        &self.refs
    }

    pub fn index_path(&self) -> PathBuf {
        self.rgit_dir.join("index")
    }

    /// Open a handle against an already-initialized repository at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let rgit_dir = root.join(RGIT_DIR);
        let odb = ObjectDatabase::open(rgit_dir.join("objects"));
        let refs = RefStore::new(rgit_dir.clone());
        Self { root, rgit_dir, odb, refs }
    }

    /// Create a fresh repository at `root`: the object store and the
    /// initial `master` branch, with HEAD pointing at it symbolically.
    ///
    /// The bootstrap branch has no commit yet. Rather than writing an
    /// empty sentinel value for `refs/heads/master` (the source's
    /// approach), that ref file is simply never created — `get_oid("@")`
    /// then naturally fails as "no commit yet" instead of resolving to a
    /// placeholder oid.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let rgit_dir = root.join(RGIT_DIR);
        fs::create_dir_all(&rgit_dir)?;

        let odb = ObjectDatabase::open(rgit_dir.join("objects"));
        odb.create()?;
        let refs = RefStore::new(rgit_dir.clone());
        refs.update_ref("HEAD", &RefValue::symbolic("refs/heads/master"), false)?;

        Ok(Self { root, rgit_dir, odb, refs })
    }

    /// The branch name HEAD points at, or `None` when HEAD is direct
    /// (detached).
    pub fn current_branch(&self) -> Result<Option<String>, RepoError> {
        match self.refs.get_ref_value("HEAD", false)? {
            Some(RefValue::Symbolic(target)) => Ok(target
                .strip_prefix("refs/heads/")
                .map(str::to_string)
                .or(Some(target))),
            _ => Ok(None),
        }
    }
}
