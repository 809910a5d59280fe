//! Object model: the three payload kinds rgit stores content-addressed —
//! blobs, trees, and commits — and their parse/serialize routines.
//!
//! None of these types know about hashing or storage; they only convert
//! between their in-memory representation and the payload bytes that
//! `rgit-odb` hashes and writes (see `rgit-odb` for the `type\0payload`
//! on-disk framing).

mod blob;
mod commit;
mod tree;

pub use blob::Blob;
pub use commit::Commit;
pub use tree::{EntryKind, Tree, TreeEntry};

use rgit_hash::ObjectId;

/// The three object kinds rgit stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ObjectError> {
        match s {
            "blob" => Ok(Self::Blob),
            "tree" => Ok(Self::Tree),
            "commit" => Ok(Self::Commit),
            other => Err(ObjectError::InvalidType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while parsing or serializing object payloads.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("invalid object type: {0}")]
    InvalidType(String),

    #[error("malformed tree entry at line {line}: {reason}")]
    MalformedTreeEntry { line: usize, reason: String },

    #[error("tree entry name {0:?} is invalid (contains '/' or is '.'/'..')")]
    InvalidEntryName(String),

    #[error("malformed commit: {0}")]
    MalformedCommit(String),

    #[error("missing commit field: {field}")]
    MissingCommitField { field: &'static str },

    #[error(transparent)]
    Hash(#[from] rgit_hash::HashError),
}

/// A parsed object payload, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Blob(_) => ObjectType::Blob,
            Self::Tree(_) => ObjectType::Tree,
            Self::Commit(_) => ObjectType::Commit,
        }
    }

    pub fn parse(object_type: ObjectType, payload: &[u8]) -> Result<Self, ObjectError> {
        Ok(match object_type {
            ObjectType::Blob => Self::Blob(Blob::parse(payload)),
            ObjectType::Tree => Self::Tree(Tree::parse(payload)?),
            ObjectType::Commit => Self::Commit(Commit::parse(payload)?),
        })
    }

    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Blob(b) => b.serialize(),
            Self::Tree(t) => t.serialize(),
            Self::Commit(c) => c.serialize(),
        }
    }
}

/// Re-exported for callers that only need the id type.
pub type Oid = ObjectId;
