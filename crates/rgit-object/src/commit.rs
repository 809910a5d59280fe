use bstr::ByteSlice;
use rgit_hash::ObjectId;

use crate::ObjectError;

/// A commit: a tree, zero or more parents, and a verbatim message.
///
/// Unlike git, rgit commits carry no author, committer, timestamp, or
/// encoding metadata — the spec this crate implements treats authorship
/// as out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub tree: ObjectId,
    pub parents: Vec<ObjectId>,
    pub message: Vec<u8>,
}

impl Commit {
    pub fn new(tree: ObjectId, parents: Vec<ObjectId>, message: Vec<u8>) -> Self {
        Self { tree, parents, message }
    }

    pub fn parse(payload: &[u8]) -> Result<Self, ObjectError> {
        let mut tree = None;
        let mut parents = Vec::new();

        let mut rest = payload;
        loop {
            let newline = rest.find_byte(b'\n').ok_or_else(|| {
                ObjectError::MalformedCommit("header section never terminates".to_string())
            })?;
            let line = &rest[..newline];
            rest = &rest[newline + 1..];

            if line.is_empty() {
                break;
            }

            let line = line.to_str().map_err(|_| {
                ObjectError::MalformedCommit("header line is not valid UTF-8".to_string())
            })?;
            let (key, value) = line.split_once(' ').ok_or_else(|| {
                ObjectError::MalformedCommit(format!("malformed header line {line:?}"))
            })?;

            match key {
                "tree" => {
                    tree = Some(ObjectId::from_hex(value).map_err(|e| {
                        ObjectError::MalformedCommit(format!("bad tree oid: {e}"))
                    })?);
                }
                "parent" => {
                    parents.push(ObjectId::from_hex(value).map_err(|e| {
                        ObjectError::MalformedCommit(format!("bad parent oid: {e}"))
                    })?);
                }
                other => {
                    return Err(ObjectError::MalformedCommit(format!(
                        "unknown commit header {other:?}"
                    )))
                }
            }
        }

        let tree = tree.ok_or(ObjectError::MissingCommitField { field: "tree" })?;
        Ok(Self {
            tree,
            parents,
            message: rest.to_vec(),
        })
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"tree ");
        out.extend_from_slice(self.tree.to_hex().as_bytes());
        out.push(b'\n');
        for parent in &self.parents {
            out.extend_from_slice(b"parent ");
            out.extend_from_slice(parent.to_hex().as_bytes());
            out.push(b'\n');
        }
        out.push(b'\n');
        out.extend_from_slice(&self.message);
        out
    }
}
