use bstr::ByteSlice;
use rgit_hash::ObjectId;

use crate::{ObjectError, ObjectType};

/// The kind of object a tree entry points at. rgit trees are flat
/// containers of (kind, oid, name) records, not git's mode-bearing
/// directory entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Blob,
    Tree,
}

impl EntryKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "blob" => Some(Self::Blob),
            "tree" => Some(Self::Tree),
            _ => None,
        }
    }
}

impl From<EntryKind> for ObjectType {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Blob => ObjectType::Blob,
            EntryKind::Tree => ObjectType::Tree,
        }
    }
}

/// One record of a tree: `<kind> <oid> <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub kind: EntryKind,
    pub oid: ObjectId,
    pub name: String,
}

/// A tree object: the serialized, sorted list of its entries.
///
/// Entries are kept sorted by the literal string tuple
/// `(kind.as_str(), oid.to_hex(), name)` — rgit's canonical order is a
/// plain lexicographic sort over the text record, not git's
/// directory-aware `base_name_compare`. Two trees with the same entries
/// always serialize to the same bytes regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(mut entries: Vec<TreeEntry>) -> Result<Self, ObjectError> {
        for entry in &entries {
            validate_name(&entry.name)?;
        }
        entries.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        entries.dedup_by(|a, b| a.name == b.name && a.kind == b.kind);
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }

    pub fn parse(payload: &[u8]) -> Result<Self, ObjectError> {
        let mut entries = Vec::new();
        for (idx, line) in payload.split(|b| *b == b'\n').enumerate() {
            if line.is_empty() {
                continue;
            }
            let line = line.to_str().map_err(|_| ObjectError::MalformedTreeEntry {
                line: idx + 1,
                reason: "not valid UTF-8".to_string(),
            })?;
            let mut parts = line.splitn(3, ' ');
            let (kind, oid, name) = match (parts.next(), parts.next(), parts.next()) {
                (Some(k), Some(o), Some(n)) => (k, o, n),
                _ => {
                    return Err(ObjectError::MalformedTreeEntry {
                        line: idx + 1,
                        reason: "expected '<type> <oid> <name>'".to_string(),
                    })
                }
            };
            let kind = EntryKind::from_str(kind).ok_or_else(|| ObjectError::MalformedTreeEntry {
                line: idx + 1,
                reason: format!("unknown entry type {kind:?}"),
            })?;
            let oid = ObjectId::from_hex(oid).map_err(|e| ObjectError::MalformedTreeEntry {
                line: idx + 1,
                reason: e.to_string(),
            })?;
            validate_name(name)?;
            entries.push(TreeEntry {
                kind,
                oid,
                name: name.to_string(),
            });
        }
        Self::new(entries)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for entry in &self.entries {
            out.extend_from_slice(entry.kind.as_str().as_bytes());
            out.push(b' ');
            out.extend_from_slice(entry.oid.to_hex().as_bytes());
            out.push(b' ');
            out.extend_from_slice(entry.name.as_bytes());
            out.push(b'\n');
        }
        out
    }
}

fn sort_key(entry: &TreeEntry) -> (String, String, String) {
    (
        entry.kind.as_str().to_string(),
        entry.oid.to_hex(),
        entry.name.clone(),
    )
}

fn validate_name(name: &str) -> Result<(), ObjectError> {
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        return Err(ObjectError::InvalidEntryName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(byte: u8) -> ObjectId {
        let mut bytes = [0u8; 20];
        bytes[19] = byte;
        ObjectId::from_bytes(bytes)
    }

    #[test]
    fn serialize_sorts_by_type_oid_name() {
        let tree = Tree::new(vec![
            TreeEntry { kind: EntryKind::Tree, oid: oid(1), name: "b".into() },
            TreeEntry { kind: EntryKind::Blob, oid: oid(2), name: "a".into() },
        ])
        .unwrap();
        let payload = tree.serialize();
        let text = std::str::from_utf8(&payload).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].split(' ').next().unwrap(), "blob");
        assert_eq!(lines[1].split(' ').next().unwrap(), "tree");
    }

    #[test]
    fn parse_serialize_roundtrip() {
        let tree = Tree::new(vec![
            TreeEntry { kind: EntryKind::Blob, oid: oid(7), name: "README.md".into() },
            TreeEntry { kind: EntryKind::Tree, oid: oid(9), name: "src".into() },
        ])
        .unwrap();
        let payload = tree.serialize();
        assert_eq!(Tree::parse(&payload).unwrap(), tree);
    }

    #[test]
    fn rejects_slash_in_name() {
        let err = Tree::new(vec![TreeEntry {
            kind: EntryKind::Blob,
            oid: oid(1),
            name: "a/b".into(),
        }]);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_dot_and_dotdot() {
        for bad in ["." , ".."] {
            let err = Tree::new(vec![TreeEntry {
                kind: EntryKind::Blob,
                oid: oid(1),
                name: bad.into(),
            }]);
            assert!(err.is_err());
        }
    }

    #[test]
    fn insertion_order_does_not_affect_serialization() {
        let a = Tree::new(vec![
            TreeEntry { kind: EntryKind::Blob, oid: oid(1), name: "x".into() },
            TreeEntry { kind: EntryKind::Blob, oid: oid(2), name: "y".into() },
        ])
        .unwrap();
        let b = Tree::new(vec![
            TreeEntry { kind: EntryKind::Blob, oid: oid(2), name: "y".into() },
            TreeEntry { kind: EntryKind::Blob, oid: oid(1), name: "x".into() },
        ])
        .unwrap();
        assert_eq!(a.serialize(), b.serialize());
    }

    proptest::proptest! {
        /// Invariant 3 (spec.md §8), restricted to a single tree level: for
        /// any well-formed set of distinctly-named entries, parsing a
        /// serialized tree yields back an equal set regardless of the
        /// order entries were built in.
        #[test]
        fn roundtrips_for_any_well_formed_entries(
            names in proptest::collection::hash_set("[a-zA-Z0-9_]{1,12}", 0..8),
            seed: u8,
        ) {
            let entries: Vec<TreeEntry> = names
                .into_iter()
                .enumerate()
                .map(|(i, name)| TreeEntry {
                    kind: if i % 2 == 0 { EntryKind::Blob } else { EntryKind::Tree },
                    oid: oid(seed.wrapping_add(i as u8)),
                    name,
                })
                .collect();

            let tree = Tree::new(entries.clone()).unwrap();
            let parsed = Tree::parse(&tree.serialize()).unwrap();
            proptest::prop_assert_eq!(parsed.entries().len(), entries.len());
            proptest::prop_assert_eq!(parsed, tree);
        }
    }
}
