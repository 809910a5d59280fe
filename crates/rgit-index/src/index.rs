use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rgit_hash::ObjectId;

use crate::IndexError;

/// The staging index: a flat map from repo-relative path to the blob oid
/// staged at that path. Kept in a `BTreeMap` so both iteration and the
/// persisted file are in a stable, path-sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: BTreeMap<String, ObjectId>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<ObjectId> {
        self.entries.get(path).copied()
    }

    pub fn set(&mut self, path: impl Into<String>, oid: ObjectId) {
        self.entries.insert(path.into(), oid);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ObjectId)> {
        self.entries.iter().map(|(path, oid)| (path.as_str(), *oid))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replace the whole index with `tree`'s flattened path -> oid map.
    pub fn replace_all(&mut self, tree: BTreeMap<String, ObjectId>) {
        self.entries = tree;
    }

    fn load(path: &Path) -> Result<Self, IndexError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = BTreeMap::new();
        for line in contents.lines() {
            if line.is_empty() {
                continue;
            }
            let (oid_hex, file_path) = line
                .split_once(' ')
                .ok_or_else(|| IndexError::UnsupportedPath(path.to_path_buf()))?;
            let oid = ObjectId::from_hex(oid_hex).map_err(|_| IndexError::UnsupportedPath(path.to_path_buf()))?;
            entries.insert(file_path.to_string(), oid);
        }
        Ok(Self { entries })
    }

    fn save(&self, path: &Path) -> Result<(), IndexError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut contents = String::new();
        for (file_path, oid) in &self.entries {
            contents.push_str(&oid.to_hex());
            contents.push(' ');
            contents.push_str(file_path);
            contents.push('\n');
        }
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Load the index at `index_path`, run `f` against it, then persist
/// whatever `f` left behind — the scoped read-mutate-write pattern every
/// index-touching operation goes through, so no caller can forget to
/// save (or save a stale copy read before another caller's write).
pub fn with_index<R>(
    index_path: &Path,
    f: impl FnOnce(&mut Index) -> R,
) -> Result<R, IndexError> {
    let mut index = Index::load(index_path)?;
    let result = f(&mut index);
    index.save(index_path)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn oid(byte: u8) -> ObjectId {
        let mut bytes = [0u8; 20];
        bytes[19] = byte;
        ObjectId::from_bytes(bytes)
    }

    #[test]
    fn with_index_persists_across_calls() {
        let dir = TempDir::new().unwrap();
        let index_path = dir.path().join("index");

        with_index(&index_path, |index| {
            index.set("a.txt", oid(1));
        })
        .unwrap();

        let seen = with_index(&index_path, |index| index.get("a.txt")).unwrap();
        assert_eq!(seen, Some(oid(1)));
    }

    #[test]
    fn missing_index_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let index_path = dir.path().join("index");
        let is_empty = with_index(&index_path, |index| index.is_empty()).unwrap();
        assert!(is_empty);
    }

    #[test]
    fn paths_with_spaces_roundtrip() {
        let dir = TempDir::new().unwrap();
        let index_path = dir.path().join("index");
        with_index(&index_path, |index| {
            index.set("a dir/with space.txt", oid(3));
        })
        .unwrap();
        let seen = with_index(&index_path, |index| index.get("a dir/with space.txt")).unwrap();
        assert_eq!(seen, Some(oid(3)));
    }
}
