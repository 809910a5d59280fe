//! Reference storage: direct and symbolic refs under a repository's
//! `.rgit/` directory — `HEAD`, `MERGE_HEAD`, and the `refs/` tree.

mod error;
mod value;

pub use error::RefError;
pub use value::RefValue;

use std::fs;
use std::path::{Path, PathBuf};

/// The maximum number of symbolic hops `get_ref_value` will follow before
/// giving up — guards against a ref cycle spinning forever (the original
/// implementation this store is modeled on has no such bound).
const MAX_DEREF_DEPTH: usize = 64;

/// A handle to the ref storage rooted at a repository's `.rgit/` directory.
pub struct RefStore {
    root: PathBuf,
}

impl RefStore {
    pub fn new(rgit_dir: impl Into<PathBuf>) -> Self {
        Self { root: rgit_dir.into() }
    }

    fn path_for(&self, ref_name: &str) -> PathBuf {
        self.root.join(ref_name)
    }

    /// Read the raw value stored at `ref_name`, one hop (no deref).
    fn read_raw(&self, ref_name: &str) -> Result<Option<RefValue>, RefError> {
        let path = self.path_for(ref_name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(RefValue::from_file_contents(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `value` at `ref_name`, first resolving `ref_name` through any
    /// symbolic chain when `deref` is true (so `update_ref("HEAD", ..)`
    /// on a HEAD that points at `refs/heads/main` updates `refs/heads/main`
    /// itself, not `HEAD`).
    pub fn update_ref(&self, ref_name: &str, value: &RefValue, deref: bool) -> Result<(), RefError> {
        if deref && matches!(value, RefValue::Symbolic(_)) {
            return Err(RefError::SymbolicWriteWithDeref(ref_name.to_string()));
        }
        let (target, _) = self.resolve(ref_name, deref)?;
        let path = self.path_for(&target);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, value.to_file_contents())?;
        Ok(())
    }

    /// Read the value at `ref_name`, following the symbolic chain when
    /// `deref` is true.
    pub fn get_ref_value(&self, ref_name: &str, deref: bool) -> Result<Option<RefValue>, RefError> {
        let (_, value) = self.resolve(ref_name, deref)?;
        Ok(value)
    }

    /// Resolve `ref_name` to `(final_ref_name, value_at_that_name)`. When
    /// `deref` is false this is a single read. When `deref` is true and the
    /// value is symbolic, follows the chain until a direct ref, a missing
    /// ref, or [`MAX_DEREF_DEPTH`] hops (whichever comes first).
    fn resolve(&self, ref_name: &str, deref: bool) -> Result<(String, Option<RefValue>), RefError> {
        let mut current = ref_name.to_string();
        for _ in 0..MAX_DEREF_DEPTH {
            let value = self.read_raw(&current)?;
            match value {
                Some(RefValue::Symbolic(target)) if deref => {
                    current = target;
                }
                other => return Ok((current, other)),
            }
        }
        Err(RefError::Cycle(ref_name.to_string()))
    }

    /// Remove the file at `ref_name`; missing refs are not an error.
    pub fn delete_ref(&self, ref_name: &str) -> Result<(), RefError> {
        match fs::remove_file(self.path_for(ref_name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Iterate every ref under `prefix` (relative to `refs/`), plus `HEAD`
    /// and `MERGE_HEAD` when `prefix` is empty. `deref` controls whether
    /// symbolic refs are followed to their final value.
    pub fn iter_refs(&self, prefix: &str, deref: bool) -> Result<Vec<(String, RefValue)>, RefError> {
        let mut names = Vec::new();
        if prefix.is_empty() {
            names.push("HEAD".to_string());
            names.push("MERGE_HEAD".to_string());
        }

        let start = self.root.join("refs").join(prefix);
        if start.is_dir() {
            walk_ref_files(&self.root, &start, &mut names)?;
        }

        let mut out = Vec::new();
        for name in names {
            if let Some(value) = self.get_ref_value(&name, deref)? {
                out.push((name, value));
            }
        }
        Ok(out)
    }
}

fn walk_ref_files(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<(), RefError> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk_ref_files(root, &path, out)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            if let Some(name) = relative.to_str() {
                out.push(name.replace(std::path::MAIN_SEPARATOR, "/"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgit_hash::ObjectId;
    use tempfile::TempDir;

    fn store() -> (TempDir, RefStore) {
        let dir = TempDir::new().unwrap();
        let store = RefStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    fn oid(byte: u8) -> ObjectId {
        let mut bytes = [0u8; 20];
        bytes[19] = byte;
        ObjectId::from_bytes(bytes)
    }

    #[test]
    fn direct_ref_roundtrip() {
        let (_dir, store) = store();
        store.update_ref("refs/heads/main", &RefValue::direct(oid(1)), true).unwrap();
        let value = store.get_ref_value("refs/heads/main", true).unwrap().unwrap();
        assert_eq!(value, RefValue::direct(oid(1)));
    }

    #[test]
    fn symbolic_head_resolves_to_direct_target() {
        let (_dir, store) = store();
        store.update_ref("refs/heads/main", &RefValue::direct(oid(2)), true).unwrap();
        store.update_ref("HEAD", &RefValue::symbolic("refs/heads/main"), false).unwrap();
        let value = store.get_ref_value("HEAD", true).unwrap().unwrap();
        assert_eq!(value, RefValue::direct(oid(2)));
    }

    #[test]
    fn update_ref_with_deref_writes_through_symbolic_head() {
        let (_dir, store) = store();
        store.update_ref("refs/heads/main", &RefValue::direct(oid(1)), true).unwrap();
        store.update_ref("HEAD", &RefValue::symbolic("refs/heads/main"), false).unwrap();
        store.update_ref("HEAD", &RefValue::direct(oid(9)), true).unwrap();

        let main_value = store.get_ref_value("refs/heads/main", false).unwrap().unwrap();
        assert_eq!(main_value, RefValue::direct(oid(9)));
    }

    #[test]
    fn update_ref_rejects_symbolic_value_with_deref() {
        let (_dir, store) = store();
        let err = store
            .update_ref("HEAD", &RefValue::symbolic("refs/heads/main"), true)
            .unwrap_err();
        assert!(matches!(err, RefError::SymbolicWriteWithDeref(_)));
    }

    #[test]
    fn missing_ref_returns_none() {
        let (_dir, store) = store();
        assert!(store.get_ref_value("refs/heads/ghost", true).unwrap().is_none());
    }

    #[test]
    fn delete_missing_ref_is_not_an_error() {
        let (_dir, store) = store();
        store.delete_ref("refs/heads/ghost").unwrap();
    }

    #[test]
    fn cyclic_symbolic_refs_are_rejected() {
        let (_dir, store) = store();
        store.update_ref("refs/heads/a", &RefValue::symbolic("refs/heads/b"), false).unwrap();
        store.update_ref("refs/heads/b", &RefValue::symbolic("refs/heads/a"), false).unwrap();
        let err = store.get_ref_value("refs/heads/a", true).unwrap_err();
        assert!(matches!(err, RefError::Cycle(_)));
    }

    #[test]
    fn iter_refs_includes_head_and_merge_head_only_without_prefix() {
        let (_dir, store) = store();
        store.update_ref("HEAD", &RefValue::direct(oid(1)), false).unwrap();
        store.update_ref("refs/heads/main", &RefValue::direct(oid(2)), true).unwrap();
        store.update_ref("refs/tags/v1", &RefValue::direct(oid(3)), true).unwrap();

        let all = store.iter_refs("", true).unwrap();
        let names: Vec<_> = all.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"HEAD"));
        assert!(names.contains(&"refs/heads/main"));
        assert!(names.contains(&"refs/tags/v1"));

        let heads_only = store.iter_refs("heads", true).unwrap();
        let names: Vec<_> = heads_only.iter().map(|(n, _)| n.as_str()).collect();
        assert!(!names.contains(&"HEAD"));
        assert!(names.contains(&"refs/heads/main"));
    }
}
