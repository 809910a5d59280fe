//! Tree comparison and the diff/merge engine built on top of it.
//!
//! Comparing trees and classifying the differences is pure in-memory work
//! over flattened path -> oid maps (see `rgit-index::get_tree`). Rendering
//! a diff and three-way-merging a blob both delegate to an external
//! line-oriented collaborator (`diff`, `diff3`) — this crate only prepares
//! their inputs and relays their output, never reimplementing a diff
//! algorithm itself.

mod error;
mod external;

pub use error::DiffError;

use std::collections::{BTreeMap, BTreeSet};

use rgit_hash::ObjectId;
use rgit_object::ObjectType;
use rgit_odb::ObjectDatabase;

/// A flattened tree: repo-relative path -> blob oid.
pub type Tree = BTreeMap<String, ObjectId>;

/// How a path differs between two trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Deleted,
    Modified,
}

/// For the union of paths across `trees`, yield `(path, [oid_in_tree0, oid_in_tree1, ...])`.
/// A `None` entry means the path is absent from that tree.
pub fn compare_trees(trees: &[&Tree]) -> Vec<(String, Vec<Option<ObjectId>>)> {
    let mut paths: BTreeSet<&str> = BTreeSet::new();
    for tree in trees {
        paths.extend(tree.keys().map(String::as_str));
    }

    paths
        .into_iter()
        .map(|path| {
            let oids = trees.iter().map(|tree| tree.get(path).copied()).collect();
            (path.to_string(), oids)
        })
        .collect()
}

/// Classify every path that differs between `to` and `from` as
/// created/deleted/modified (relative to `from`).
pub fn iter_changed_files(to: &Tree, from: &Tree) -> Vec<(String, ChangeKind)> {
    compare_trees(&[to, from])
        .into_iter()
        .filter_map(|(path, oids)| {
            let oid_to = oids[0];
            let oid_from = oids[1];
            if oid_to == oid_from {
                return None;
            }
            let kind = match (oid_to, oid_from) {
                (Some(_), None) => ChangeKind::Created,
                (None, Some(_)) => ChangeKind::Deleted,
                _ => ChangeKind::Modified,
            };
            Some((path, kind))
        })
        .collect()
}

fn blob_content(odb: &ObjectDatabase, oid: Option<ObjectId>) -> Result<Vec<u8>, DiffError> {
    match oid {
        Some(oid) => Ok(odb.get_object_content(&oid, Some(ObjectType::Blob))?.1),
        None => Ok(Vec::new()),
    }
}

/// Diff one blob (by oid, either side possibly absent) through the
/// external `diff` collaborator, labeled `a/<path>` (from) / `b/<path>` (to).
pub fn diff_blobs(
    odb: &ObjectDatabase,
    oid_to: Option<ObjectId>,
    oid_from: Option<ObjectId>,
    path: &str,
) -> Result<Vec<u8>, DiffError> {
    let content_to = blob_content(odb, oid_to)?;
    let content_from = blob_content(odb, oid_from)?;
    external::run_diff(&content_from, &content_to, path)
}

/// Diff every path that differs between `to` and `from`, concatenating
/// each path's `diff_blobs` output.
pub fn diff_trees(odb: &ObjectDatabase, to: &Tree, from: &Tree) -> Result<Vec<u8>, DiffError> {
    let mut out = Vec::new();
    for (path, oids) in compare_trees(&[to, from]) {
        let (oid_to, oid_from) = (oids[0], oids[1]);
        if oid_to != oid_from {
            out.extend(diff_blobs(odb, oid_to, oid_from, &path)?);
        }
    }
    Ok(out)
}

/// Three-way-merge one blob (by oid, any side possibly absent) through the
/// external `diff3` collaborator and hash the merged bytes as a new blob.
/// Conflict markers in the collaborator's output are preserved verbatim.
pub fn merge_blobs(
    odb: &ObjectDatabase,
    head_oid: Option<ObjectId>,
    other_oid: Option<ObjectId>,
    base_oid: Option<ObjectId>,
) -> Result<ObjectId, DiffError> {
    let head = blob_content(odb, head_oid)?;
    let other = blob_content(odb, other_oid)?;
    let base = blob_content(odb, base_oid)?;
    let merged = external::run_diff3(&head, &base, &other)?;
    Ok(odb.hash_object(ObjectType::Blob, &merged)?)
}

/// Three-way-merge every path present in any of `to`/`from`/`base`,
/// producing the merged flattened tree map.
pub fn merge_trees(odb: &ObjectDatabase, to: &Tree, from: &Tree, base: &Tree) -> Result<Tree, DiffError> {
    let mut merged = Tree::new();
    for (path, oids) in compare_trees(&[to, from, base]) {
        let (oid_to, oid_from, oid_base) = (oids[0], oids[1], oids[2]);
        let merged_oid = merge_blobs(odb, oid_to, oid_from, oid_base)?;
        merged.insert(path, merged_oid);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn odb() -> (TempDir, ObjectDatabase) {
        let dir = TempDir::new().unwrap();
        let odb = ObjectDatabase::open(dir.path().join("objects"));
        odb.create().unwrap();
        (dir, odb)
    }

    #[test]
    fn compare_trees_unions_paths_across_inputs() {
        let mut t1 = Tree::new();
        let mut t2 = Tree::new();
        let a = ObjectId::from_bytes([1; 20]);
        let b = ObjectId::from_bytes([2; 20]);
        t1.insert("a.txt".to_string(), a);
        t2.insert("b.txt".to_string(), b);

        let rows = compare_trees(&[&t1, &t2]);
        assert_eq!(rows.len(), 2);
        let a_row = rows.iter().find(|(p, _)| p == "a.txt").unwrap();
        assert_eq!(a_row.1, vec![Some(a), None]);
    }

    #[test]
    fn iter_changed_files_classifies_created_deleted_modified() {
        let (_dir, odb) = odb();
        let a1 = odb.hash_object(ObjectType::Blob, b"1").unwrap();
        let a2 = odb.hash_object(ObjectType::Blob, b"2").unwrap();

        let mut from = Tree::new();
        from.insert("deleted.txt".to_string(), a1);
        from.insert("modified.txt".to_string(), a1);

        let mut to = Tree::new();
        to.insert("created.txt".to_string(), a2);
        to.insert("modified.txt".to_string(), a2);

        let mut changes = iter_changed_files(&to, &from);
        changes.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            changes,
            vec![
                ("created.txt".to_string(), ChangeKind::Created),
                ("deleted.txt".to_string(), ChangeKind::Deleted),
                ("modified.txt".to_string(), ChangeKind::Modified),
            ]
        );
    }

    #[test]
    fn merge_blobs_with_no_conflict_combines_both_sides() {
        let (_dir, odb) = odb();
        let base = odb.hash_object(ObjectType::Blob, b"line1\nline2\nline3\n").unwrap();
        let head = odb.hash_object(ObjectType::Blob, b"line1 changed\nline2\nline3\n").unwrap();
        let other = odb.hash_object(ObjectType::Blob, b"line1\nline2\nline3 changed\n").unwrap();

        let merged_oid = merge_blobs(&odb, Some(head), Some(other), Some(base)).unwrap();
        let (_, merged) = odb.get_object_content(&merged_oid, Some(ObjectType::Blob)).unwrap();
        let merged = String::from_utf8(merged).unwrap();
        assert!(merged.contains("line1 changed"));
        assert!(merged.contains("line3 changed"));
        assert!(!merged.contains("<<<<<<<"));
    }

    #[test]
    fn merge_blobs_with_conflicting_edits_preserves_markers() {
        let (_dir, odb) = odb();
        let base = odb.hash_object(ObjectType::Blob, b"line1\n").unwrap();
        let head = odb.hash_object(ObjectType::Blob, b"head version\n").unwrap();
        let other = odb.hash_object(ObjectType::Blob, b"other version\n").unwrap();

        let merged_oid = merge_blobs(&odb, Some(head), Some(other), Some(base)).unwrap();
        let (_, merged) = odb.get_object_content(&merged_oid, Some(ObjectType::Blob)).unwrap();
        let merged = String::from_utf8(merged).unwrap();
        assert!(merged.contains("<<<<<<< HEAD"));
        assert!(merged.contains(">>>>>>> MERGE_HEAD"));
    }

    #[test]
    fn merge_trees_merges_independent_changes_to_separate_paths() {
        let (_dir, odb) = odb();
        let base_a = odb.hash_object(ObjectType::Blob, b"1\n").unwrap();
        let base_b = odb.hash_object(ObjectType::Blob, b"2\n").unwrap();
        let head_a = odb.hash_object(ObjectType::Blob, b"1a\n").unwrap();
        let other_b = odb.hash_object(ObjectType::Blob, b"2b\n").unwrap();

        let mut base = Tree::new();
        base.insert("a".to_string(), base_a);
        base.insert("b".to_string(), base_b);

        let mut head = Tree::new();
        head.insert("a".to_string(), head_a);
        head.insert("b".to_string(), base_b);

        let mut other = Tree::new();
        other.insert("a".to_string(), base_a);
        other.insert("b".to_string(), other_b);

        let merged = merge_trees(&odb, &head, &other, &base).unwrap();
        let (_, content_a) = odb.get_object_content(merged.get("a").unwrap(), Some(ObjectType::Blob)).unwrap();
        let (_, content_b) = odb.get_object_content(merged.get("b").unwrap(), Some(ObjectType::Blob)).unwrap();
        assert_eq!(content_a, b"1a\n");
        assert_eq!(content_b, b"2b\n");
    }
}
