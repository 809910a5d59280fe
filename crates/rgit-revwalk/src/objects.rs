use std::collections::HashSet;

use rgit_hash::ObjectId;
use rgit_object::{EntryKind, ObjectType, Tree};
use rgit_odb::ObjectDatabase;

use crate::walk::{iter_commits_and_parents, read_commit};
use crate::RevWalkError;

fn collect_tree_objects(
    odb: &ObjectDatabase,
    tree_oid: ObjectId,
    visited: &mut HashSet<ObjectId>,
    out: &mut Vec<ObjectId>,
) -> Result<(), RevWalkError> {
    visited.insert(tree_oid);
    out.push(tree_oid);

    let (_, payload) = odb.get_object_content(&tree_oid, Some(ObjectType::Tree))?;
    let tree = Tree::parse(&payload)?;
    for entry in tree.entries() {
        if visited.contains(&entry.oid) {
            continue;
        }
        match entry.kind {
            EntryKind::Tree => collect_tree_objects(odb, entry.oid, visited, out)?,
            EntryKind::Blob => {
                visited.insert(entry.oid);
                out.push(entry.oid);
            }
        }
    }
    Ok(())
}

/// Walk the commit history reachable from `starts`; for each commit yield
/// its own oid, then every tree/blob reachable from its root tree,
/// deduplicated across the whole walk via a shared visited set.
pub fn iter_objects_in_commits(odb: &ObjectDatabase, starts: &[ObjectId]) -> Result<Vec<ObjectId>, RevWalkError> {
    let commits = iter_commits_and_parents(odb, starts)?;
    let mut visited: HashSet<ObjectId> = HashSet::new();
    let mut out = Vec::new();

    for commit_oid in commits {
        out.push(commit_oid);
        let commit = read_commit(odb, commit_oid)?;
        if visited.contains(&commit.tree) {
            continue;
        }
        collect_tree_objects(odb, commit.tree, &mut visited, &mut out)?;
    }

    Ok(out)
}
