use std::collections::{HashSet, VecDeque};

use rgit_hash::ObjectId;
use rgit_object::Commit;
use rgit_odb::ObjectDatabase;

use crate::RevWalkError;

pub(crate) fn read_commit(odb: &ObjectDatabase, oid: ObjectId) -> Result<Commit, RevWalkError> {
    let (_, payload) = odb.get_object_content(&oid, Some(rgit_object::ObjectType::Commit))?;
    Ok(Commit::parse(&payload)?)
}

/// Yield every commit reachable from `starts`, each exactly once.
///
/// A double-ended queue seeded with `starts`: commits are popped from the
/// back, so a commit's first parent continues the current branch's walk
/// (pushed to the back, explored next) while later parents are deferred to
/// the front, giving a DFS-per-branch traversal rather than a strict BFS.
pub fn iter_commits_and_parents(odb: &ObjectDatabase, starts: &[ObjectId]) -> Result<Vec<ObjectId>, RevWalkError> {
    let mut queue: VecDeque<ObjectId> = starts.iter().copied().collect();
    let mut visited: HashSet<ObjectId> = HashSet::new();
    let mut out = Vec::new();

    while let Some(oid) = queue.pop_back() {
        if !visited.insert(oid) {
            continue;
        }
        out.push(oid);

        let commit = read_commit(odb, oid)?;
        if let Some((first, rest)) = commit.parents.split_first() {
            queue.push_back(*first);
            for parent in rest {
                queue.push_front(*parent);
            }
        }
    }

    Ok(out)
}

/// Does `old` appear anywhere in the history reachable from `new`?
pub fn is_ancestor(odb: &ObjectDatabase, old: ObjectId, new: ObjectId) -> Result<bool, RevWalkError> {
    Ok(iter_commits_and_parents(odb, &[new])?.contains(&old))
}
