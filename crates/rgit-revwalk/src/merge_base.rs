use std::collections::{HashSet, VecDeque};

use rgit_hash::ObjectId;
use rgit_odb::ObjectDatabase;

use crate::walk::read_commit;
use crate::RevWalkError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// Dual-source BFS for the nearest common ancestor of `a` and `b`.
///
/// A single queue carries `(oid, side)` pairs; each side keeps its own
/// visited set. The first oid found already visited by the *other* side
/// is the merge base — reachable from both, and the first such commit a
/// breadth-first walk from each side encounters.
pub fn get_merge_base(odb: &ObjectDatabase, a: ObjectId, b: ObjectId) -> Result<ObjectId, RevWalkError> {
    let mut visited_a: HashSet<ObjectId> = HashSet::new();
    let mut visited_b: HashSet<ObjectId> = HashSet::new();
    let mut queue: VecDeque<(ObjectId, Side)> = VecDeque::from([(a, Side::A), (b, Side::B)]);

    while let Some((oid, side)) = queue.pop_front() {
        let (mine, theirs) = match side {
            Side::A => (&mut visited_a, &visited_b),
            Side::B => (&mut visited_b, &visited_a),
        };
        if theirs.contains(&oid) {
            return Ok(oid);
        }

        let commit = read_commit(odb, oid)?;
        for parent in commit.parents {
            queue.push_back((parent, side));
        }
        mine.insert(oid);
    }

    Err(RevWalkError::NoCommonAncestor { a, b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgit_object::{Commit, ObjectType};
    use tempfile::TempDir;

    fn odb() -> (TempDir, ObjectDatabase) {
        let dir = TempDir::new().unwrap();
        let odb = ObjectDatabase::open(dir.path().join("objects"));
        odb.create().unwrap();
        (dir, odb)
    }

    fn commit(odb: &ObjectDatabase, parents: Vec<ObjectId>, message: &str) -> ObjectId {
        let tree = odb.hash_object(ObjectType::Tree, b"").unwrap();
        let commit = Commit::new(tree, parents, message.as_bytes().to_vec());
        odb.hash_object(ObjectType::Commit, &commit.serialize()).unwrap()
    }

    #[test]
    fn diverging_branches_share_base() {
        let (_dir, odb) = odb();
        let base = commit(&odb, vec![], "base");
        let a = commit(&odb, vec![base], "a");
        let b = commit(&odb, vec![base], "b");

        assert_eq!(get_merge_base(&odb, a, b).unwrap(), base);
    }

    #[test]
    fn fast_forward_base_is_the_ancestor_itself() {
        let (_dir, odb) = odb();
        let c1 = commit(&odb, vec![], "c1");
        let c2 = commit(&odb, vec![c1], "c2");

        assert_eq!(get_merge_base(&odb, c1, c2).unwrap(), c1);
    }

    #[test]
    fn unrelated_histories_have_no_common_ancestor() {
        let (_dir, odb) = odb();
        let a = commit(&odb, vec![], "a");
        let b = commit(&odb, vec![], "b");

        let err = get_merge_base(&odb, a, b).unwrap_err();
        assert!(matches!(err, RevWalkError::NoCommonAncestor { .. }));
    }
}
