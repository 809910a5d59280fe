use rgit_hash::ObjectId;
use rgit_index::{with_index, write_tree};
use rgit_object::{Commit, ObjectType};
use rgit_ref::RefValue;

use crate::{RepoError, Repo};

/// Snapshot the current index as a tree, hash a new commit on top of it
/// (parented on HEAD and, if a merge is in progress, `MERGE_HEAD` too),
/// and advance HEAD to it.
pub fn commit(repo: &Repo, message: &[u8]) -> Result<ObjectId, RepoError> {
    let tree = with_index(&repo.index_path(), |index| write_tree(index, repo.odb()))??;

    let mut parents = Vec::new();
    if let Some(head) = repo.refs().get_ref_value("HEAD", true)?.and_then(|v| v.as_oid()) {
        parents.push(head);
    }
    if let Some(other) = repo.refs().get_ref_value("MERGE_HEAD", true)?.and_then(|v| v.as_oid()) {
        parents.push(other);
    }

    let commit = Commit::new(tree, parents, message.to_vec());
    let oid = repo.odb().hash_object(ObjectType::Commit, &commit.serialize())?;
    repo.refs().update_ref("HEAD", &RefValue::direct(oid), true)?;

    Ok(oid)
}

/// Decode the commit at `oid`.
pub fn get_commit(repo: &Repo, oid: ObjectId) -> Result<Commit, RepoError> {
    let (_, payload) = repo.odb().get_object_content(&oid, Some(ObjectType::Commit))?;
    Ok(Commit::parse(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgit_index::add;
    use tempfile::TempDir;

    fn repo() -> (TempDir, Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Repo::init(dir.path().to_path_buf()).unwrap();
        (dir, repo)
    }

    #[test]
    fn first_commit_has_no_parents() {
        let (dir, repo) = repo();
        std::fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        with_index(&repo.index_path(), |index| {
            add(repo.root(), &[std::path::PathBuf::from("a.txt")], repo.odb(), index)
        })
        .unwrap()
        .unwrap();

        let oid = commit(&repo, b"first\n").unwrap();
        let commit = get_commit(&repo, oid).unwrap();
        assert!(commit.parents.is_empty());
        assert_eq!(commit.message, b"first\n");
    }

    #[test]
    fn second_commit_parents_on_head() {
        let (dir, repo) = repo();
        std::fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        with_index(&repo.index_path(), |index| {
            add(repo.root(), &[std::path::PathBuf::from("a.txt")], repo.odb(), index)
        })
        .unwrap()
        .unwrap();
        let first = commit(&repo, b"first\n").unwrap();

        std::fs::write(dir.path().join("a.txt"), b"world").unwrap();
        with_index(&repo.index_path(), |index| {
            add(repo.root(), &[std::path::PathBuf::from("a.txt")], repo.odb(), index)
        })
        .unwrap()
        .unwrap();
        let second = commit(&repo, b"second\n").unwrap();

        let commit = get_commit(&repo, second).unwrap();
        assert_eq!(commit.parents, vec![first]);
    }
}
