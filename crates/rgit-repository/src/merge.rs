use rgit_diff::merge_trees;
use rgit_hash::ObjectId;
use rgit_index::{get_tree, read_tree, with_index, write_cwd};
use rgit_ref::RefValue;
use rgit_revwalk::get_merge_base;

use crate::commit::{commit, get_commit};
use crate::{RepoError, Repo};

/// Three-way-merge `head_tree`/`other_tree` against `base_tree`, stage the
/// merged result, and optionally materialize it into the working tree.
pub fn read_tree_merged(
    repo: &Repo,
    head_tree: ObjectId,
    other_tree: ObjectId,
    base_tree: ObjectId,
    update_cwd: bool,
) -> Result<(), RepoError> {
    let head = get_tree(repo.odb(), head_tree)?;
    let other = get_tree(repo.odb(), other_tree)?;
    let base = get_tree(repo.odb(), base_tree)?;
    let merged = merge_trees(repo.odb(), &head, &other, &base)?;

    with_index(&repo.index_path(), |index| {
        index.clear();
        index.replace_all(merged.clone());
    })?;

    if update_cwd {
        write_cwd(repo.root(), &merged, repo.odb())?;
    }
    Ok(())
}

/// Merge `other_oid` into HEAD: a fast-forward when HEAD is an ancestor of
/// `other_oid`, otherwise a three-way merge that produces a commit with
/// two parents. Returns the new merge commit's oid, or `None` when the
/// merge resolved as a fast-forward (no commit created).
pub fn merge(repo: &Repo, other_oid: ObjectId) -> Result<Option<ObjectId>, RepoError> {
    let head_oid = crate::resolve::get_oid(repo, "@")?;
    let base_oid = get_merge_base(repo.odb(), head_oid, other_oid)?;

    if base_oid == head_oid {
        repo.refs().update_ref("HEAD", &RefValue::direct(other_oid), true)?;
        let other_tree = get_commit(repo, other_oid)?.tree;
        read_tree(&repo.index_path(), repo.root(), repo.odb(), other_tree, true)?;
        return Ok(None);
    }

    let head_tree = get_commit(repo, head_oid)?.tree;
    let other_tree = get_commit(repo, other_oid)?.tree;
    let base_tree = get_commit(repo, base_oid)?.tree;

    read_tree_merged(repo, head_tree, other_tree, base_tree, true)?;

    repo.refs().update_ref("MERGE_HEAD", &RefValue::direct(other_oid), false)?;
    let message = format!("merge commit {}\n", &other_oid.to_hex()[..10]);
    let merge_commit_oid = commit(repo, message.as_bytes())?;
    repo.refs().delete_ref("MERGE_HEAD")?;

    Ok(Some(merge_commit_oid))
}
