use rgit_hash::ObjectId;
use rgit_index::read_tree;
use rgit_ref::RefValue;

use crate::commit::get_commit;
use crate::{RepoError, Repo};

fn is_branch(repo: &Repo, name: &str) -> Result<bool, RepoError> {
    Ok(repo.refs().get_ref_value(&format!("refs/heads/{name}"), false)?.is_some())
}

/// Move HEAD to `name` (a branch name or a raw commit oid) and materialize
/// its tree into the working directory. HEAD becomes symbolic when `name`
/// names a branch, direct (detached) otherwise.
pub fn checkout(repo: &Repo, name: &str) -> Result<ObjectId, RepoError> {
    let symbolic = is_branch(repo, name)?;
    let (ref_target, commit_oid) = if symbolic {
        let branch_path = format!("refs/heads/{name}");
        let oid = repo
            .refs()
            .get_ref_value(&branch_path, true)?
            .and_then(|v| v.as_oid())
            .ok_or_else(|| RepoError::InvalidState(format!("branch {name:?} has no commit")))?;
        (branch_path, oid)
    } else {
        let oid = crate::resolve::get_oid(repo, name)?;
        (name.to_string(), oid)
    };

    let commit = get_commit(repo, commit_oid)?;
    read_tree(&repo.index_path(), repo.root(), repo.odb(), commit.tree, true)?;

    let value = if symbolic {
        RefValue::symbolic(ref_target)
    } else {
        RefValue::direct(commit_oid)
    };
    repo.refs().update_ref("HEAD", &value, false)?;

    Ok(commit_oid)
}

/// Create (or overwrite) a tag pointing at `commit_oid`.
pub fn create_tag(repo: &Repo, tag: &str, commit_oid: ObjectId) -> Result<(), RepoError> {
    repo.refs().update_ref(&format!("refs/tags/{tag}"), &RefValue::direct(commit_oid), true)
}

/// Create a branch named `branch_name`. `start_commit` is `None` only for
/// the bootstrap branch [`Repo::init`] creates — every other caller must
/// supply a real start point.
pub fn create_branch(repo: &Repo, branch_name: &str, start_commit: Option<ObjectId>) -> Result<(), RepoError> {
    let branch_path = format!("refs/heads/{branch_name}");
    match start_commit {
        Some(oid) => repo.refs().update_ref(&branch_path, &RefValue::direct(oid), true),
        None => Ok(()),
    }
}

/// List local branch names, in ref-store iteration order.
pub fn iter_branch_names(repo: &Repo) -> Result<Vec<String>, RepoError> {
    let mut names = Vec::new();
    for (name, _) in repo.refs().iter_refs("heads", false)? {
        if let Some(branch) = name.strip_prefix("refs/heads/") {
            names.push(branch.to_string());
        }
    }
    Ok(names)
}

/// Move HEAD to `commit_oid`, advancing the current branch; refuses on a
/// detached HEAD (spec E5). With `hard`, also materializes the commit's
/// tree into the working directory and index.
pub fn reset(repo: &Repo, commit_oid: ObjectId, hard: bool) -> Result<(), RepoError> {
    let commit = get_commit(repo, commit_oid)?;
    if repo.current_branch()?.is_none() {
        return Err(RepoError::InvalidState("cannot reset: HEAD is detached".to_string()));
    }

    repo.refs().update_ref("HEAD", &RefValue::direct(commit_oid), true)?;
    if hard {
        read_tree(&repo.index_path(), repo.root(), repo.odb(), commit.tree, true)?;
    }
    Ok(())
}
