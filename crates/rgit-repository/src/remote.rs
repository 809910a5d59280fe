use std::path::Path;

use rgit_hash::ObjectId;
use rgit_ref::RefValue;
use rgit_revwalk::{is_ancestor, iter_objects_in_commits};

use crate::{RepoError, Repo};

const REMOTE_REFS_BASE: &str = "heads";
const LOCAL_REFS_BASE: &str = "refs/remote";

/// Copy `oid`'s object file from `remote`'s store into `local`'s, if
/// `local` doesn't already have it.
fn copy_object_if_missing(local: &Repo, remote: &Repo, oid: ObjectId) -> Result<(), RepoError> {
    if local.odb().object_exists(&oid) {
        return Ok(());
    }
    let (object_type, payload) = remote.odb().get_object_content(&oid, None)?;
    local.odb().hash_object(object_type, &payload)?;
    Ok(())
}

/// Mirror `remote`'s `refs/heads/*` into local `refs/remote/*` (never
/// deref'd — a remote-tracking ref always names the branch's own oid, not
/// wherever a further symbolic chain might lead), then copy every object
/// transitively reachable from those branches that's missing locally.
pub fn fetch(local: &Repo, remote_path: impl AsRef<Path>) -> Result<(), RepoError> {
    let remote = Repo::open(remote_path.as_ref().to_path_buf());

    let remote_branches = remote.refs().iter_refs(REMOTE_REFS_BASE, false)?;
    let mut oids = Vec::new();
    for (name, value) in &remote_branches {
        let branch_name = name.strip_prefix("refs/heads/").unwrap_or(name);
        let target = format!("{LOCAL_REFS_BASE}/{branch_name}");
        local.refs().update_ref(&target, value, false)?;
        if let Some(oid) = value.as_oid() {
            oids.push(oid);
        }
    }

    for oid in iter_objects_in_commits(remote.odb(), &oids)? {
        copy_object_if_missing(local, &remote, oid)?;
    }
    Ok(())
}

/// Is it safe to push `local_oid` onto `remote_branch`? Spec-mandated
/// fast-forward safety check the original source does not perform: the
/// remote branch must be absent, or the local oid must be a
/// fast-forward of it.
pub fn can_push(local: &Repo, remote: &Repo, branch: &str) -> Result<bool, RepoError> {
    let remote_ref = format!("refs/heads/{branch}");
    let remote_oid = remote.refs().get_ref_value(&remote_ref, false)?.and_then(|v| v.as_oid());
    let local_oid = crate::resolve::get_oid(local, branch)?;

    Ok(match remote_oid {
        None => true,
        Some(remote_oid) => is_ancestor(local.odb(), remote_oid, local_oid)?,
    })
}

/// Push local `branch` to `remote_path`, refusing when [`can_push`] would
/// reject a non-fast-forward update.
pub fn push(local: &Repo, remote_path: impl AsRef<Path>, branch: &str) -> Result<(), RepoError> {
    let remote = Repo::open(remote_path.as_ref().to_path_buf());
    let local_oid = crate::resolve::get_oid(local, branch)?;

    if !can_push(local, &remote, branch)? {
        return Err(RepoError::InvalidState(format!(
            "refusing to push non-fast-forward update to branch {branch:?}"
        )));
    }

    for oid in iter_objects_in_commits(local.odb(), &[local_oid])? {
        if !remote.odb().object_exists(&oid) {
            let (object_type, payload) = local.odb().get_object_content(&oid, None)?;
            remote.odb().hash_object(object_type, &payload)?;
        }
    }

    let remote_ref = format!("refs/heads/{branch}");
    remote.refs().update_ref(&remote_ref, &RefValue::direct(local_oid), true)?;
    Ok(())
}
