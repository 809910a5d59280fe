use rgit_hash::ObjectId;

use crate::{RepoError, Repo};

/// Resolve a user-supplied name to an oid: `@` is an alias for `HEAD`;
/// otherwise try `name`, `refs/<name>`, `refs/tags/<name>`,
/// `refs/heads/<name>` as direct (deref'd) ref lookups in turn, then fall
/// back to treating `name` as a raw 40-hex oid.
pub fn get_oid(repo: &Repo, name: &str) -> Result<ObjectId, RepoError> {
    let name = if name == "@" { "HEAD" } else { name };

    let candidates = [
        name.to_string(),
        format!("refs/{name}"),
        format!("refs/tags/{name}"),
        format!("refs/heads/{name}"),
    ];
    for candidate in candidates {
        if let Some(oid) = repo.refs().get_ref_value(&candidate, true)?.and_then(|v| v.as_oid()) {
            return Ok(oid);
        }
    }

    ObjectId::from_hex(name).map_err(|_| RepoError::UnknownName(name.to_string()))
}
