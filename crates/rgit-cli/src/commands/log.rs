use std::collections::HashMap;

use anyhow::Result;
use clap::Args;
use rgit_revwalk::iter_commits_and_parents;

use super::{open_repo, print_commit};

#[derive(Args)]
pub struct LogArgs {
    /// Name to start the walk from
    #[arg(default_value = "@")]
    name: String,
}

pub fn run(args: &LogArgs) -> Result<i32> {
    let repo = open_repo()?;
    let start = rgit_repository::get_oid(&repo, &args.name)?;

    let mut commit_to_refs: HashMap<rgit_hash::ObjectId, Vec<String>> = HashMap::new();
    for (ref_name, value) in repo.refs().iter_refs("", true)? {
        if let Some(oid) = value.as_oid() {
            commit_to_refs.entry(oid).or_default().push(ref_name);
        }
    }

    for oid in iter_commits_and_parents(repo.odb(), &[start])? {
        let commit = rgit_repository::get_commit(&repo, oid)?;
        let refs = commit_to_refs.get(&oid).cloned().unwrap_or_default();
        print_commit(oid, &commit, &refs);
    }
    Ok(0)
}
