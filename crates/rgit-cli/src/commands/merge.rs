use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct MergeArgs {
    /// Name of the commit to merge into HEAD
    commit: String,
}

pub fn run(args: &MergeArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = rgit_repository::get_oid(&repo, &args.commit)?;
    match rgit_repository::merge(&repo, oid)? {
        Some(merge_commit) => println!("merge {oid}: created merge commit {merge_commit}"),
        None => println!("merge {oid}: fast-forwarded"),
    }
    Ok(0)
}
