use anyhow::Result;
use clap::Args;
use rgit_revwalk::get_merge_base;

use super::open_repo;

#[derive(Args)]
pub struct MergeBaseArgs {
    /// First commit name
    commit_a: String,
    /// Second commit name
    commit_b: String,
}

pub fn run(args: &MergeBaseArgs) -> Result<i32> {
    let repo = open_repo()?;
    let a = rgit_repository::get_oid(&repo, &args.commit_a)?;
    let b = rgit_repository::get_oid(&repo, &args.commit_b)?;
    let base = get_merge_base(repo.odb(), a, b)?;
    println!("{base}");
    Ok(0)
}
