use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct ResetArgs {
    /// Commit to move HEAD (and the current branch) to
    commit: String,
    /// Also materialize the commit's tree into the index and working tree
    #[arg(long)]
    hard: bool,
}

pub fn run(args: &ResetArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = rgit_repository::get_oid(&repo, &args.commit)?;
    rgit_repository::reset(&repo, oid, args.hard)?;
    Ok(0)
}
