use anyhow::Result;
use clap::Args;
use rgit_index::read_tree;

use super::open_repo;

#[derive(Args)]
pub struct ReadTreeArgs {
    /// Tree object id (or a name that resolves to one)
    oid: String,
}

pub fn run(args: &ReadTreeArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = rgit_repository::get_oid(&repo, &args.oid)?;
    read_tree(&repo.index_path(), repo.root(), repo.odb(), oid, false)?;
    Ok(0)
}
