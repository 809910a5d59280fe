use std::io::Write;

use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct CatFileArgs {
    /// Object id to print
    oid: String,
}

pub fn run(args: &CatFileArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = rgit_repository::get_oid(&repo, &args.oid)?;
    let (_, content) = repo.odb().get_object_content(&oid, None)?;

    std::io::stdout().write_all(&content)?;
    Ok(0)
}
