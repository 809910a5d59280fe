use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rgit_index::{add, with_index};

use super::open_repo;

#[derive(Args)]
pub struct AddArgs {
    /// Files or directories to stage
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

pub fn run(args: &AddArgs) -> Result<i32> {
    let repo = open_repo()?;
    with_index(&repo.index_path(), |index| add(repo.root(), &args.paths, repo.odb(), index))??;
    Ok(0)
}
