use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct FetchArgs {
    /// Path to the remote repository (a plain directory, not a URL)
    remote_path: PathBuf,
}

pub fn run(args: &FetchArgs) -> Result<i32> {
    let repo = open_repo()?;
    rgit_repository::fetch(&repo, &args.remote_path)?;
    println!("fetched from {}", args.remote_path.display());
    Ok(0)
}
