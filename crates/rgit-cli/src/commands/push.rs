use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct PushArgs {
    /// Path to the remote repository (a plain directory, not a URL)
    remote_path: PathBuf,
    /// Local branch to push
    branch: String,
}

pub fn run(args: &PushArgs) -> Result<i32> {
    let repo = open_repo()?;
    rgit_repository::push(&repo, &args.remote_path, &args.branch)?;
    println!("pushed {} to {}", args.branch, args.remote_path.display());
    Ok(0)
}
