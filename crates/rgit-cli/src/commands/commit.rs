use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short = 'm', long = "message")]
    message: String,
}

pub fn run(args: &CommitArgs) -> Result<i32> {
    let repo = open_repo()?;
    let mut message = args.message.clone();
    message.push('\n');
    let oid = rgit_repository::commit(&repo, message.as_bytes())?;
    println!("commit {oid}");
    Ok(0)
}
