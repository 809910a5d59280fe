use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct CheckoutArgs {
    /// Branch name or commit oid to check out
    commit: String,
}

pub fn run(args: &CheckoutArgs) -> Result<i32> {
    let repo = open_repo()?;
    rgit_repository::checkout(&repo, &args.commit)?;
    println!("checkout {}, now HEAD is {}", args.commit, args.commit);
    Ok(0)
}
