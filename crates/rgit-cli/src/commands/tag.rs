use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct TagArgs {
    /// Tag name to create
    tag_name: String,
    /// Commit to tag
    #[arg(default_value = "@")]
    commit: String,
}

pub fn run(args: &TagArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = rgit_repository::get_oid(&repo, &args.commit)?;
    rgit_repository::create_tag(&repo, &args.tag_name, oid)?;
    println!("create tag: {} for commit: {oid}", args.tag_name);
    Ok(0)
}
