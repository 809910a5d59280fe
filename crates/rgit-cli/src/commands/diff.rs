use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use clap::Args;
use rgit_diff::diff_trees;
use rgit_index::{get_tree, get_working_tree};

use super::open_repo;

#[derive(Args)]
pub struct DiffArgs {
    /// Commit to diff the working tree against
    #[arg(default_value = "@")]
    commit: String,
}

pub fn run(args: &DiffArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = rgit_repository::get_oid(&repo, &args.commit)?;
    let commit = rgit_repository::get_commit(&repo, oid)?;

    let from_tree: BTreeMap<_, _> = get_tree(repo.odb(), commit.tree)?;
    let to_tree = get_working_tree(repo.root(), repo.odb())?;

    let diff = diff_trees(repo.odb(), &to_tree, &from_tree)?;
    std::io::stdout().write_all(&diff)?;
    Ok(0)
}
