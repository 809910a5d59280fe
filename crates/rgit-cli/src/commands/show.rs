use std::io::Write;

use anyhow::Result;
use clap::Args;
use rgit_diff::diff_trees;
use rgit_index::get_tree;

use super::{open_repo, print_commit};

#[derive(Args)]
pub struct ShowArgs {
    /// Commit to show
    #[arg(default_value = "@")]
    commit: String,
}

pub fn run(args: &ShowArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = rgit_repository::get_oid(&repo, &args.commit)?;
    let commit = rgit_repository::get_commit(&repo, oid)?;
    print_commit(oid, &commit, &[]);

    let to_tree = get_tree(repo.odb(), commit.tree)?;
    let from_tree = match commit.parents.first() {
        Some(&parent) => get_tree(repo.odb(), rgit_repository::get_commit(&repo, parent)?.tree)?,
        None => Default::default(),
    };

    let diff = diff_trees(repo.odb(), &to_tree, &from_tree)?;
    std::io::stdout().write_all(&diff)?;
    Ok(0)
}
