use anyhow::Result;
use clap::Args;
use rgit_index::{with_index, write_tree};

use super::open_repo;

#[derive(Args)]
pub struct WriteTreeArgs {}

pub fn run(_args: &WriteTreeArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = with_index(&repo.index_path(), |index| write_tree(index, repo.odb()))??;
    println!("{oid}");
    Ok(0)
}
