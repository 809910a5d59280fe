use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use rgit_diff::iter_changed_files;
use rgit_index::{get_tree, get_working_tree, with_index};

use super::open_repo;

#[derive(Args)]
pub struct StatusArgs {}

pub fn run(_args: &StatusArgs) -> Result<i32> {
    let repo = open_repo()?;

    match repo.current_branch()? {
        Some(branch) => println!("On branch {branch}"),
        None => {
            let head = rgit_repository::get_oid(&repo, "@")?;
            println!("HEAD detached at {}", &head.to_hex()[..10]);
        }
    }

    if let Some(merge_head) = repo.refs().get_ref_value("MERGE_HEAD", true)?.and_then(|v| v.as_oid()) {
        println!("Merging with {}", &merge_head.to_hex()[..10]);
    }

    let head_tree = match repo.refs().get_ref_value("HEAD", true)?.and_then(|v| v.as_oid()) {
        Some(head_oid) => get_tree(repo.odb(), rgit_repository::get_commit(&repo, head_oid)?.tree)?,
        None => Default::default(),
    };
    let staged_tree: BTreeMap<_, _> =
        with_index(&repo.index_path(), |index| index.iter().map(|(p, o)| (p.to_string(), o)).collect())?;

    println!("\nChanges to be committed:");
    for (path, kind) in iter_changed_files(&staged_tree, &head_tree) {
        println!("  {kind:?} {path}");
    }

    let working_tree = get_working_tree(repo.root(), repo.odb())?;
    println!("\nChanges not staged for commit:");
    for (path, kind) in iter_changed_files(&working_tree, &head_tree) {
        println!("  {kind:?} {path}");
    }

    Ok(0)
}
