use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct BranchArgs {
    /// Branch to create; omit to list existing branches
    branch_name: Option<String>,
    /// Commit the new branch should start at
    #[arg(default_value = "@")]
    start_point: String,
}

pub fn run(args: &BranchArgs) -> Result<i32> {
    let repo = open_repo()?;

    match &args.branch_name {
        None => {
            let current = repo.current_branch()?;
            let mut names = rgit_repository::iter_branch_names(&repo)?;
            names.sort();
            for name in names {
                let marker = if current.as_deref() == Some(name.as_str()) { "*" } else { " " };
                println!("{marker} {name}");
            }
        }
        Some(branch_name) => {
            let start = rgit_repository::get_oid(&repo, &args.start_point)?;
            rgit_repository::create_branch(&repo, branch_name, Some(start))?;
            println!("create branch {branch_name} at {}", &start.to_hex()[..10]);
        }
    }
    Ok(0)
}
