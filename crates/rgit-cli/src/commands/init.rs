use anyhow::Result;
use clap::Args;
use rgit_repository::{Repo, RGIT_DIR};

#[derive(Args)]
pub struct InitArgs {}

pub fn run(_args: &InitArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    Repo::init(cwd.clone())?;
    println!("initialize rgit repo in {}/{RGIT_DIR}", cwd.display());
    Ok(0)
}
