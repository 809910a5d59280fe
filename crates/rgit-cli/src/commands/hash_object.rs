use anyhow::Result;
use clap::Args;
use rgit_object::ObjectType;

use super::open_repo;

#[derive(Args)]
pub struct HashObjectArgs {
    /// File to hash and store as a blob
    file_path: String,
}

pub fn run(args: &HashObjectArgs) -> Result<i32> {
    let repo = open_repo()?;
    let content = std::fs::read(&args.file_path)?;
    let oid = repo.odb().hash_object(ObjectType::Blob, &content)?;
    println!("hash object {} -> {oid}", args.file_path);
    Ok(0)
}
