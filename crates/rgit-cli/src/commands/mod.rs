pub mod add;
pub mod branch;
pub mod cat_file;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod fetch;
pub mod hash_object;
pub mod init;
pub mod log;
pub mod merge;
pub mod merge_base;
pub mod push;
pub mod read_tree;
pub mod reset;
pub mod show;
pub mod status;
pub mod tag;
pub mod write_tree;

use anyhow::Result;
use clap::Subcommand;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty repository
    Init(init::InitArgs),
    /// Compute the object id of a file and store it
    HashObject(hash_object::HashObjectArgs),
    /// Print the raw content of an object
    CatFile(cat_file::CatFileArgs),
    /// Write a tree object from the current index
    WriteTree(write_tree::WriteTreeArgs),
    /// Read a tree into the index (and optionally the working tree)
    ReadTree(read_tree::ReadTreeArgs),
    /// Record a commit from the current index
    Commit(commit::CommitArgs),
    /// Show commit history
    Log(log::LogArgs),
    /// Switch HEAD to a branch or commit
    Checkout(checkout::CheckoutArgs),
    /// Create a tag pointing at a commit
    Tag(tag::TagArgs),
    /// List or create branches
    Branch(branch::BranchArgs),
    /// Show the working tree status
    Status(status::StatusArgs),
    /// Move HEAD (and the current branch) to a commit
    Reset(reset::ResetArgs),
    /// Show a commit and its diff against its first parent
    Show(show::ShowArgs),
    /// Diff the working tree against a commit
    Diff(diff::DiffArgs),
    /// Merge a commit into HEAD
    Merge(merge::MergeArgs),
    /// Print the merge base of two commits
    MergeBase(merge_base::MergeBaseArgs),
    /// Fetch refs and objects from a remote repository path
    Fetch(fetch::FetchArgs),
    /// Push a branch to a remote repository path
    Push(push::PushArgs),
    /// Stage paths into the index
    Add(add::AddArgs),
}

/// Open the repository rooted at the current directory.
pub fn open_repo() -> Result<rgit_repository::Repo> {
    Ok(rgit_repository::Repo::open(std::env::current_dir()?))
}

/// Print one commit the way `log`/`show` do: its oid and any ref names
/// pointing at it, then its message indented four spaces.
pub fn print_commit(oid: rgit_hash::ObjectId, commit: &rgit_object::Commit, refs: &[String]) {
    let refs_msg = refs.join(", ");
    println!("commit {oid}: {refs_msg}\n");
    let message = String::from_utf8_lossy(&commit.message);
    for line in message.lines() {
        println!("    {line}");
    }
    println!();
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Init(args) => init::run(args),
        Commands::HashObject(args) => hash_object::run(args),
        Commands::CatFile(args) => cat_file::run(args),
        Commands::WriteTree(args) => write_tree::run(args),
        Commands::ReadTree(args) => read_tree::run(args),
        Commands::Commit(args) => commit::run(args),
        Commands::Log(args) => log::run(args),
        Commands::Checkout(args) => checkout::run(args),
        Commands::Tag(args) => tag::run(args),
        Commands::Branch(args) => branch::run(args),
        Commands::Status(args) => status::run(args),
        Commands::Reset(args) => reset::run(args),
        Commands::Show(args) => show::run(args),
        Commands::Diff(args) => diff::run(args),
        Commands::Merge(args) => merge::run(args),
        Commands::MergeBase(args) => merge_base::run(args),
        Commands::Fetch(args) => fetch::run(args),
        Commands::Push(args) => push::run(args),
        Commands::Add(args) => add::run(args),
    }
}
