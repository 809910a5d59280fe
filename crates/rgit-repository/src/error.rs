/// Top-level error for the repository layer: wraps every leaf crate's own
/// error enum (the teacher's `RevWalkError`/`RefError`/`ObjectError`
/// per-crate-then-wrapped pattern) plus the repository-specific failure
/// modes named in spec §7 that have no single leaf-crate home.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("couldn't get oid from name {0:?}")]
    UnknownName(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Hash(#[from] rgit_hash::HashError),

    #[error(transparent)]
    Object(#[from] rgit_object::ObjectError),

    #[error(transparent)]
    Odb(#[from] rgit_odb::OdbError),

    #[error(transparent)]
    Ref(#[from] rgit_ref::RefError),

    #[error(transparent)]
    Index(#[from] rgit_index::IndexError),

    #[error(transparent)]
    Diff(#[from] rgit_diff::DiffError),

    #[error(transparent)]
    RevWalk(#[from] rgit_revwalk::RevWalkError),
}
