#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("symbolic reference chain starting at {0:?} did not resolve (cycle or too deep)")]
    Cycle(String),

    #[error("malformed ref contents {0:?}: neither a 40-hex oid nor \"ref: <name>\"")]
    MalformedRef(String),

    #[error("refusing to write a symbolic value to {0:?} with deref=true")]
    SymbolicWriteWithDeref(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
