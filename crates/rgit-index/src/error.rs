#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("path {0:?} does not exist")]
    PathNotFound(std::path::PathBuf),

    #[error("path {0:?} is neither a file nor a directory")]
    UnsupportedPath(std::path::PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Object(#[from] rgit_object::ObjectError),

    #[error(transparent)]
    Odb(#[from] rgit_odb::OdbError),
}
