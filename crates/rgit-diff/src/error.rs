#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("failed to launch external `{program}`: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Object(#[from] rgit_object::ObjectError),

    #[error(transparent)]
    Odb(#[from] rgit_odb::OdbError),
}
