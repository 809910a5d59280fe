#[derive(Debug, thiserror::Error)]
pub enum RevWalkError {
    #[error("no common ancestor between {a} and {b}")]
    NoCommonAncestor { a: rgit_hash::ObjectId, b: rgit_hash::ObjectId },

    #[error(transparent)]
    Odb(#[from] rgit_odb::OdbError),

    #[error(transparent)]
    Object(#[from] rgit_object::ObjectError),
}
