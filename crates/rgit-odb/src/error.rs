use rgit_hash::ObjectId;
use rgit_object::ObjectType;

#[derive(Debug, thiserror::Error)]
pub enum OdbError {
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    #[error("object {oid} has wrong type: expected {expected}, found {actual}")]
    TypeMismatch {
        oid: ObjectId,
        expected: ObjectType,
        actual: ObjectType,
    },

    #[error("malformed object {oid}: {reason}")]
    MalformedObject { oid: ObjectId, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
