use rgit_hash::ObjectId;

/// The value stored at a ref path: either a raw object id, or the name
/// of another ref to follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefValue {
    Direct(ObjectId),
    Symbolic(String),
}

impl RefValue {
    pub fn direct(oid: ObjectId) -> Self {
        Self::Direct(oid)
    }

    pub fn symbolic(target: impl Into<String>) -> Self {
        Self::Symbolic(target.into())
    }

    pub fn as_oid(&self) -> Option<ObjectId> {
        match self {
            Self::Direct(oid) => Some(*oid),
            Self::Symbolic(_) => None,
        }
    }

    pub(crate) const SYMREF_PREFIX: &'static str = "ref: ";

    pub(crate) fn to_file_contents(&self) -> String {
        match self {
            Self::Direct(oid) => oid.to_hex(),
            Self::Symbolic(target) => format!("{}{target}", Self::SYMREF_PREFIX),
        }
    }

    pub(crate) fn from_file_contents(contents: &str) -> Result<Self, crate::RefError> {
        let contents = contents.trim();
        match contents.strip_prefix(Self::SYMREF_PREFIX) {
            Some(target) => Ok(Self::Symbolic(target.to_string())),
            None => ObjectId::from_hex(contents)
                .map(Self::Direct)
                .map_err(|_| crate::RefError::MalformedRef(contents.to_string())),
        }
    }
}
