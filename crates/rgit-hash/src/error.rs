/// Errors produced by object-id parsing and hashing.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("invalid hex character '{character}' at position {position}")]
    InvalidHex { position: usize, character: char },

    #[error("invalid object id length: expected 40 hex characters, got {actual}")]
    InvalidLength { actual: usize },
}
