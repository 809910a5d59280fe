/// A blob is an opaque byte payload; rgit never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn parse(payload: &[u8]) -> Self {
        Self(payload.to_vec())
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serialize_roundtrip() {
        let blob = Blob::new(b"hello, world\n".to_vec());
        let payload = blob.serialize();
        assert_eq!(Blob::parse(&payload), blob);
    }

    #[test]
    fn empty_blob() {
        let blob = Blob::new(Vec::new());
        assert!(blob.as_bytes().is_empty());
    }

    proptest::proptest! {
        /// Invariant 1 (spec.md §8), restricted to the blob leg: a blob's
        /// payload survives serialize/parse unchanged for any byte string.
        #[test]
        fn roundtrips_for_any_bytes(bytes: Vec<u8>) {
            let blob = Blob::new(bytes);
            let parsed = Blob::parse(&blob.serialize());
            proptest::prop_assert_eq!(parsed, blob);
        }
    }
}
