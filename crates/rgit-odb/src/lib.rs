//! Object database: a single-file-per-object store under `<repo>/objects/`.
//!
//! Every object lives uncompressed at `objects/<oid>` with the literal
//! `"{type}\0{payload}"` bytes on disk — the same bytes that are hashed to
//! produce the oid in the first place. There is no fan-out directory and
//! no packfile tier; this store always holds the full object set loose.

mod error;

pub use error::OdbError;

use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use rgit_hash::{hash_object as hash_payload, ObjectId};
use rgit_object::ObjectType;

/// The object store rooted at a repository's `objects/` directory.
pub struct ObjectDatabase {
    objects_dir: PathBuf,
}

impl ObjectDatabase {
    /// Open (without creating) the object store at `objects_dir`.
    pub fn open(objects_dir: impl Into<PathBuf>) -> Self {
        Self {
            objects_dir: objects_dir.into(),
        }
    }

    /// Create the `objects/` directory if it doesn't already exist.
    pub fn create(&self) -> Result<(), OdbError> {
        fs::create_dir_all(&self.objects_dir)?;
        Ok(())
    }

    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.objects_dir.join(oid.to_hex())
    }

    /// Hash `payload` as `object_type`, write it to the store, and return
    /// its oid. Writing is idempotent: re-hashing identical content
    /// produces the same oid and simply overwrites the same file.
    pub fn hash_object(&self, object_type: ObjectType, payload: &[u8]) -> Result<ObjectId, OdbError> {
        let oid = hash_payload(object_type.as_str(), payload);
        let mut framed = Vec::with_capacity(object_type.as_str().len() + 1 + payload.len());
        framed.extend_from_slice(object_type.as_str().as_bytes());
        framed.push(0);
        framed.extend_from_slice(payload);

        fs::create_dir_all(&self.objects_dir)?;
        fs::write(self.object_path(&oid), &framed)?;
        Ok(oid)
    }

    /// Read an object's payload, checking it against `expected` if given.
    pub fn get_object_content(
        &self,
        oid: &ObjectId,
        expected: Option<ObjectType>,
    ) -> Result<(ObjectType, Vec<u8>), OdbError> {
        let path = self.object_path(oid);
        let mut raw = Vec::new();
        fs::File::open(&path)
            .map_err(|e| map_not_found(e, *oid))?
            .read_to_end(&mut raw)?;

        let split = raw
            .iter()
            .position(|b| *b == 0)
            .ok_or_else(|| OdbError::MalformedObject {
                oid: *oid,
                reason: "missing type separator".to_string(),
            })?;
        let type_str = std::str::from_utf8(&raw[..split]).map_err(|_| OdbError::MalformedObject {
            oid: *oid,
            reason: "object type is not valid UTF-8".to_string(),
        })?;
        let object_type = ObjectType::from_str(type_str).map_err(|_| OdbError::MalformedObject {
            oid: *oid,
            reason: format!("unknown object type {type_str:?}"),
        })?;

        if let Some(expected) = expected {
            if expected != object_type {
                return Err(OdbError::TypeMismatch {
                    oid: *oid,
                    expected,
                    actual: object_type,
                });
            }
        }

        Ok((object_type, raw[split + 1..].to_vec()))
    }

    /// Does an object with this oid exist in the store?
    pub fn object_exists(&self, oid: &ObjectId) -> bool {
        self.object_path(oid).is_file()
    }

    /// Iterate over every oid currently in the store.
    pub fn iter_oids(&self) -> Result<Vec<ObjectId>, OdbError> {
        let mut oids = Vec::new();
        let entries = match fs::read_dir(&self.objects_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(oids),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if let Some(oid) = ObjectId::parse_loose(name) {
                    oids.push(oid);
                }
            }
        }
        Ok(oids)
    }
}

fn map_not_found(e: std::io::Error, oid: ObjectId) -> OdbError {
    if e.kind() == std::io::ErrorKind::NotFound {
        OdbError::NotFound(oid)
    } else {
        OdbError::Io(e)
    }
}
