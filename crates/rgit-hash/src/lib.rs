//! Object identifiers and hashing for rgit.
//!
//! rgit content-addresses every object with the SHA-1 hex digest of its
//! `"{type}\0{payload}"` serialized bytes. This crate owns the [`ObjectId`]
//! type and the hasher that produces it.

mod error;
mod hasher;
mod hex;
mod oid;

pub use error::HashError;
pub use hasher::hash_object;
pub use oid::ObjectId;
