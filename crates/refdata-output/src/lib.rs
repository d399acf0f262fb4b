//! Serialization sink for aggregated reference data.

#![deny(unsafe_code)]

pub mod error;
pub mod hash;
pub mod manifest;
pub mod writer;

pub use error::{OutputError, Result};
pub use hash::sha256_hex;
pub use manifest::{Manifest, ManifestEntry};
pub use writer::{
    MANIFEST_FILE, RenderedFile, WriteSummary, WrittenFile, render_outputs, write_atomic,
    write_reference_data,
};
