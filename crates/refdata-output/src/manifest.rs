//! Output manifest: digest and record count per published file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hash::sha256_hex;
use crate::writer::RenderedFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub sha256: String,
    pub records: usize,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Keyed by file name.
    pub files: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn from_files(files: &[RenderedFile]) -> Self {
        let files = files
            .iter()
            .map(|file| {
                (
                    file.name.to_string(),
                    ManifestEntry {
                        sha256: sha256_hex(&file.bytes),
                        records: file.records,
                        bytes: file.bytes.len(),
                    },
                )
            })
            .collect();
        Self { files }
    }
}
