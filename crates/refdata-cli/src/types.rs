use std::path::PathBuf;

use refdata_output::Manifest;

#[derive(Debug)]
pub struct BuildResult {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<FileSummary>,
    /// `None` for a dry run.
    pub manifest_path: Option<PathBuf>,
}

impl BuildResult {
    pub fn dry_run(&self) -> bool {
        self.manifest_path.is_none()
    }

    pub fn total_records(&self) -> usize {
        self.files.iter().map(|file| file.records).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub records: usize,
    pub bytes: usize,
    pub sha256: String,
}

impl FileSummary {
    /// One entry per manifest file, in file-name order.
    pub fn from_manifest(manifest: &Manifest) -> Vec<Self> {
        manifest
            .files
            .iter()
            .map(|(name, entry)| Self {
                name: name.clone(),
                records: entry.records,
                bytes: entry.bytes,
                sha256: entry.sha256.clone(),
            })
            .collect()
    }
}
