use std::path::PathBuf;

/// Overrides the data root for every command that does not take explicit
/// directories.
pub const DATA_DIR_ENV_VAR: &str = "REFDATA_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";
const CLEANSED_DIR: &str = "cleansed";
const FINAL_DIR: &str = "final";

pub fn default_data_root() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV_VAR) {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

/// `<root>/cleansed`
pub fn default_source_dir() -> PathBuf {
    default_data_root().join(CLEANSED_DIR)
}

/// `<root>/final`
pub fn default_output_dir() -> PathBuf {
    default_data_root().join(FINAL_DIR)
}
