//! Loading of cleansed reference tables.
//!
//! The upstream cleanse stage leaves one file per table in a directory;
//! [`load_source_tables`] reads them into [`refdata_model::SourceTables`].

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;
pub mod tables;

pub use error::{IngestError, Result};
pub use loader::{load_source_tables, locate_table, read_table};
pub use paths::{DATA_DIR_ENV_VAR, default_data_root, default_output_dir, default_source_dir};
pub use tables::{ALL_TABLES, TableFormat, TableSpec};
