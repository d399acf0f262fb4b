use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use refdata_core::aggregate;
use refdata_ingest::{ALL_TABLES, default_output_dir, default_source_dir, load_source_tables};
use refdata_model::{AggregationOptions, DutyPolicy};
use refdata_output::{Manifest, render_outputs, write_reference_data};

use crate::cli::BuildArgs;
use crate::summary::apply_table_style;
use crate::types::{BuildResult, FileSummary};

pub fn run_tables() -> Result<()> {
    println!("{}", tables_table());
    Ok(())
}

/// One row per input table: stem, required flag, accepted file names and
/// description.
pub fn table_rows() -> Vec<[String; 4]> {
    ALL_TABLES
        .iter()
        .map(|spec| {
            [
                spec.stem.to_string(),
                if spec.required { "yes" } else { "no" }.to_string(),
                spec.file_names().join(", "),
                spec.description.to_string(),
            ]
        })
        .collect()
}

pub fn tables_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Required", "Files", "Description"]);
    apply_table_style(&mut table);
    for row in table_rows() {
        table.add_row(row.to_vec());
    }
    table
}

pub fn build_options(args: &BuildArgs) -> AggregationOptions {
    let duty_policy = if args.duty_last_wins {
        DutyPolicy::LastWins
    } else {
        DutyPolicy::Unique
    };
    AggregationOptions::new()
        .with_strict_symbols(args.strict_symbols)
        .with_duty_policy(duty_policy)
}

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let source_dir = args.source_dir.clone().unwrap_or_else(default_source_dir);
    let output_dir = args.output_dir.clone().unwrap_or_else(default_output_dir);
    let options = build_options(args);
    let build_span = info_span!("build", source = %source_dir.display());
    let _build_guard = build_span.enter();
    let start = Instant::now();

    let tables = load_source_tables(&source_dir)
        .with_context(|| format!("load source tables from {}", source_dir.display()))?;
    let data = aggregate(&tables, &options).context("aggregate reference data")?;

    let (manifest, manifest_path) = if args.dry_run {
        let rendered = render_outputs(&data).context("render outputs")?;
        info!(files = rendered.len(), "dry run, skipping writes");
        (Manifest::from_files(&rendered), None)
    } else {
        let summary = write_reference_data(&output_dir, &data)
            .with_context(|| format!("write outputs to {}", output_dir.display()))?;
        (summary.manifest, Some(summary.manifest_path))
    };

    let files = FileSummary::from_manifest(&manifest);
    info!(
        files = files.len(),
        duration_ms = start.elapsed().as_millis(),
        "build complete"
    );
    Ok(BuildResult {
        source_dir,
        output_dir,
        files,
        manifest_path,
    })
}
