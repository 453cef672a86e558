use anyhow::Result;
use comfy_table::Table;

use adprep_cli::pipeline::{PrepConfig, run_all};
use adprep_cli::types::RunResult;
use adprep_model::Dataset;

use crate::cli::PrepareArgs;
use crate::summary::apply_table_style;

pub fn run_prepare(args: &PrepareArgs) -> Result<RunResult> {
    let mut config = PrepConfig::from_source_dir(&args.source_dir);
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(dir) = &args.nab_dir {
        config.nab_root = dir.clone();
    }
    if let Some(dir) = &args.yahoo_dir {
        config.yahoo_root = dir.clone();
    }
    if let Some(dir) = &args.kdd_dir {
        config.kdd_root = dir.clone();
    }
    run_all(&config)
}

pub fn run_datasets() {
    let mut table = Table::new();
    table.set_header(vec!["Dataset", "Source folder", "Looks for", "Output"]);
    apply_table_style(&mut table);
    for dataset in Dataset::ALL {
        table.add_row(vec![
            dataset.name(),
            dataset.source_subdir(),
            dataset.source_pattern(),
            dataset.output_file(),
        ]);
    }
    println!("{table}");
}
