use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use liquorstore_cli::{Cli, execute};
use liquorstore_infra::{LoadOutcome, LoaderConfig, load_from_config};

fn main() -> ExitCode {
    liquorstore_observability::init();

    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<String> {
    let command = Cli::parse().into_command()?;

    let config = LoaderConfig::from_env();
    tracing::info!(
        catalog = %config.catalog_path.display(),
        quantities = %config.quantities_path.display(),
        debug = config.debug,
        "loading inventory"
    );

    // An inconsistent catalog is never served: any load failure ends the run.
    let LoadOutcome { mut store, report } = load_from_config(&config).with_context(|| {
        format!(
            "failed to load inventory from {} and {}",
            config.catalog_path.display(),
            config.quantities_path.display()
        )
    })?;

    tracing::info!(
        items = report.items_created,
        duplicates = report.duplicates_suppressed,
        quantity_records = report.quantity_records,
        units = report.units_loaded,
        "inventory loaded"
    );

    Ok(execute(&mut store, &report, command)?)
}
