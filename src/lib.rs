pub mod cli;
pub mod compat;
pub mod config;
pub mod layout;
pub mod models;

pub use layout::{LayoutError, compute_layout};
pub use models::structs::{Column, ColumnPair, LayoutInput, OperatorGroup, Table, TableLayout};

use std::io::Write;

/// Command line entrypoint: read a layout document, write the layout report.
pub fn run() -> Result<(), LayoutError> {
    dotenv::dotenv().ok();
    let prefs = config::ConfigStore::new().load();
    let mut builder = env_logger::Builder::from_default_env();
    // RUST_LOG takes precedence over the stored filter
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_module("composer_layout", prefs.log_level());
    }
    let _ = builder.is_test(false).try_init();
    log::debug!("data directory: {}", config::get_data_dir().display());

    let args = cli::parse_args(std::env::args().skip(1))?;
    let input = LayoutInput::from_path(&args.input)?;
    if prefs.validate_input {
        input.validate()?;
    }
    log::info!(
        "Loaded {} tables and {} operator groups from {}",
        input.tables.len(),
        input.operator_groups.len(),
        args.input.display()
    );

    let report = cli::build_report(&input);
    let rendered = cli::render_report(&report, prefs.pretty_output && !args.compact)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            log::info!("Wrote layout report to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
        }
    }
    Ok(())
}
