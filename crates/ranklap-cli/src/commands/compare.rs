use crate::cli::{Cli, OutputFormat};
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ranklap::{
    core::ranking::RankedList,
    core::report::{ReportRow, write_delimited, write_plain},
    engine::progress::ProgressReporter,
    workflows,
};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let compare_config = config::build_config(cli)?;

    info!("Loading ranking from {:?}", &cli.ranking1);
    let list1 = load_ranking(&cli.ranking1)?;
    info!("Loading ranking from {:?}", &cli.ranking2);
    let list2 = load_ranking(&cli.ranking2)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the comparison workflow...");
    let result = workflows::compare::run(&list1, &list2, &compare_config, &reporter)?;

    info!(
        min_len = result.min_len,
        shared_count = result.shared_count,
        seed = result.seed,
        "Workflow finished with {} report row(s).",
        result.rows.len()
    );

    match &cli.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            write_report(&result.rows, cli.format, &mut file)?;
            println!(
                "✓ Report ({} row(s), seed {}) written to: {}",
                result.rows.len(),
                result.seed,
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_report(&result.rows, cli.format, &mut stdout)?;
        }
    }

    Ok(())
}

fn load_ranking(path: &Path) -> Result<RankedList> {
    RankedList::from_path(path).map_err(|source| CliError::RankingParsing {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(rows: &[ReportRow], format: OutputFormat, writer: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Plain => write_plain(rows, writer)?,
        OutputFormat::Delimited => write_delimited(rows, writer)?,
    }
    Ok(())
}
