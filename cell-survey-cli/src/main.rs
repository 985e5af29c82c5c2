//! Command line viewer for cellular signal surveys.
//! Loads a survey, narrows and orders it, then prints the resulting view.
mod cli;
mod table;

use cli::{Cli, CliError};

use cell_survey::prelude::{Record, Survey};
use env_logger::{Builder, Target};
use std::io::Write;

#[macro_use]
extern crate log;

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut survey = Survey::new();

    let path = cli.input_path();
    let stats = *survey.load_from_path(path)?;
    info!("\"{}\": {}", path.display(), stats);

    let mut stdout = std::io::stdout().lock();

    if cli.quiet() {
        writeln!(stdout, "{}", stats)?;
        return Ok(());
    }

    let technology = cli.technology()?;
    let lac = cli.lac();
    let filtered = technology.is_some() || lac.is_some();
    if filtered {
        survey.apply_filters(technology.unwrap_or_default(), lac.unwrap_or(""));
    }

    if let Some(cid) = cli.cid() {
        if cid.trim().is_empty() {
            warn!("blank CID search ignored");
        } else if filtered {
            warn!("CID search applies to the whole survey: --tech/--lac are discarded");
        }
        survey.search_by_cid(cid);
    }

    if cli.sort() {
        survey.sort_by_signal();
    }

    let view = survey.view();
    let limit = cli.limit().unwrap_or(view.len());
    debug!("displaying {}/{} rows", view.len().min(limit), survey.len());

    let rows = view.iter().take(limit).collect::<Vec<&Record>>();
    if cli.json() {
        serde_json::to_writer_pretty(&mut stdout, &rows)?;
        writeln!(stdout)?;
    } else {
        table::render(&mut stdout, &rows)?;
    }
    Ok(())
}

pub fn main() {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error loading CSV:\n{}", e);
        std::process::exit(1);
    }
}
