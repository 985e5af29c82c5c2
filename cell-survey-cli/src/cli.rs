use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use std::{path::PathBuf, str::FromStr};
use thiserror::Error;

use cell_survey::prelude::{ParsingError, Technology};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Survey(#[from] cell_survey::Error),
    #[error("{0}")]
    Technology(#[from] ParsingError),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Stdio(#[from] std::io::Error),
}

pub struct Cli {
    /// Arguments passed by user
    matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self::from_matches(Self::command().get_matches())
    }
    fn from_matches(matches: ArgMatches) -> Self {
        Self { matches }
    }
    fn command() -> Command {
        Command::new("cellsurvey")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Cellular signal survey viewer")
            .long_about(
                "cellsurvey loads a comma separated signal survey
(Latitude,Longitude,Altitude,MCC,MNC,LAC,CID,Signal,Type,Subtype,ARFCN,PSC),
annotates each row with the nearest Latvian city and prints the requested view.",
            )
            .arg_required_else_help(true)
            .color(ColorChoice::Always)
            .next_help_heading("Input")
            .arg(
                Arg::new("filepath")
                    .short('f')
                    .long("fp")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf))
                    .required(true)
                    .help("Survey file. Files terminated by .gz are decompressed on the fly."),
            )
            .next_help_heading("View")
            .arg(
                Arg::new("tech")
                    .short('t')
                    .long("tech")
                    .value_name("TECH")
                    .help("Only show given technology: ALL, LTE, 5G, NR, WCDMA, GSM or UMTS (case insensitive)."),
            )
            .arg(
                Arg::new("lac")
                    .short('l')
                    .long("lac")
                    .value_name("LAC")
                    .help("Only show given Location Area Code (exact match)."),
            )
            .arg(
                Arg::new("cid")
                    .short('c')
                    .long("cid")
                    .value_name("CID")
                    .help("Only show given Cell Identifier. See --help.")
                    .long_help(
                        "Only show given Cell Identifier (exact match).
The search always applies to the whole survey: it replaces --tech and --lac.
A blank value is ignored.",
                    ),
            )
            .arg(
                Arg::new("sort")
                    .short('s')
                    .long("sort")
                    .action(ArgAction::SetTrue)
                    .help("Sort displayed rows by increasing signal strength."),
            )
            .next_help_heading("Output")
            .arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("quiet")
                    .help("Print rows as JSON instead of a text table."),
            )
            .arg(
                Arg::new("limit")
                    .short('n')
                    .long("limit")
                    .value_name("N")
                    .value_parser(value_parser!(usize))
                    .help("Print at most N rows."),
            )
            .arg(
                Arg::new("quiet")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue)
                    .help("Only print loading statistics."),
            )
    }
    pub fn input_path(&self) -> &PathBuf {
        self.matches
            .get_one::<PathBuf>("filepath")
            .expect("--fp is required")
    }
    /// Technology selector, if any
    pub fn technology(&self) -> Result<Option<Technology>, CliError> {
        match self.matches.get_one::<String>("tech") {
            Some(tech) => Ok(Some(Technology::from_str(tech)?)),
            None => Ok(None),
        }
    }
    /// LAC selector, if any
    pub fn lac(&self) -> Option<&str> {
        self.matches.get_one::<String>("lac").map(|s| s.trim())
    }
    pub fn cid(&self) -> Option<&str> {
        self.matches.get_one::<String>("cid").map(|s| s.as_str())
    }
    pub fn sort(&self) -> bool {
        self.matches.get_flag("sort")
    }
    pub fn json(&self) -> bool {
        self.matches.get_flag("json")
    }
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }
    pub fn limit(&self) -> Option<usize> {
        self.matches.get_one::<usize>("limit").copied()
    }
}
