// file: src/cli.rs
// description: commandline arguments and the single-envelope invocation flow
// reference: https://docs.rs/clap

use crate::config::Config;
use crate::error::Result;
use crate::exporter::JsonExporter;
use crate::models::OutputEnvelope;
use crate::pipeline::search_workbook;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "sheet_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Search published projects in a spreadsheet registry", long_about = None)]
pub struct Cli {
    /// Workbook to read (xlsx, xlsm, xlsb, xls, ods)
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Search criteria as JSON: {"date":"...","owner":"...","words":"..."}
    #[arg(long, value_name = "JSON")]
    pub search: Option<String>,

    #[arg(short, long, value_name = "FILE", env = "SHEET_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, action = ArgAction::SetTrue)]
    pub pretty: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Parses `args` and writes exactly one JSON envelope to `out`.
///
/// Argument errors land in the envelope's `error` field. `--help` and
/// `--version` write clap's text instead. The returned error only reports a
/// failure to write `out`.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err)?;
            out.flush()?;
            return Ok(());
        }
        Err(err) => {
            let rendered = err.to_string();
            let message = rendered.lines().next().unwrap_or_default();
            return JsonExporter::new(false).write_to(&OutputEnvelope::failure(message), out);
        }
    };

    crate::utils::logging::init_logger(cli.color, cli.verbose);

    let file = cli.file.unwrap_or_default();
    let search = cli.search.unwrap_or_default();
    info!("Searching workbook: {}", file.display());

    let result = Config::load(cli.config.as_deref())
        .and_then(|config| search_workbook(&config, &file, &search));

    if let Err(e) = &result {
        error!("Search failed: {}", e);
    }

    JsonExporter::new(cli.pretty).write_to(&OutputEnvelope::from_result(result), out)
}
