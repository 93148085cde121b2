//! Command-line interface for scoring Emergency Interim Housing sites.
//!
//! Commands read JSON datasets, run the scoring engine and print JSON to
//! stdout. Every option can also come from a configuration file or an
//! `EIH_CMDS_<COMMAND>_<OPTION>` environment variable.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod coverage;
mod error;
mod feasibility;
mod rank;

pub use error::CliError;

use coverage::CoverageArgs;
use feasibility::FeasibilityArgs;
use rank::RankArgs;

pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_DEMOGRAPHICS: &str = "demographics";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_TRACT_LOOKUP: &str = "tract-lookup";
pub(crate) const ARG_TRACT_INDEX: &str = "tract-index";
pub(crate) const ARG_SHELTERS: &str = "shelters";
pub(crate) const ARG_PIT_COUNTS: &str = "pit-counts";
pub(crate) const ARG_RADIUS_KM: &str = "radius-km";

pub(crate) const ENV_RANK_CANDIDATES: &str = "EIH_CMDS_RANK_CANDIDATES";
pub(crate) const ENV_RANK_DEMOGRAPHICS: &str = "EIH_CMDS_RANK_DEMOGRAPHICS";
pub(crate) const ENV_RANK_TRACT_INDEX: &str = "EIH_CMDS_RANK_TRACT_INDEX";
pub(crate) const ENV_FEASIBILITY_CANDIDATES: &str = "EIH_CMDS_FEASIBILITY_CANDIDATES";
pub(crate) const ENV_COVERAGE_SHELTERS: &str = "EIH_CMDS_COVERAGE_SHELTERS";
pub(crate) const ENV_COVERAGE_PIT_COUNTS: &str = "EIH_CMDS_COVERAGE_PIT_COUNTS";

/// Run the EIH CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, inputs cannot be loaded
/// or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Rank(args) => rank::run_rank_with(args, &mut stdout),
        Command::Feasibility(args) => feasibility::run_feasibility_with(args, &mut stdout),
        Command::Coverage(args) => coverage::run_coverage_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "eih",
    about = "Score candidate sites for Emergency Interim Housing",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate sites by weighted suitability.
    Rank(RankArgs),
    /// Screen candidate sites for build feasibility.
    Feasibility(FeasibilityArgs),
    /// Summarise shelter coverage and overlap with candidate sites.
    Coverage(CoverageArgs),
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match eih_data::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
