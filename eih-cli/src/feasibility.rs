//! Feasibility command implementation for the EIH CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use eih_core::{FeasibilityReport, Location, ProposedSites, evaluate_feasibility};
use eih_data::load_candidates;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CANDIDATES, CliError, ENV_FEASIBILITY_CANDIDATES, require_existing, write_json};

/// CLI arguments for the `feasibility` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Screen each candidate site for flood risk, soil stability \
                 and terrain slope, and estimate construction cost.",
    about = "Screen candidate sites for build feasibility"
)]
#[ortho_config(prefix = "EIH")]
pub(crate) struct FeasibilityArgs {
    /// Path to a JSON array of candidate sites.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
}

impl FeasibilityArgs {
    pub(crate) fn into_config(self) -> Result<FeasibilityConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FeasibilityConfig::try_from(merged)
    }
}

/// Resolved `feasibility` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeasibilityConfig {
    pub(crate) candidates: Utf8PathBuf,
}

impl TryFrom<FeasibilityArgs> for FeasibilityConfig {
    type Error = CliError;

    fn try_from(args: FeasibilityArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_FEASIBILITY_CANDIDATES,
        })?;
        Ok(Self { candidates })
    }
}

/// One row of `feasibility` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SiteFeasibility {
    pub(crate) site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) address: Option<String>,
    #[serde(flatten)]
    pub(crate) location: Location,
    #[serde(flatten)]
    pub(crate) report: FeasibilityReport,
}

pub(crate) fn run_feasibility_with(
    args: FeasibilityArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.candidates, ARG_CANDIDATES)?;
    let sites = load_candidates(&config.candidates)?;
    write_json(writer, &screen_sites(&sites))
}

pub(crate) fn screen_sites(sites: &ProposedSites) -> Vec<SiteFeasibility> {
    sites
        .labelled()
        .map(|(label, site)| SiteFeasibility {
            site: label,
            address: site.address.clone(),
            location: site.location,
            report: evaluate_feasibility(site.location),
        })
        .collect()
}
