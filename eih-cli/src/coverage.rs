//! Coverage command implementation for the EIH CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use eih_core::{
    CoverageStats, Location, ProposedSites, SERVICE_RADIUS_KM, Shelter, shelters_within,
};
use eih_data::{load_candidates, load_pit_counts, load_shelters};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CANDIDATES, ARG_PIT_COUNTS, ARG_RADIUS_KM, ARG_SHELTERS, CliError, ENV_COVERAGE_PIT_COUNTS,
    ENV_COVERAGE_SHELTERS, require_existing, write_json,
};

/// CLI arguments for the `coverage` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Summarise shelter capacity, occupancy and the unsheltered \
                 share of the point-in-time count. With --candidates, also \
                 list the existing shelters within the service radius of \
                 each candidate site.",
    about = "Summarise shelter coverage"
)]
#[ortho_config(prefix = "EIH")]
pub(crate) struct CoverageArgs {
    /// Path to a JSON array of existing shelters.
    #[arg(long = ARG_SHELTERS, value_name = "path")]
    #[serde(default)]
    pub(crate) shelters: Option<Utf8PathBuf>,
    /// Path to a JSON array of point-in-time counts.
    #[arg(long = ARG_PIT_COUNTS, value_name = "path")]
    #[serde(default)]
    pub(crate) pit_counts: Option<Utf8PathBuf>,
    /// Optional JSON array of candidate sites to check for overlap.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Service radius around each candidate, in kilometres (default one mile).
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
}

impl CoverageArgs {
    pub(crate) fn into_config(self) -> Result<CoverageConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CoverageConfig::try_from(merged)
    }
}

/// Resolved `coverage` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CoverageConfig {
    pub(crate) shelters: Utf8PathBuf,
    pub(crate) pit_counts: Utf8PathBuf,
    pub(crate) candidates: Option<Utf8PathBuf>,
    pub(crate) radius_km: f64,
}

impl CoverageConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.shelters, ARG_SHELTERS)?;
        require_existing(&self.pit_counts, ARG_PIT_COUNTS)?;
        if let Some(candidates) = &self.candidates {
            require_existing(candidates, ARG_CANDIDATES)?;
        }
        Ok(())
    }
}

impl TryFrom<CoverageArgs> for CoverageConfig {
    type Error = CliError;

    fn try_from(args: CoverageArgs) -> Result<Self, Self::Error> {
        let shelters = args.shelters.ok_or(CliError::MissingArgument {
            field: ARG_SHELTERS,
            env: ENV_COVERAGE_SHELTERS,
        })?;
        let pit_counts = args.pit_counts.ok_or(CliError::MissingArgument {
            field: ARG_PIT_COUNTS,
            env: ENV_COVERAGE_PIT_COUNTS,
        })?;
        let radius_km = args.radius_km.unwrap_or(SERVICE_RADIUS_KM);
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(CliError::InvalidRadius { value: radius_km });
        }
        Ok(Self {
            shelters,
            pit_counts,
            candidates: args.candidates,
            radius_km,
        })
    }
}

/// Existing shelters near one candidate site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SiteOverlap {
    pub(crate) site: String,
    #[serde(flatten)]
    pub(crate) location: Location,
    pub(crate) nearby_shelters: Vec<String>,
}

/// Output of the `coverage` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CoverageReport {
    pub(crate) stats: CoverageStats,
    pub(crate) radius_km: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) sites: Vec<SiteOverlap>,
}

pub(crate) fn run_coverage_with(
    args: CoverageArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let shelters = load_shelters(&config.shelters)?;
    let pit_counts = load_pit_counts(&config.pit_counts)?;
    let sites = match &config.candidates {
        Some(path) => load_candidates(path)?,
        None => ProposedSites::new(),
    };
    let report = CoverageReport {
        stats: CoverageStats::from_records(&shelters, &pit_counts),
        radius_km: config.radius_km,
        sites: site_overlaps(&sites, &shelters, config.radius_km),
    };
    write_json(writer, &report)
}

pub(crate) fn site_overlaps(
    sites: &ProposedSites,
    shelters: &[Shelter],
    radius_km: f64,
) -> Vec<SiteOverlap> {
    sites
        .labelled()
        .map(|(label, site)| SiteOverlap {
            site: label,
            location: site.location,
            nearby_shelters: shelters_within(site.location, shelters, radius_km)
                .into_iter()
                .map(|shelter| shelter.name.clone())
                .collect(),
        })
        .collect()
}
