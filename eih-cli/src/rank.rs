//! Rank command implementation for the EIH CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use eih_core::DemographicDataset;
use eih_data::{load_candidates, load_demographics};
use eih_scorer::{DEFAULT_TOP_N, FixedTract, NearestTract, RandomSample, RankedSite, SiteScorer};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CANDIDATES, ARG_DEMOGRAPHICS, ARG_SEED, ARG_TOP, ARG_TRACT_INDEX, ARG_TRACT_LOOKUP,
    CliError, ENV_RANK_CANDIDATES, ENV_RANK_DEMOGRAPHICS, ENV_RANK_TRACT_INDEX, require_existing,
    write_json,
};

/// How the `rank` command picks a demographic record per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TractLookupMode {
    /// Draw a random record for every candidate.
    #[default]
    Random,
    /// Join each candidate to the nearest tract centroid.
    Nearest,
    /// Use the record at `--tract-index` for every candidate.
    Fixed,
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every candidate site against the default San Jose \
                 landmarks and a demographic dataset, then print the best \
                 sites as JSON, highest total score first.",
    about = "Rank candidate sites by suitability"
)]
#[ortho_config(prefix = "EIH")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of candidate sites.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Path to a JSON array of demographic records.
    #[arg(long = ARG_DEMOGRAPHICS, value_name = "path")]
    #[serde(default)]
    pub(crate) demographics: Option<Utf8PathBuf>,
    /// Number of sites to print (default 5).
    #[arg(long = ARG_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Seed for the random tract sampler.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Tract lookup strategy.
    #[arg(long = ARG_TRACT_LOOKUP, value_enum, value_name = "mode")]
    #[serde(default)]
    pub(crate) tract_lookup: Option<TractLookupMode>,
    /// Record index used by `--tract-lookup fixed`.
    #[arg(long = ARG_TRACT_INDEX, value_name = "index")]
    #[serde(default)]
    pub(crate) tract_index: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Tract lookup resolved from the mode and its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LookupChoice {
    Random { seed: Option<u64> },
    Nearest,
    Fixed { index: usize },
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) candidates: Utf8PathBuf,
    pub(crate) demographics: Utf8PathBuf,
    pub(crate) top: usize,
    pub(crate) lookup: LookupChoice,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.candidates, ARG_CANDIDATES)?;
        require_existing(&self.demographics, ARG_DEMOGRAPHICS)?;
        Ok(())
    }

    fn scorer(&self) -> SiteScorer {
        let scorer = SiteScorer::with_defaults();
        match self.lookup {
            LookupChoice::Random { seed: Some(seed) } => {
                scorer.with_lookup(RandomSample::seeded(seed))
            }
            LookupChoice::Random { seed: None } => scorer,
            LookupChoice::Nearest => scorer.with_lookup(NearestTract),
            LookupChoice::Fixed { index } => scorer.with_lookup(FixedTract::new(index)),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_RANK_CANDIDATES,
        })?;
        let demographics = args.demographics.ok_or(CliError::MissingArgument {
            field: ARG_DEMOGRAPHICS,
            env: ENV_RANK_DEMOGRAPHICS,
        })?;
        let lookup = match args.tract_lookup.unwrap_or_default() {
            TractLookupMode::Random => LookupChoice::Random { seed: args.seed },
            TractLookupMode::Nearest => LookupChoice::Nearest,
            TractLookupMode::Fixed => LookupChoice::Fixed {
                index: args.tract_index.ok_or(CliError::MissingArgument {
                    field: ARG_TRACT_INDEX,
                    env: ENV_RANK_TRACT_INDEX,
                })?,
            },
        };
        Ok(Self {
            candidates,
            demographics,
            top: args.top.unwrap_or(DEFAULT_TOP_N),
            lookup,
        })
    }
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let sites = load_candidates(&config.candidates)?;
    let dataset = load_demographics(&config.demographics)?;
    let rows = rank_sites(&config, &sites.locations(), &dataset);
    write_json(writer, &rows)
}

pub(crate) fn rank_sites(
    config: &RankConfig,
    candidates: &[eih_core::Location],
    dataset: &DemographicDataset,
) -> Vec<RankedSite> {
    info!(
        "ranking {} candidates against {} tracts",
        candidates.len(),
        dataset.len()
    );
    config
        .scorer()
        .get_top_locations(candidates, dataset, config.top)
}
