//! Focused unit tests covering rank CLI configuration and output.

use super::helpers::{CANDIDATES_JSON, DEMOGRAPHICS_JSON, Workspace, output_json, workspace};
use super::*;
use crate::rank::{LookupChoice, RankArgs, RankConfig, TractLookupMode, run_rank_with};
use eih_scorer::DEFAULT_TOP_N;
use rstest::rstest;

fn args_for(workspace: &Workspace) -> RankArgs {
    RankArgs {
        candidates: Some(workspace.write("candidates.json", CANDIDATES_JSON)),
        demographics: Some(workspace.write("demographics.json", DEMOGRAPHICS_JSON)),
        ..RankArgs::default()
    }
}

#[rstest]
fn converting_rank_without_candidates_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing candidates");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CANDIDATES);
            assert_eq!(env, ENV_RANK_CANDIDATES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn rank_config_applies_defaults(workspace: Workspace) {
    let config = RankConfig::try_from(args_for(&workspace)).expect("config should build");
    assert_eq!(config.top, DEFAULT_TOP_N);
    assert_eq!(config.lookup, LookupChoice::Random { seed: None });
}

#[rstest]
fn fixed_lookup_requires_an_index(workspace: Workspace) {
    let args = RankArgs {
        tract_lookup: Some(TractLookupMode::Fixed),
        ..args_for(&workspace)
    };
    let err = RankConfig::try_from(args).expect_err("missing tract index");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_TRACT_INDEX);
            assert_eq!(env, ENV_RANK_TRACT_INDEX);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_demographics(workspace: Workspace) {
    let config = RankConfig {
        candidates: workspace.write("candidates.json", CANDIDATES_JSON),
        demographics: workspace.root().join("absent.json"),
        top: 5,
        lookup: LookupChoice::Nearest,
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_DEMOGRAPHICS),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let directory = workspace.root().join("candidates.json");
    std::fs::create_dir(directory.as_std_path()).expect("candidates directory");
    let config = RankConfig {
        candidates: directory,
        demographics: workspace.write("demographics.json", DEMOGRAPHICS_JSON),
        top: 5,
        lookup: LookupChoice::Nearest,
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CANDIDATES),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn rank_prints_rows_in_descending_order(workspace: Workspace) {
    let args = RankArgs {
        tract_lookup: Some(TractLookupMode::Nearest),
        top: Some(2),
        ..args_for(&workspace)
    };
    let mut buffer = Vec::new();
    run_rank_with(args, &mut buffer).expect("rank should succeed");

    let json = output_json(&buffer);
    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    let totals: Vec<f64> = rows
        .iter()
        .map(|row| row["total_score"].as_f64().expect("numeric total"))
        .collect();
    assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(rows[0]["latitude"].as_f64(), Some(37.3382));
}

#[rstest]
fn seeded_runs_print_identical_tables(workspace: Workspace) {
    let args = RankArgs {
        seed: Some(11),
        ..args_for(&workspace)
    };
    let mut first = Vec::new();
    let mut second = Vec::new();
    run_rank_with(args.clone(), &mut first).expect("first run");
    run_rank_with(args, &mut second).expect("second run");
    assert_eq!(first, second);
}
