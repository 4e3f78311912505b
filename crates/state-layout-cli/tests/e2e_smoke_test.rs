use std::fs;

use clap::Parser;
use tempfile::tempdir;

use state_layout_cli::{Args, CliError, Command, ComputeArgs, run};

/// Runs the CLI with the given arguments and returns its stdout
fn run_cli(argv: &[&str]) -> Result<String, CliError> {
    let args = Args::try_parse_from(std::iter::once("state-layout").chain(argv.iter().copied()))
        .expect("Failed to parse arguments");
    let mut out = Vec::new();
    run(&args, &mut out)?;
    Ok(String::from_utf8(out).expect("Output is not UTF-8"))
}

fn run_json(argv: &[&str]) -> serde_json::Value {
    let output = run_cli(argv).expect("CLI run failed");
    serde_json::from_str(&output).expect("Output is not valid JSON")
}

#[test]
fn e2e_compute_text() {
    let output = run_cli(&["compute", "65536"]).expect("CLI run failed");

    assert!(output.contains("Style        : Aztec-style privacy rollup (aztec)"));
    assert!(output.contains("Leaves       : 65536"));
    assert!(output.contains("  Height          : 16"));
    assert!(output.contains("  Per-proof bits  : 4096 bits"));
}

#[test]
fn e2e_compute_json() {
    let value = run_json(&["compute", "100000", "--fanout", "4", "--style", "soundness", "--json"]);

    assert_eq!(value["style"]["key"], "soundness");
    assert_eq!(value["height"], 9);
    assert_eq!(value["proofBranchLength"], 9);
    assert_eq!(value["perProofBytes"], 864);
}

#[test]
fn e2e_single_leaf() {
    let value = run_json(&["compute", "1", "--json"]);

    assert_eq!(value["height"], 0);
    assert_eq!(value["nodesPerLevel"], serde_json::json!([1]));
    assert_eq!(value["totalNodes"], 1);
    assert_eq!(value["perProofBytes"], 0);
}

#[test]
fn e2e_clamps_large_leaf_counts() {
    let value = run_json(&["compute", "20000000", "--json"]);
    assert_eq!(value["leaves"], 10_000_000);
}

#[test]
fn e2e_error_cases() {
    let err = run_cli(&["compute", "0"]).unwrap_err();
    assert!(matches!(err, CliError::Layout(_)), "unexpected error: {err}");

    let err = run_cli(&["compute", "16", "--style", "unknown"]).unwrap_err();
    assert!(matches!(err, CliError::Layout(_)), "unexpected error: {err}");

    let err = run_cli(&["sweep", "--leaf-min", "64", "--leaf-max", "16"]).unwrap_err();
    assert!(matches!(err, CliError::Layout(_)), "unexpected error: {err}");
}

#[test]
fn e2e_sweep_json() {
    let value = run_json(&["sweep", "--leaf-min", "1024", "--leaf-max", "65536", "--json"]);

    assert_eq!(value["style"], "aztec");
    let rows = value["rows"].as_array().expect("rows is not an array");
    assert_eq!(rows.len(), 4 * 3);
    assert_eq!(rows[0]["leaves"], 1024);
    assert_eq!(rows[0]["fanout"], 2);
    assert_eq!(rows[11]["leaves"], 65536);
    assert_eq!(rows[11]["fanout"], 8);
}

#[test]
fn e2e_best_json() {
    let value = run_json(&[
        "best",
        "--leaves",
        "65536",
        "--metric",
        "perProofBytes",
        "--json",
    ]);

    assert_eq!(value["bestFanout"], 2);
    assert_eq!(value["metric"], "perProofBytes");
    assert_eq!(value["candidates"].as_array().map(Vec::len), Some(3));
}

#[test]
fn e2e_size_json() {
    let value = run_json(&["size", "--leaves", "5", "--json"]);

    assert_eq!(value["height"], 3);
    assert_eq!(value["fullLeaves"], 8);
    assert_eq!(value["paddingLeaves"], 3);
    assert_eq!(value["totalNodes"], 15);
    assert_eq!(value["internalNodes"], 7);
}

#[test]
fn e2e_styles() {
    let output = run_cli(&["styles"]).expect("CLI run failed");
    let keys: Vec<_> = output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|word| ["aztec", "zama", "soundness"].contains(word))
        .collect();
    assert_eq!(keys, ["aztec", "zama", "soundness"]);

    let value = run_json(&["styles", "--json"]);
    assert_eq!(value[1]["key"], "zama");
    assert_eq!(value[1]["hashBytes"], 48);
}

#[test]
fn e2e_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
        [defaults]
        style = "poseidon"
        fanout = 4

        [limits]
        max_leaves = 4096

        [[styles]]
        key = "poseidon"
        name = "Poseidon sponge"
        hash_bytes = 24
        "#,
    )
    .expect("Failed to write config");

    let args = Args {
        command: Command::Compute(ComputeArgs {
            leaves: 100_000,
            style: None,
            fanout: None,
            json: true,
        }),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let mut out = Vec::new();
    run(&args, &mut out).expect("CLI run failed");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("Output is not valid JSON");

    assert_eq!(value["style"]["key"], "poseidon");
    assert_eq!(value["leaves"], 4096);
    assert_eq!(value["fanout"], 4);
    assert_eq!(value["height"], 6);
    assert_eq!(value["perProofBytes"], 6 * 3 * 24);
}

#[test]
fn e2e_missing_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("absent.toml");

    let args = Args {
        command: Command::Compute(ComputeArgs {
            leaves: 16,
            style: None,
            fanout: None,
            json: false,
        }),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let mut out = Vec::new();
    let err = run(&args, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Config(_)), "unexpected error: {err}");
}
