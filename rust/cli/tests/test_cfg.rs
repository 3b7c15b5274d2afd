mod common;

use common::{clear_env, run};
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let res = run(&["cfg"]);
    assert_eq!(res.code, 0);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["rake_rounding"]["value"], "exact");
    assert_eq!(json["parallel"]["value"], true);
    assert_eq!(json["summary_prefix"]["value"], "summary_");
    assert_eq!(json["summary_prefix"]["source"], "default");
}

#[test]
#[serial]
fn cfg_layers_file_under_environment() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("chipledger.toml");
    fs::write(
        &file,
        "rake_rounding = \"round\"\nparallel = false\npocket_card_prefix = \"Dealt to \"\n",
    )
    .unwrap();
    unsafe {
        std::env::set_var("CHIPLEDGER_CONFIG", &file);
        std::env::set_var("CHIPLEDGER_PARALLEL", "yes");
    }

    let res = run(&["cfg"]);
    clear_env();
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["rake_rounding"]["value"], "round");
    assert_eq!(json["rake_rounding"]["source"], "file");
    assert_eq!(json["parallel"]["value"], true);
    assert_eq!(json["parallel"]["source"], "env");
    assert_eq!(json["pocket_card_prefix"]["value"], "Dealt to ");
}

#[test]
#[serial]
fn cfg_rejects_empty_summary_prefix() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("chipledger.toml");
    fs::write(&file, "summary_prefix = \"\"\n").unwrap();
    unsafe { std::env::set_var("CHIPLEDGER_CONFIG", &file) };

    let res = run(&["cfg"]);
    clear_env();
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("summary_prefix must not be empty"));
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn cfg_reports_malformed_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("chipledger.toml");
    fs::write(&file, "rake_rounding = [").unwrap();
    unsafe { std::env::set_var("CHIPLEDGER_CONFIG", &file) };

    let res = run(&["cfg"]);
    clear_env();
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Configuration error"));
}
