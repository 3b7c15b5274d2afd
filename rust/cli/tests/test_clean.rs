mod common;

use common::{SESSION, clear_env, path_str, run};
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn clean_removes_pocket_cards() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("session.txt"), SESSION).unwrap();
    let outdir = dir.path().join("shared");

    let res = run(&["clean", "-i", &path_str(&input), "-o", &path_str(&outdir)]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("from 2 hand(s)"));

    let cleaned = fs::read_to_string(outdir.join("clean_hh.txt")).unwrap();
    assert!(!cleaned.contains("Dealt to"));
    assert!(cleaned.contains("Seat 1: alice showed [Ah Ad] and won (18)\nSeat 2: bob showed [7c 2d] and lost\n\n\n"));
    assert!(cleaned.contains("bob: calls 5"));
}

#[test]
#[serial]
fn cleaned_archive_still_calculates() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.txt");
    fs::write(&input, SESSION).unwrap();
    let outdir = dir.path().join("shared");

    assert_eq!(run(&["clean", "-i", &path_str(&input), "-o", &path_str(&outdir)]).code, 0);

    let output = dir.path().join("hands.csv");
    let res = run(&[
        "calc",
        "-i",
        &path_str(&outdir.join("clean_hh.txt")),
        "-o",
        &path_str(&output),
    ]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Processed 2 hand(s)"));
}

#[test]
#[serial]
fn clean_missing_input_fails() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let res = run(&[
        "clean",
        "-i",
        &path_str(&dir.path().join("absent")),
        "-o",
        &path_str(dir.path()),
    ]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Input not found"));
}
