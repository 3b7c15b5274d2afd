//! Fixtures and stream helpers shared by CLI integration tests.
#![allow(dead_code)]

use std::path::Path;

/// Two heads-up hands: a showdown with rake and an uncalled raise.
pub const SESSION: &str = "\
Hand #1: Hold'em No Limit (5/10)
Table 'Home' Seat #1 is the button
Seat 1: alice (1000 in chips)
Seat 2: bob (1000 in chips)
bob: posts small blind 5
alice: posts big blind 10
Dealt to alice [Ah Ad]
bob: calls 5
alice: checks
*** SHOW DOWN ***
*** SUMMARY ***
Total pot 20 | Rake 2
Seat 1: alice showed [Ah Ad] and won (18)
Seat 2: bob showed [7c 2d] and lost

Hand #2: Hold'em No Limit (5/10)
Table 'Home' Seat #2 is the button
Seat 1: alice (1008 in chips)
Seat 2: bob (990 in chips)
alice: posts small blind 5
bob: posts big blind 10
Dealt to alice [Kh Qh]
alice: raises 20 to 30
bob: folds
Uncalled bet (20) returned to alice
*** SUMMARY ***
Total pot 20 | Rake 0
Seat 1: alice collected (20)
";

pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(args: &[&str]) -> Output {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["chipledger"];
    argv.extend_from_slice(args);
    let code = chipledger_cli::run(argv, &mut out, &mut err);
    Output {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

pub fn path_str(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

pub fn clear_env() {
    for key in [
        "CHIPLEDGER_CONFIG",
        "CHIPLEDGER_RAKE_ROUNDING",
        "CHIPLEDGER_PARALLEL",
        "CHIPLEDGER_SUMMARY_PREFIX",
    ] {
        unsafe { std::env::remove_var(key) };
    }
}
