//! # chipledger-engine: hand-history chip accounting
//!
//! Reconstructs the chip flow of every hand in a home-game hand-history
//! archive, validates it against the reported pot, attributes winnings and
//! rake credits, and folds the results into per-player statistics.
//!
//! ## Core Modules
//!
//! - [`segment`] - Blank-line segmentation of raw logs into hand blocks
//! - [`hand`] - Structural parsing (hand id, seats, button, blinds, summary)
//! - [`action`] - Line classifier for posts, bets, calls, raises, returns and streets
//! - [`ledger`] - Tagged per-player ledgers with round resets
//! - [`reconstruct`] - Replays a hand's actions into ledgers
//! - [`validate`] - Ledger total vs reported pot
//! - [`attribution`] - Winners and proportional rake credits
//! - [`aggregate`] - Cross-hand statistics with hand-id de-duplication
//! - [`pipeline`] - Whole-archive driver
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use chipledger_engine::pipeline::Pipeline;
//!
//! let log = "\
//! Hand #1: Hold'em (5/10)
//! Table 'Home' Seat #2 is the button
//! Seat 1: alice (1000 in chips)
//! Seat 2: bob (1000 in chips)
//! alice: posts small blind 5
//! bob: posts big blind 10
//! alice: calls 5
//! *** SHOW DOWN ***
//! *** SUMMARY ***
//! Total pot 20 | Rake 2
//! Seat 1: alice collected (18)
//! ";
//!
//! let summary = Pipeline::default().run_text(log);
//! let alice = summary.aggregator.player("alice").unwrap();
//! assert_eq!(alice.won, 18);
//! assert_eq!(alice.expense, 10);
//! assert!(summary.mismatches.is_empty());
//! ```

pub mod action;
pub mod aggregate;
pub mod analysis;
pub mod attribution;
pub mod errors;
pub mod hand;
pub mod ledger;
pub mod pipeline;
pub mod reconstruct;
pub mod report;
pub mod segment;
pub mod validate;
