//! Cross-hand accumulation of player statistics.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::analysis::HandAnalysis;
use crate::report::{HandRow, PlayerRow};

/// Lifetime statistics for one player name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStats {
    pub hands_won: u64,
    pub all_in_count: u64,
    pub all_in_wins: u64,
    /// Gross chips won
    pub won: i64,
    /// Net chips committed
    pub expense: i64,
    pub rake_share: f64,
}

impl PlayerStats {
    pub fn net(&self) -> i64 {
        self.won - self.expense
    }

    pub fn net_including_rake(&self) -> f64 {
        self.won as f64 + self.rake_share - self.expense as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOutcome {
    Folded,
    /// Hand id already folded; nothing was recorded
    Duplicate,
}

/// Owns the player statistics and the set of processed hand ids.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    stats: BTreeMap<String, PlayerStats>,
    seen: HashSet<String>,
    hands: Vec<HandRow>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seen(&self, hand_id: &str) -> bool {
        self.seen.contains(hand_id)
    }

    /// Folds one analysed hand, skipping it entirely when its id was seen.
    pub fn fold(&mut self, analysis: &HandAnalysis) -> FoldOutcome {
        if !self.seen.insert(analysis.hand_id().to_string()) {
            debug!(hand_id = %analysis.hand_id(), "duplicate hand skipped");
            return FoldOutcome::Duplicate;
        }

        for ledger in analysis.reconstruction.ledger.players() {
            self.player_mut(&ledger.player).expense += ledger.net();
        }
        for name in &analysis.reconstruction.all_in {
            self.player_mut(name).all_in_count += 1;
        }
        for winner in &analysis.winners {
            let stats = self.player_mut(&winner.name);
            stats.hands_won += 1;
            if winner.all_in {
                stats.all_in_wins += 1;
            }
            stats.won += winner.amount;
            if winner.rake_credit > 0.0 {
                stats.rake_share += winner.rake_credit;
            }
        }

        self.hands.push(analysis.row());
        debug!(hand_id = %analysis.hand_id(), winners = analysis.winners.len(), "hand folded");
        FoldOutcome::Folded
    }

    fn player_mut(&mut self, name: &str) -> &mut PlayerStats {
        self.stats.entry(name.to_string()).or_default()
    }

    pub fn player(&self, name: &str) -> Option<&PlayerStats> {
        self.stats.get(name)
    }

    pub fn stats(&self) -> &BTreeMap<String, PlayerStats> {
        &self.stats
    }

    pub fn hands_processed(&self) -> usize {
        self.hands.len()
    }

    /// One row per folded hand, in fold order.
    pub fn hand_rows(&self) -> &[HandRow] {
        &self.hands
    }

    /// One row per player, sorted by name.
    pub fn player_rows(&self) -> Vec<PlayerRow> {
        self.stats
            .iter()
            .map(|(name, s)| PlayerRow {
                player: name.clone(),
                hands_won: s.hands_won,
                all_in_hands_count: s.all_in_count,
                all_in_hands_won: s.all_in_wins,
                won: s.won,
                lost: s.expense,
                rake_share: s.rake_share,
                net: s.net(),
                net_including_rake: s.net_including_rake(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_block;
    use crate::attribution::RakeRounding;

    const HAND: &str = "\
Hand #5: (5/10)
Table 'T' Seat #2 is the button
Seat 1: alice (1000 in chips)
Seat 2: bob (1000 in chips)
alice: posts small blind 5
bob: posts big blind 10
alice: raises 90 to 100 and is all-in
bob: calls 90
*** SHOW DOWN ***
*** SUMMARY ***
Total pot 200 | Rake 10
Seat 1: alice collected (190)";

    fn analysis() -> HandAnalysis {
        let lines: Vec<String> = HAND.lines().map(str::to_string).collect();
        analyze_block(&lines, RakeRounding::Exact).unwrap()
    }

    #[test]
    fn fold_accumulates_stats() {
        let mut agg = Aggregator::new();
        assert_eq!(agg.fold(&analysis()), FoldOutcome::Folded);
        let alice = agg.player("alice").unwrap();
        assert_eq!(alice.hands_won, 1);
        assert_eq!(alice.all_in_count, 1);
        assert_eq!(alice.all_in_wins, 1);
        assert_eq!(alice.won, 190);
        assert_eq!(alice.expense, 100);
        assert!((alice.rake_share - 10.0).abs() < 1e-9);
        assert_eq!(alice.net(), 90);
        let bob = agg.player("bob").unwrap();
        assert_eq!(bob.expense, 100);
        assert_eq!(bob.net(), -100);
    }

    #[test]
    fn duplicate_ids_are_skipped() {
        let mut agg = Aggregator::new();
        agg.fold(&analysis());
        let before = agg.stats().clone();
        assert_eq!(agg.fold(&analysis()), FoldOutcome::Duplicate);
        assert_eq!(agg.stats(), &before);
        assert_eq!(agg.hands_processed(), 1);
        assert!(agg.is_seen("5"));
    }

    #[test]
    fn player_rows_are_sorted_and_complete() {
        let mut agg = Aggregator::new();
        agg.fold(&analysis());
        let rows = agg.player_rows();
        let names: Vec<_> = rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
        assert_eq!(rows[0].lost, 100);
        assert!((rows[0].net_including_rake - 100.0).abs() < 1e-9);
    }
}
