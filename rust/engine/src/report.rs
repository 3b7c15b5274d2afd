//! Output rows, one per hand and one per player.

use serde::Serialize;

use crate::attribution::Winner;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandRow {
    pub hand_id: String,
    pub has_multiple_winners: bool,
    /// Empty unless exactly one winner
    pub first_winner_name: String,
    /// Empty unless exactly one winner
    pub first_winner_amount: String,
    /// `name|amount` pairs joined by `;`
    pub all_winners: String,
    pub total: i64,
    pub rake: i64,
}

impl HandRow {
    pub fn new(hand_id: &str, winners: &[Winner], total: i64, rake: i64) -> Self {
        let (first_winner_name, first_winner_amount) = match winners {
            [only] => (only.name.clone(), only.amount.to_string()),
            _ => (String::new(), String::new()),
        };
        Self {
            hand_id: hand_id.to_string(),
            has_multiple_winners: winners.len() > 1,
            first_winner_name,
            first_winner_amount,
            all_winners: join_winners(winners),
            total,
            rake,
        }
    }
}

pub fn join_winners(winners: &[Winner]) -> String {
    winners
        .iter()
        .map(|w| format!("{}|{}", w.name, w.amount))
        .collect::<Vec<_>>()
        .join(";")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRow {
    pub player: String,
    pub hands_won: u64,
    pub all_in_hands_count: u64,
    pub all_in_hands_won: u64,
    pub won: i64,
    pub lost: i64,
    pub rake_share: f64,
    pub net: i64,
    pub net_including_rake: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winner(name: &str, amount: i64) -> Winner {
        Winner {
            name: name.into(),
            amount,
            all_in: false,
            rake_credit: 0.0,
        }
    }

    #[test]
    fn single_winner_row() {
        let row = HandRow::new("1", &[winner("alice", 18)], 20, 2);
        assert!(!row.has_multiple_winners);
        assert_eq!(row.first_winner_name, "alice");
        assert_eq!(row.first_winner_amount, "18");
        assert_eq!(row.all_winners, "alice|18");
    }

    #[test]
    fn split_pot_row() {
        let row = HandRow::new("2", &[winner("a", 10), winner("b", 9)], 20, 1);
        assert!(row.has_multiple_winners);
        assert_eq!(row.first_winner_name, "");
        assert_eq!(row.first_winner_amount, "");
        assert_eq!(row.all_winners, "a|10;b|9");
    }

    #[test]
    fn no_winner_row_is_empty() {
        let row = HandRow::new("3", &[], 0, 0);
        assert!(!row.has_multiple_winners);
        assert_eq!(row.all_winners, "");
    }
}
