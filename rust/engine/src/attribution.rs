//! Winner detection and proportional rake credits.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::hand::{HandRecord, PotSummary};

static RESULT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Seat \d+: (\S+) (.*)$").expect("result regex"));
static WON_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+)\)").expect("amount regex"));

/// Rounding applied to fractional rake credits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RakeRounding {
    /// Keep fractional chips
    #[default]
    Exact,
    /// Floor to a whole chip
    Truncate,
    /// Nearest whole chip
    Round,
}

impl RakeRounding {
    pub fn apply(self, credit: f64) -> f64 {
        match self {
            RakeRounding::Exact => credit,
            RakeRounding::Truncate => credit.trunc(),
            RakeRounding::Round => credit.round(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RakeRounding::Exact => "exact",
            RakeRounding::Truncate => "truncate",
            RakeRounding::Round => "round",
        }
    }
}

impl fmt::Display for RakeRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RakeRounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(RakeRounding::Exact),
            "truncate" | "floor" => Ok(RakeRounding::Truncate),
            "round" => Ok(RakeRounding::Round),
            other => Err(format!("Unknown rake rounding policy: {}", other)),
        }
    }
}

/// A player collecting chips in the summary section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Winner {
    pub name: String,
    /// Gross amount won, after rake
    pub amount: i64,
    /// Winner was all-in during the hand
    pub all_in: bool,
    /// Share of the rake credited back; zero when none applies
    pub rake_credit: f64,
}

/// Winners in the order their result lines appear.
pub fn find_winners(
    hand: &HandRecord,
    all_in: &BTreeSet<String>,
    rounding: RakeRounding,
) -> Vec<Winner> {
    let mut winners = Vec::new();
    for line in hand.result_lines() {
        let lower = line.to_lowercase();
        if !(lower.contains(" collected ") || lower.contains(" win ") || lower.contains(" won ")) {
            continue;
        }
        let Some((name, amount)) = parse_result_line(line) else {
            warn!(hand_id = %hand.hand_id, line = %line, "result line without a winning amount");
            continue;
        };
        winners.push(Winner {
            all_in: all_in.contains(&name),
            rake_credit: rake_credit(amount, hand.pot, rounding).unwrap_or(0.0),
            name,
            amount,
        });
    }
    winners
}

fn parse_result_line(line: &str) -> Option<(String, i64)> {
    let caps = RESULT.captures(line.trim())?;
    let amount = WON_AMOUNT.captures(&caps[2])?[1].parse().ok()?;
    Some((caps[1].to_string(), amount))
}

/// Rake credit for a winner of `amount` chips.
///
/// The winner's pre-rake entitlement is `amount / (1 - rake / total)`; the
/// credit is the difference to `amount`, after rounding. Returns `None` when
/// no positive credit applies.
///
/// ```
/// use chipledger_engine::attribution::{rake_credit, RakeRounding};
/// use chipledger_engine::hand::PotSummary;
///
/// let pot = PotSummary { total: 20, rake: 2 };
/// assert_eq!(rake_credit(18, pot, RakeRounding::Exact), Some(2.0));
/// ```
pub fn rake_credit(amount: i64, pot: PotSummary, rounding: RakeRounding) -> Option<f64> {
    if pot.total <= 0 || pot.rake >= pot.total {
        return None;
    }
    // amount / (1 - rake/total) == amount * total / (total - rake)
    let entitled = (amount as f64 * pot.total as f64) / (pot.total - pot.rake) as f64;
    let credit = rounding.apply(entitled - amount as f64);
    (credit > 0.0).then_some(credit)
}
