//! Structural parsing of a single hand block.
//!
//! Extracts the header identifier, seats, button, blind sizes and the
//! summary sub-block. Everything here is fatal for the hand when missing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

static HAND_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"Hand #(\d+):").expect("hand id regex"));
static SEAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^seat (\d+): (\S+)(?:\s.*)?$").expect("seat regex"));
// greedy prefix so the last `#<n>` wins; table names may contain `#`
static BUTTON: Lazy<Regex> = Lazy::new(|| Regex::new(r".*#(\d+)").expect("button regex"));
static BLINDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d+)/(\d+)\)").expect("blinds regex"));
static FIRST_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").expect("integer regex"));

/// Line separating the action section from the summary section.
pub const SUMMARY_DELIMITER: &str = "*** SUMMARY ***";

/// A seated player. Seat numbers are 1-based as printed in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub number: u32,
    pub name: String,
}

/// Forced bet sizes from the `(small/big)` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: i64,
    pub big: i64,
}

/// Players obligated to post the blinds this hand, derived from the button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindPlayers {
    pub small: String,
    pub big: String,
}

impl BlindPlayers {
    pub fn contains(&self, name: &str) -> bool {
        self.small == name || self.big == name
    }
}

/// Reported pot and rake; treated as ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotSummary {
    pub total: i64,
    pub rake: i64,
}

/// A structurally parsed hand block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRecord {
    /// Digits following `Hand #` in the header
    pub hand_id: String,
    /// Raw lines of the block, header included
    pub lines: Vec<String>,
    /// Index of the summary delimiter within `lines`
    pub summary_index: usize,
    pub blinds: Blinds,
    pub button_seat: u32,
    /// Seats in file order
    pub seats: Vec<Seat>,
    pub blind_players: BlindPlayers,
    pub pot: PotSummary,
}

impl HandRecord {
    /// Parses one block produced by the segmenter.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the first structural field that did
    /// not match: header id, summary delimiter, pot line, seats, button or
    /// blinds, checked in that order.
    pub fn parse(lines: Vec<String>) -> Result<Self, ParseError> {
        let header = lines.first().ok_or(ParseError::EmptyBlock)?;
        let hand_id = parse_hand_id(header).ok_or_else(|| ParseError::MissingHandId {
            header: header.clone(),
        })?;

        let summary_index = lines
            .iter()
            .position(|l| l.trim() == SUMMARY_DELIMITER)
            .ok_or_else(|| ParseError::MissingSummary {
                hand_id: hand_id.clone(),
            })?;
        let pre_summary = &lines[..summary_index];

        let pot = lines
            .get(summary_index + 1)
            .and_then(|l| parse_pot_line(l))
            .ok_or_else(|| ParseError::MissingPotLine {
                hand_id: hand_id.clone(),
            })?;

        let seats: Vec<Seat> = pre_summary.iter().filter_map(|l| parse_seat(l)).collect();
        if seats.is_empty() {
            return Err(ParseError::NoSeats { hand_id });
        }

        let button_seat = pre_summary
            .iter()
            .filter(|l| l.trim_start().to_ascii_lowercase().starts_with("table"))
            .find_map(|l| {
                BUTTON
                    .captures(l)
                    .and_then(|c| c[1].parse::<u32>().ok())
            })
            .ok_or_else(|| ParseError::MissingButton {
                hand_id: hand_id.clone(),
            })?;

        let blinds = pre_summary
            .iter()
            .find_map(|l| parse_blinds(l))
            .ok_or_else(|| ParseError::MissingBlinds {
                hand_id: hand_id.clone(),
            })?;

        let blind_players = blind_players_after(&seats, button_seat);

        Ok(Self {
            hand_id,
            lines,
            summary_index,
            blinds,
            button_seat,
            seats,
            blind_players,
            pot,
        })
    }

    /// Lines before the summary delimiter, header included.
    pub fn pre_summary(&self) -> &[String] {
        &self.lines[..self.summary_index]
    }

    /// Lines after the summary delimiter; the first is the pot line.
    pub fn summary(&self) -> &[String] {
        &self.lines[self.summary_index + 1..]
    }

    /// Summary lines after the pot line.
    pub fn result_lines(&self) -> &[String] {
        self.summary().get(1..).unwrap_or(&[])
    }

    pub fn is_blind_player(&self, name: &str) -> bool {
        self.blind_players.contains(name)
    }
}

pub fn parse_hand_id(header: &str) -> Option<String> {
    HAND_ID.captures(header).map(|c| c[1].to_string())
}

pub fn parse_seat(line: &str) -> Option<Seat> {
    let caps = SEAT.captures(line.trim())?;
    Some(Seat {
        number: caps[1].parse().ok()?,
        name: caps[2].to_string(),
    })
}

pub fn parse_blinds(line: &str) -> Option<Blinds> {
    let caps = BLINDS.captures(line)?;
    Some(Blinds {
        small: caps[1].parse().ok()?,
        big: caps[2].parse().ok()?,
    })
}

/// Parses `Total pot <n> | Rake <n>`, taking the first integer on each side.
pub fn parse_pot_line(line: &str) -> Option<PotSummary> {
    let (total, rake) = line.split_once('|')?;
    let first = |s: &str| -> Option<i64> { FIRST_INT.captures(s)?[1].parse().ok() };
    Some(PotSummary {
        total: first(total)?,
        rake: first(rake)?,
    })
}

/// The two seats following the button, wrapping around the seat list.
///
/// When the button sits on an empty seat, the first occupied seat with a
/// higher number (wrapping) takes the small blind.
pub fn blind_players_after(seats: &[Seat], button_seat: u32) -> BlindPlayers {
    let n = seats.len();
    let small_idx = match seats.iter().position(|s| s.number == button_seat) {
        Some(i) => (i + 1) % n,
        None => seats
            .iter()
            .position(|s| s.number > button_seat)
            .unwrap_or(0),
    };
    BlindPlayers {
        small: seats[small_idx].name.clone(),
        big: seats[(small_idx + 1) % n].name.clone(),
    }
}
