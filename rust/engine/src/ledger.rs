//! Per-hand chip ledgers.
//!
//! A [`PlayerLedger`] is an ordered list of tagged entries. `Reset` entries
//! mark betting-round boundaries; `Chips` entries are signed commitments.
//! The ledger always starts with a `Reset` for the implicit preflop start.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum LedgerEntry {
    Reset,
    Chips(i64),
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerLedger {
    pub player: String,
    entries: Vec<LedgerEntry>,
}

impl PlayerLedger {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            entries: vec![LedgerEntry::Reset],
        }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn push_chips(&mut self, amount: i64) {
        self.entries.push(LedgerEntry::Chips(amount));
    }

    pub fn push_reset(&mut self) {
        self.entries.push(LedgerEntry::Reset);
    }

    /// Records uncalled chips handed back; stored negated.
    pub fn push_returned(&mut self, amount: i64) {
        self.entries.push(LedgerEntry::Chips(-amount));
    }

    /// Chips committed since the most recent reset.
    pub fn current_round(&self) -> i64 {
        self.entries
            .iter()
            .rev()
            .take_while(|e| **e != LedgerEntry::Reset)
            .map(|e| match e {
                LedgerEntry::Chips(c) => *c,
                LedgerEntry::Reset => 0,
            })
            .sum()
    }

    /// Net chips committed over the whole hand.
    pub fn net(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| match e {
                LedgerEntry::Chips(c) => *c,
                LedgerEntry::Reset => 0,
            })
            .sum()
    }
}

impl fmt::Display for PlayerLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.player)?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match e {
                LedgerEntry::Reset => write!(f, "|")?,
                LedgerEntry::Chips(c) => write!(f, "{}", c)?,
            }
        }
        write!(f, "] = {}", self.net())
    }
}

/// All player ledgers of one hand, in seat order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandLedger {
    players: Vec<PlayerLedger>,
}

impl HandLedger {
    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Self::default();
        for name in names {
            ledger.entry(name);
        }
        ledger
    }

    /// Ledger for `player`, appended with a fresh `[Reset]` when unseen.
    pub fn entry(&mut self, player: impl Into<String>) -> &mut PlayerLedger {
        let player = player.into();
        let idx = match self.players.iter().position(|p| p.player == player) {
            Some(i) => i,
            None => {
                self.players.push(PlayerLedger::new(player));
                self.players.len() - 1
            }
        };
        &mut self.players[idx]
    }

    pub fn get(&self, player: &str) -> Option<&PlayerLedger> {
        self.players.iter().find(|p| p.player == player)
    }

    pub fn reset_all(&mut self) {
        for p in &mut self.players {
            p.push_reset();
        }
    }

    pub fn players(&self) -> &[PlayerLedger] {
        &self.players
    }

    /// Sum of every player's net commitment.
    pub fn total(&self) -> i64 {
        self.players.iter().map(PlayerLedger::net).sum()
    }
}

impl fmt::Display for HandLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.players.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
