//! Cross-checks reconstructed ledgers against the reported pot.

use serde::Serialize;
use std::fmt;

use crate::hand::HandRecord;
use crate::ledger::HandLedger;

/// Diagnostic for a hand whose ledgers do not add up to the reported pot.
///
/// Non-fatal: the hand's results are still emitted. A mismatch usually means
/// a bet phrasing the classifier does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotMismatch {
    pub hand_id: String,
    pub computed: i64,
    pub reported: i64,
    pub rake: i64,
    pub ledger: HandLedger,
}

impl fmt::Display for PotMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Action sum does not match reported pot for hand {}: computed {}, reported {}, rake {}",
            self.hand_id, self.computed, self.reported, self.rake
        )?;
        write!(f, "{}", self.ledger)
    }
}

/// Returns the computed total when it matches the reported pot.
pub fn validate(hand: &HandRecord, ledger: &HandLedger) -> Result<i64, PotMismatch> {
    let computed = ledger.total();
    if computed == hand.pot.total {
        Ok(computed)
    } else {
        Err(PotMismatch {
            hand_id: hand.hand_id.clone(),
            computed,
            reported: hand.pot.total,
            rake: hand.pot.rake,
            ledger: ledger.clone(),
        })
    }
}
