//! Pure per-hand analysis: parse, reconstruct, validate, attribute.
//!
//! Nothing here touches cross-hand state, so blocks can be analysed in any
//! order or in parallel before being folded by the
//! [`Aggregator`](crate::aggregate::Aggregator).

use crate::attribution::{find_winners, RakeRounding, Winner};
use crate::errors::ParseError;
use crate::hand::HandRecord;
use crate::reconstruct::{reconstruct, Reconstruction};
use crate::report::HandRow;
use crate::validate::{validate, PotMismatch};

#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub hand: HandRecord,
    pub reconstruction: Reconstruction,
    /// Winners in summary order; index 0 is the first winner
    pub winners: Vec<Winner>,
    pub mismatch: Option<PotMismatch>,
}

impl HandAnalysis {
    pub fn hand_id(&self) -> &str {
        &self.hand.hand_id
    }

    pub fn row(&self) -> HandRow {
        HandRow::new(
            &self.hand.hand_id,
            &self.winners,
            self.hand.pot.total,
            self.hand.pot.rake,
        )
    }
}

/// Analyses one segmented block.
///
/// # Errors
///
/// Propagates the structural [`ParseError`]; ledger mismatches are not
/// errors and are carried in [`HandAnalysis::mismatch`].
pub fn analyze_block(block: &[String], rounding: RakeRounding) -> Result<HandAnalysis, ParseError> {
    let hand = HandRecord::parse(block.to_vec())?;
    let reconstruction = reconstruct(&hand);
    let mismatch = validate(&hand, &reconstruction.ledger).err();
    let winners = find_winners(&hand, &reconstruction.all_in, rounding);
    Ok(HandAnalysis {
        hand,
        reconstruction,
        winners,
        mismatch,
    })
}
