//! Replays the action section of a hand into per-player ledgers.

use std::collections::BTreeSet;

use tracing::debug;

use crate::action::{classify, ActionEvent, ActionKind, LineClass};
use crate::hand::{parse_seat, HandRecord};
use crate::ledger::HandLedger;

/// Chip flow of one hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconstruction {
    pub ledger: HandLedger,
    /// Players who went all-in this hand
    pub all_in: BTreeSet<String>,
    /// Action-section lines with no chip-moving verb, or whose amounts
    /// overflow; table and seat lines are not counted
    pub unrecognized: usize,
}

/// Replays every pre-summary line of `hand` in document order.
pub fn reconstruct(hand: &HandRecord) -> Reconstruction {
    let mut rec = Reconstruction {
        ledger: HandLedger::with_players(hand.seats.iter().map(|s| s.name.clone())),
        ..Default::default()
    };

    // header line is not an action
    for line in hand.pre_summary().iter().skip(1) {
        if is_structural(line) {
            continue;
        }
        let applied = match classify(line) {
            LineClass::Street(_) => {
                rec.ledger.reset_all();
                true
            }
            LineClass::Action(ev) => apply(hand, &mut rec, ev).is_some(),
            LineClass::Unrecognized => false,
        };
        if !applied {
            rec.unrecognized += 1;
            debug!(hand_id = %hand.hand_id, line = %line, "unrecognized line");
        }
    }
    rec
}

fn is_structural(line: &str) -> bool {
    line.trim_start().to_ascii_lowercase().starts_with("table") || parse_seat(line).is_some()
}

/// Returns `None`, leaving the ledgers untouched, when the amounts overflow.
fn apply(hand: &HandRecord, rec: &mut Reconstruction, ev: ActionEvent) -> Option<()> {
    let blinds = hand.blinds;
    let is_blind = hand.is_blind_player(&ev.player);
    let both_blinds = blinds.small.checked_add(blinds.big);
    if ev.kind == ActionKind::Post && !is_blind && both_blinds.is_none() {
        return None;
    }
    let ledger = rec.ledger.entry(ev.player.as_str());

    match ev.kind {
        ActionKind::Returned => ledger.push_returned(ev.amount),
        ActionKind::Post if !is_blind && Some(ev.amount) == both_blinds => {
            // small portion is dead money from a missed round, big portion stays live
            ledger.push_chips(blinds.small);
            ledger.push_reset();
            ledger.push_chips(blinds.big);
        }
        ActionKind::Post if !is_blind && ev.amount == blinds.small => {
            ledger.push_chips(ev.amount);
            ledger.push_reset();
        }
        ActionKind::Post | ActionKind::Bet | ActionKind::Call => ledger.push_chips(ev.amount),
        ActionKind::Raise => {
            let delta = ev.amount.checked_sub(ledger.current_round())?;
            ledger.push_chips(delta);
        }
    }

    if ev.all_in && matches!(ev.kind, ActionKind::Bet | ActionKind::Call | ActionKind::Raise) {
        rec.all_in.insert(ev.player);
    }
    Some(())
}
