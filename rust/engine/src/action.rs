//! Line classification for the action section of a hand.
//!
//! Each pre-summary line is classified exactly once into a [`LineClass`].
//! Precedence follows the verb keys: `returned`, street markers, `posts`,
//! `bets`/`calls`, `raises`. Anything else is [`LineClass::Unrecognized`].

use serde::{Deserialize, Serialize};

/// Betting-round boundary. Preflop is the implicit start of every hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum StreetMarker {
    Flop,
    Turn,
    River,
    Showdown,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Blind or other forced bet
    Post,
    Bet,
    Call,
    /// Amount is the raise-to total, not the increment
    Raise,
    /// Uncalled chips handed back to the bettor
    Returned,
}

/// A chip-moving line attributed to one player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub kind: ActionKind,
    pub player: String,
    pub amount: i64,
    pub all_in: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LineClass {
    Action(ActionEvent),
    Street(StreetMarker),
    Unrecognized,
}

/// Classifies one line of the action section.
///
/// ```
/// use chipledger_engine::action::{classify, ActionKind, LineClass};
///
/// match classify("bob: raises 10 to 20 and is all-in") {
///     LineClass::Action(ev) => {
///         assert_eq!(ev.kind, ActionKind::Raise);
///         assert_eq!(ev.player, "bob");
///         assert_eq!(ev.amount, 20);
///         assert!(ev.all_in);
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn classify(line: &str) -> LineClass {
    let lower = line.to_lowercase();

    if lower.contains(" returned ") {
        return match (last_token(line), last_integer(line)) {
            (Some(player), Some(amount)) => action(ActionKind::Returned, player, amount, false),
            _ => LineClass::Unrecognized,
        };
    }
    if let Some(marker) = street_marker(&lower) {
        return LineClass::Street(marker);
    }

    let kind = if lower.contains(" posts ") {
        ActionKind::Post
    } else if lower.contains(" bets ") {
        ActionKind::Bet
    } else if lower.contains(" calls ") {
        ActionKind::Call
    } else if lower.contains(" raises ") {
        ActionKind::Raise
    } else {
        return LineClass::Unrecognized;
    };

    match (player_before_colon(line), last_integer(line)) {
        (Some(player), Some(amount)) => action(kind, player, amount, lower.contains("all-in")),
        _ => LineClass::Unrecognized,
    }
}

fn action(kind: ActionKind, player: &str, amount: i64, all_in: bool) -> LineClass {
    LineClass::Action(ActionEvent {
        kind,
        player: player.to_string(),
        amount,
        all_in,
    })
}

fn street_marker(lower: &str) -> Option<StreetMarker> {
    if lower.contains("*** flop") {
        Some(StreetMarker::Flop)
    } else if lower.contains("*** turn") {
        Some(StreetMarker::Turn)
    } else if lower.contains("*** river") {
        Some(StreetMarker::River)
    } else if lower.contains("*** show") {
        Some(StreetMarker::Showdown)
    } else {
        None
    }
}

/// Text before the first colon, trimmed.
pub fn player_before_colon(line: &str) -> Option<&str> {
    let (name, _) = line.split_once(':')?;
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

fn last_token(line: &str) -> Option<&str> {
    line.split_whitespace().last()
}

/// The last whitespace token that is all digits once parentheses are removed.
pub fn last_integer(line: &str) -> Option<i64> {
    line.split_whitespace()
        .rev()
        .map(|tok| tok.trim_matches(|c| c == '(' || c == ')'))
        .find(|tok| !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|tok| tok.parse().ok())
}
