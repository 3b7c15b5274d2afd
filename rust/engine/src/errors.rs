use thiserror::Error;

/// Structural failure while parsing one hand block. Fatal for that hand only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Hand block is empty")]
    EmptyBlock,
    #[error("Header has no hand identifier: {header}")]
    MissingHandId { header: String },
    #[error("Hand {hand_id}: no '*** SUMMARY ***' delimiter")]
    MissingSummary { hand_id: String },
    #[error("Hand {hand_id}: summary has no 'Total pot <n> | Rake <n>' line")]
    MissingPotLine { hand_id: String },
    #[error("Hand {hand_id}: no seated players")]
    NoSeats { hand_id: String },
    #[error("Hand {hand_id}: no table line naming the button seat")]
    MissingButton { hand_id: String },
    #[error("Hand {hand_id}: no '(small/big)' blinds token")]
    MissingBlinds { hand_id: String },
}

impl ParseError {
    /// Hand identifier when the header was readable.
    pub fn hand_id(&self) -> Option<&str> {
        match self {
            ParseError::EmptyBlock | ParseError::MissingHandId { .. } => None,
            ParseError::MissingSummary { hand_id }
            | ParseError::MissingPotLine { hand_id }
            | ParseError::NoSeats { hand_id }
            | ParseError::MissingButton { hand_id }
            | ParseError::MissingBlinds { hand_id } => Some(hand_id),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("No hands were processed")]
    NoHands,
}
