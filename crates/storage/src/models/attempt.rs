use rust_decimal::Decimal;

/// Outcome of a single recorded attempt.
///
/// The source data encodes the outcome in the sign of the recorded weight: a
/// strictly positive weight is a made lift, zero or a negative weight is a
/// miss (or an attempt that was never taken). Magnitude is irrelevant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Made,
    Missed,
}

impl AttemptOutcome {
    pub fn from_recorded(weight: Decimal) -> Self {
        if weight > Decimal::ZERO {
            Self::Made
        } else {
            Self::Missed
        }
    }

    pub fn is_made(self) -> bool {
        self == Self::Made
    }
}

/// Number of made attempts among the three recorded for one lift type.
pub fn made_count(attempts: [Decimal; 3]) -> u8 {
    attempts
        .into_iter()
        .filter(|weight| AttemptOutcome::from_recorded(*weight).is_made())
        .count() as u8
}
