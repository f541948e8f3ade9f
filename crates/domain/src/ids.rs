use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of seats at the board.
pub const PLAYER_COUNT: usize = 2;

/// One of the two seats at the board.
///
/// Index 0 always moves first after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Both seats, in turn order.
    pub const ALL: [PlayerId; PLAYER_COUNT] = [PlayerId::First, PlayerId::Second];

    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_turn_order() {
        for (expected, player) in PlayerId::ALL.into_iter().enumerate() {
            assert_eq!(player.index(), expected);
        }
    }

    #[test]
    fn other_alternates() {
        assert_eq!(PlayerId::First.other(), PlayerId::Second);
        assert_eq!(PlayerId::Second.other(), PlayerId::First);
        assert_eq!(PlayerId::First.other().other(), PlayerId::First);
    }

    #[test]
    fn display_uses_index() {
        assert_eq!(PlayerId::Second.to_string(), "player 1");
    }
}
