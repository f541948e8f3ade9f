//! The game record and the transition rules that advance it.
//!
//! All rules live in [`GameState::next`]. Nothing else writes positions,
//! turn or winner; [`GameState::roll_dice`] and [`GameState::reset`] swap in
//! a whole new record so no caller can observe a half-applied move.

use serde::{Deserialize, Serialize};

use crate::board::{is_cell, Board, Redirect, BOARD_SIZE, START_CELL};
use crate::ids::{PlayerId, PLAYER_COUNT};
use crate::value_objects::DieRoll;
use crate::DomainError;

/// Coarse lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    InProgress,
    /// A winner exists; rolls are no-ops until reset.
    Terminal,
}

/// What a single roll did. Returned alongside the new state for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RollOutcome {
    /// The game was already won; nothing changed and no die was drawn.
    Ignored,
    /// The roll would have carried the player past the last cell.
    Forfeited {
        player: PlayerId,
        roll: DieRoll,
        position: u8,
    },
    Moved {
        player: PlayerId,
        roll: DieRoll,
        from: u8,
        to: u8,
        redirect: Option<Redirect>,
    },
}

/// The single authoritative game record.
///
/// Deserialization goes through [`GameState::from_parts`], so a decoded
/// record satisfies the same invariants as one built by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GameStateRecord")]
pub struct GameState {
    positions: [u8; PLAYER_COUNT],
    turn: PlayerId,
    last_roll: Option<DieRoll>,
    winner: Option<PlayerId>,
}

impl GameState {
    /// Both players on the start cell, first player to move, no roll yet.
    pub fn new() -> Self {
        Self {
            positions: [START_CELL; PLAYER_COUNT],
            turn: PlayerId::First,
            last_roll: None,
            winner: None,
        }
    }

    /// Rebuild a record from its parts, checking the same invariants the
    /// transition rules maintain.
    pub fn from_parts(
        positions: [u8; PLAYER_COUNT],
        turn: PlayerId,
        last_roll: Option<DieRoll>,
        winner: Option<PlayerId>,
    ) -> Result<Self, DomainError> {
        if let Some(&bad) = positions.iter().find(|&&p| !is_cell(p)) {
            return Err(DomainError::validation(format!(
                "position {bad} is off the board"
            )));
        }
        let expected_winner = winner_of(&positions);
        if winner != expected_winner {
            return Err(DomainError::constraint(format!(
                "winner {winner:?} inconsistent with positions {positions:?}"
            )));
        }
        Ok(Self {
            positions,
            turn,
            last_roll,
            winner,
        })
    }

    pub fn positions(&self) -> [u8; PLAYER_COUNT] {
        self.positions
    }

    pub fn position_of(&self, player: PlayerId) -> u8 {
        self.positions[player.index()]
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn last_roll(&self) -> Option<DieRoll> {
        self.last_roll
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn phase(&self) -> GamePhase {
        if self.winner.is_some() {
            GamePhase::Terminal
        } else {
            GamePhase::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase() == GamePhase::Terminal
    }

    /// Compute the record that follows `self` after `roll`.
    ///
    /// A terminal record maps to an identical copy of itself.
    pub fn next(&self, board: &Board, roll: DieRoll) -> (GameState, RollOutcome) {
        if self.is_terminal() {
            return (self.clone(), RollOutcome::Ignored);
        }

        let mover = self.turn;
        let from = self.position_of(mover);
        let candidate = from.saturating_add(roll.value());
        let mut positions = self.positions;

        let outcome = if candidate > BOARD_SIZE {
            RollOutcome::Forfeited {
                player: mover,
                roll,
                position: from,
            }
        } else {
            let redirect = board.redirect(candidate);
            let to = redirect.map_or(candidate, Redirect::target);
            positions[mover.index()] = to;
            RollOutcome::Moved {
                player: mover,
                roll,
                from,
                to,
                redirect,
            }
        };

        let winner = winner_of(&positions);
        let next = GameState {
            positions,
            turn: if winner.is_some() { mover } else { mover.other() },
            last_roll: Some(roll),
            winner,
        };
        next.debug_check_invariants();
        (next, outcome)
    }

    /// Apply one roll in place.
    ///
    /// `draw` is only called when the game is still in progress, so a
    /// terminal record never consumes randomness.
    pub fn roll_dice(&mut self, board: &Board, draw: impl FnOnce() -> DieRoll) -> RollOutcome {
        if self.is_terminal() {
            return RollOutcome::Ignored;
        }
        let (next, outcome) = self.next(board, draw());
        *self = next;
        outcome
    }

    /// Return to the starting record regardless of the current one.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.positions.iter().all(|&p| is_cell(p)),
            "position off the board: {:?}",
            self.positions
        );
        debug_assert_eq!(
            self.winner,
            winner_of(&self.positions),
            "winner out of sync with positions {:?}",
            self.positions
        );
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateRecord {
    positions: [u8; PLAYER_COUNT],
    turn: PlayerId,
    last_roll: Option<DieRoll>,
    winner: Option<PlayerId>,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = DomainError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        GameState::from_parts(record.positions, record.turn, record.last_roll, record.winner)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// First player (in seat order) standing on the last cell.
fn winner_of(positions: &[u8; PLAYER_COUNT]) -> Option<PlayerId> {
    PlayerId::ALL
        .into_iter()
        .find(|player| positions[player.index()] == BOARD_SIZE)
}
