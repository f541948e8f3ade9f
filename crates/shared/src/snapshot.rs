//! Wire snapshot of the game record.
//!
//! Display clients read exactly this shape from `GET /api/game`, from the
//! two action endpoints, and from every `gameUpdated` push.

use serde::{Deserialize, Serialize};
use snakeladder_domain::{GameState, PlayerId, PLAYER_COUNT};

/// Display names used when announcing the winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub first: String,
    pub second: String,
}

impl PlayerNames {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn name_of(&self, player: PlayerId) -> &str {
        match player {
            PlayerId::First => &self.first,
            PlayerId::Second => &self.second,
        }
    }

    /// Banner shown once `player` reaches the last cell.
    pub fn winner_banner(&self, player: PlayerId) -> String {
        format!("{} Wins 🎉", self.name_of(player))
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("Nida", "Ivan")
    }
}

/// JSON body describing the whole game at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub player_positions: [u8; PLAYER_COUNT],
    /// Seat index (0 or 1) of the player to move.
    pub turn: u8,
    /// Face of the last roll; `null` before the first roll after a reset.
    pub dice: Option<u8>,
    /// Winner banner; `null` while the game is in progress.
    pub winner: Option<String>,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState, names: &PlayerNames) -> Self {
        Self {
            player_positions: state.positions(),
            turn: state.turn().index() as u8,
            dice: state.last_roll().map(|roll| roll.value()),
            winner: state.winner().map(|player| names.winner_banner(player)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakeladder_domain::{Board, DieRoll};

    #[test]
    fn fresh_game_has_null_dice_and_winner() {
        let snapshot = GameSnapshot::from_state(&GameState::new(), &PlayerNames::default());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "playerPositions": [1, 1],
                "turn": 0,
                "dice": null,
                "winner": null,
            })
        );
    }

    #[test]
    fn rolled_game_reports_dice_and_next_turn() {
        let mut state = GameState::new();
        state.roll_dice(&Board::standard(), || DieRoll::new(3).unwrap());
        let snapshot = GameSnapshot::from_state(&state, &PlayerNames::default());
        assert_eq!(snapshot.player_positions, [4, 1]);
        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.dice, Some(3));
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn winner_uses_configured_names() {
        let state = GameState::from_parts(
            [37, 100],
            PlayerId::Second,
            Some(DieRoll::new(6).unwrap()),
            Some(PlayerId::Second),
        )
        .unwrap();

        let default_names = GameSnapshot::from_state(&state, &PlayerNames::default());
        assert_eq!(default_names.winner.as_deref(), Some("Ivan Wins 🎉"));

        let custom = GameSnapshot::from_state(&state, &PlayerNames::new("Ada", "Grace"));
        assert_eq!(custom.winner.as_deref(), Some("Grace Wins 🎉"));
    }

    #[test]
    fn deserializes_client_view() {
        let snapshot: GameSnapshot = serde_json::from_str(
            r#"{"playerPositions":[12,49],"turn":1,"dice":6,"winner":null}"#,
        )
        .unwrap();
        assert_eq!(snapshot.player_positions, [12, 49]);
        assert_eq!(snapshot.dice, Some(6));
    }
}
