//! Authoritative game record storage.
//!
//! Exactly one `GameStore` exists per engine. It is the only owner of the
//! live [`GameState`]; everyone else sees clones.

use snakeladder_domain::{Board, DieRoll, GameState, RollOutcome};
use tokio::sync::{Mutex, MutexGuard};

use crate::infrastructure::ports::RandomPort;

/// Holds the game record and the board it is played on.
pub struct GameStore {
    board: Board,
    state: Mutex<GameState>,
}

impl GameStore {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Mutex::new(GameState::new()),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the current record.
    pub async fn snapshot(&self) -> GameState {
        self.state.lock().await.clone()
    }

    /// Exclusive access for a transition plus whatever must happen before
    /// the next transition may start (e.g. publishing the result).
    pub async fn lock(&self) -> GameGuard<'_> {
        GameGuard {
            board: &self.board,
            state: self.state.lock().await,
        }
    }

    #[cfg(test)]
    pub async fn roll(&self, random: &dyn RandomPort) -> (GameState, RollOutcome) {
        let mut game = self.lock().await;
        let outcome = game.roll(random);
        (game.state().clone(), outcome)
    }

    #[cfg(test)]
    pub async fn reset(&self) -> GameState {
        let mut game = self.lock().await;
        game.reset();
        game.state().clone()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(Board::standard())
    }
}

/// Locked view of the store. Only `roll` and `reset` can change the record.
pub struct GameGuard<'a> {
    board: &'a Board,
    state: MutexGuard<'a, GameState>,
}

impl GameGuard<'_> {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// One transition. The die is only drawn when the game is in progress.
    pub fn roll(&mut self, random: &dyn RandomPort) -> RollOutcome {
        self.state.roll_dice(self.board, || {
            DieRoll::from_source(random.gen_range(i32::from(DieRoll::MIN), i32::from(DieRoll::MAX)))
        })
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockRandomPort;
    use crate::infrastructure::random::{FixedRandom, SequenceRandom};
    use snakeladder_domain::PlayerId;

    #[tokio::test]
    async fn starts_with_fresh_game() {
        let store = GameStore::default();
        assert_eq!(store.snapshot().await, GameState::new());
    }

    #[tokio::test]
    async fn roll_asks_for_a_six_sided_die() {
        let store = GameStore::default();
        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .withf(|min, max| *min == 1 && *max == 6)
            .times(1)
            .return_const(2);

        let (state, _) = store.roll(&random).await;
        assert_eq!(state.positions(), [3, 1]);
        assert_eq!(store.snapshot().await, state);
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_store() {
        let store = GameStore::default();
        let mut copy = store.snapshot().await;
        copy.roll_dice(store.board(), || DieRoll::new(5).unwrap());
        assert_eq!(store.snapshot().await, GameState::new());
    }

    #[tokio::test]
    async fn terminal_game_does_not_draw() {
        let store = GameStore::default();
        // p0 climbs 13->49 and 52->71, then steps to exactly 100:
        // p0: 7, 13->49, 52->71, 77, 83, 89, 95, 100. p1 steps 2..=8.
        let script = SequenceRandom::new([6, 1, 6, 1, 3, 1, 6, 1, 6, 1, 6, 1, 6, 1, 5]);
        for _ in 0..15 {
            store.roll(&script).await;
        }
        let won = store.snapshot().await;
        assert_eq!(won.winner(), Some(PlayerId::First));
        assert_eq!(won.position_of(PlayerId::First), 100);

        let mut random = MockRandomPort::new();
        random.expect_gen_range().never();
        let (after, outcome) = store.roll(&random).await;
        assert_eq!(outcome, RollOutcome::Ignored);
        assert_eq!(after, won);
    }

    #[tokio::test]
    async fn reset_reinitializes_in_place() {
        let store = GameStore::default();
        store.roll(&FixedRandom(4)).await;
        store.roll(&FixedRandom(4)).await;
        assert_ne!(store.snapshot().await, GameState::new());

        let state = store.reset().await;
        assert_eq!(state, GameState::new());
        assert_eq!(store.snapshot().await, GameState::new());
    }

    #[tokio::test]
    async fn concurrent_rolls_are_serialized() {
        let store = std::sync::Arc::new(GameStore::default());
        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.roll(&FixedRandom(1)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        // 20 single steps alternate between seats: 10 each, from cell 1.
        // Cells 2..=11 contain no snake or ladder.
        let state = store.snapshot().await;
        assert_eq!(state.positions(), [11, 11]);
        assert_eq!(state.turn(), PlayerId::First);
    }
}
