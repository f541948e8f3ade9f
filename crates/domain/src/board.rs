//! Board topology: the snakes and ladders that redirect a landing.
//!
//! A `Board` is immutable once built. Construction rejects topologies the
//! transition rules cannot handle, so lookups never need to arbitrate.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::DomainError;

/// Highest cell; landing here exactly wins the game.
pub const BOARD_SIZE: u8 = 100;

/// Every player starts (and restarts) here.
pub const START_CELL: u8 = 1;

/// Snakes on the standard board, as `(head, tail)`.
pub const STANDARD_SNAKES: [(u8, u8); 5] = [(16, 5), (57, 22), (86, 66), (98, 27), (92, 71)];

/// Ladders on the standard board, as `(foot, top)`.
pub const STANDARD_LADDERS: [(u8, u8); 3] = [(13, 49), (42, 79), (52, 71)];

/// Whether `cell` is on the board.
pub fn is_cell(cell: u8) -> bool {
    (START_CELL..=BOARD_SIZE).contains(&cell)
}

/// A jump taken after landing on a snake head or ladder foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Redirect {
    Snake { from: u8, to: u8 },
    Ladder { from: u8, to: u8 },
}

impl Redirect {
    /// Cell the player ends up on.
    pub fn target(self) -> u8 {
        match self {
            Redirect::Snake { to, .. } | Redirect::Ladder { to, .. } => to,
        }
    }
}

/// Read-only snake and ladder lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    snakes: BTreeMap<u8, u8>,
    ladders: BTreeMap<u8, u8>,
}

impl Board {
    /// Build a board, validating its topology.
    ///
    /// Every endpoint must be a board cell, snakes must lead down, ladders
    /// must lead up, and no cell may start two jumps.
    pub fn new(
        snakes: impl IntoIterator<Item = (u8, u8)>,
        ladders: impl IntoIterator<Item = (u8, u8)>,
    ) -> Result<Self, DomainError> {
        let snakes = collect_jumps("snake", snakes, |from, to| to < from)?;
        let ladders = collect_jumps("ladder", ladders, |from, to| to > from)?;

        if let Some(cell) = snakes.keys().find(|cell| ladders.contains_key(*cell)) {
            return Err(DomainError::constraint(format!(
                "cell {cell} is both a snake head and a ladder foot"
            )));
        }

        Ok(Self { snakes, ladders })
    }

    /// The fixed topology the game ships with.
    pub fn standard() -> Self {
        Self {
            snakes: STANDARD_SNAKES.into_iter().collect(),
            ladders: STANDARD_LADDERS.into_iter().collect(),
        }
    }

    /// The jump starting at `cell`, if any. Snakes are checked first.
    pub fn redirect(&self, cell: u8) -> Option<Redirect> {
        if let Some(&to) = self.snakes.get(&cell) {
            return Some(Redirect::Snake { from: cell, to });
        }
        self.ladders
            .get(&cell)
            .map(|&to| Redirect::Ladder { from: cell, to })
    }

    pub fn snakes(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.snakes.iter().map(|(&from, &to)| (from, to))
    }

    pub fn ladders(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.ladders.iter().map(|(&from, &to)| (from, to))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

fn collect_jumps(
    kind: &str,
    jumps: impl IntoIterator<Item = (u8, u8)>,
    direction_ok: impl Fn(u8, u8) -> bool,
) -> Result<BTreeMap<u8, u8>, DomainError> {
    let mut table = BTreeMap::new();
    for (from, to) in jumps {
        if !is_cell(from) || !is_cell(to) {
            return Err(DomainError::validation(format!(
                "{kind} {from}->{to} leaves the board"
            )));
        }
        if !direction_ok(from, to) {
            return Err(DomainError::validation(format!(
                "{kind} {from}->{to} points the wrong way"
            )));
        }
        if table.insert(from, to).is_some() {
            return Err(DomainError::constraint(format!(
                "cell {from} starts more than one {kind}"
            )));
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [(u8, u8); 0] = [];

    #[test]
    fn standard_board_passes_validation() {
        let validated = Board::new(STANDARD_SNAKES, STANDARD_LADDERS).unwrap();
        assert_eq!(validated, Board::standard());
    }

    #[test]
    fn redirect_finds_snakes_and_ladders() {
        let board = Board::standard();
        assert_eq!(board.redirect(16), Some(Redirect::Snake { from: 16, to: 5 }));
        assert_eq!(board.redirect(98), Some(Redirect::Snake { from: 98, to: 27 }));
        assert_eq!(board.redirect(13), Some(Redirect::Ladder { from: 13, to: 49 }));
        assert_eq!(board.redirect(52), Some(Redirect::Ladder { from: 52, to: 71 }));
        assert_eq!(board.redirect(50), None);
        assert_eq!(board.redirect(100), None);
    }

    #[test]
    fn redirect_target() {
        assert_eq!(Redirect::Snake { from: 57, to: 22 }.target(), 22);
        assert_eq!(Redirect::Ladder { from: 42, to: 79 }.target(), 79);
    }

    #[test]
    fn rejects_overlapping_sources() {
        let err = Board::new([(30, 10)], [(30, 60)]).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn rejects_duplicate_source_in_one_table() {
        let err = Board::new([(30, 10), (30, 12)], NONE).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn rejects_cells_off_the_board() {
        assert!(Board::new([(30, 0)], NONE).is_err());
        assert!(Board::new(NONE, [(50, 101)]).is_err());
    }

    #[test]
    fn rejects_wrong_direction() {
        assert!(Board::new([(10, 30)], NONE).is_err());
        assert!(Board::new(NONE, [(30, 10)]).is_err());
    }

    #[test]
    fn iterators_list_every_jump() {
        let board = Board::standard();
        assert_eq!(board.snakes().count(), STANDARD_SNAKES.len());
        assert_eq!(board.ladders().count(), STANDARD_LADDERS.len());
        assert!(board.snakes().all(|(from, to)| to < from));
        assert!(board.ladders().all(|(from, to)| to > from));
    }
}
