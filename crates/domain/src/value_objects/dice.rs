//! Single six-sided die.
//!
//! The domain never draws randomness itself. Callers obtain a face from
//! whatever source they own and wrap it here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// The face of one six-sided die, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieRoll(u8);

impl DieRoll {
    /// Lowest face.
    pub const MIN: u8 = 1;
    /// Highest face.
    pub const MAX: u8 = 6;

    /// Wrap a face value, rejecting anything outside `1..=6`.
    pub fn new(face: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&face) {
            Ok(Self(face))
        } else {
            Err(DomainError::validation(format!(
                "die face {face} outside {}..={}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Wrap a face produced by a trusted random source.
    ///
    /// A source yielding an out-of-range face is a defect: debug builds
    /// panic, release builds clamp to the nearest face.
    pub fn from_source(face: i32) -> Self {
        debug_assert!(
            (i32::from(Self::MIN)..=i32::from(Self::MAX)).contains(&face),
            "random source produced die face {face}"
        );
        let clamped = face.clamp(i32::from(Self::MIN), i32::from(Self::MAX));
        Self(clamped as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieRoll {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieRoll> for u8 {
    fn from(roll: DieRoll) -> Self {
        roll.0
    }
}

impl fmt::Display for DieRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_face() {
        for face in 1..=6 {
            assert_eq!(DieRoll::new(face).unwrap().value(), face);
        }
    }

    #[test]
    fn test_rejects_zero_and_seven() {
        assert!(matches!(DieRoll::new(0), Err(DomainError::Validation(_))));
        assert!(matches!(DieRoll::new(7), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_from_source_in_range() {
        assert_eq!(DieRoll::from_source(4).value(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "random source produced die face 9")]
    fn test_from_source_out_of_range_panics_in_debug() {
        let _ = DieRoll::from_source(9);
    }

    #[test]
    fn test_serde_as_plain_number() {
        let roll = DieRoll::new(3).unwrap();
        assert_eq!(serde_json::to_string(&roll).unwrap(), "3");
        let parsed: DieRoll = serde_json::from_str("5").unwrap();
        assert_eq!(parsed.value(), 5);
        assert!(serde_json::from_str::<DieRoll>("8").is_err());
    }
}
