//! Suspend/resume snapshots.
//!
//! A snapshot carries the game triple verbatim plus the RNG position, so a
//! restored session draws the same next target it would have drawn.

use serde::{Deserialize, Serialize};

use crate::core::{GameRngState, GameState, ProgressError};

/// Everything needed to resume a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub rng: GameRngState,
    pub dismissed: bool,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProgressError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode. The state is not validated here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProgressError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_bytes_fail() {
        let snapshot = SessionSnapshot {
            state: GameState::new(9).unwrap(),
            rng: GameRngState { seed: 1, word_pos: 0 },
            dismissed: false,
        };
        let bytes = snapshot.to_bytes().unwrap();

        let err = SessionSnapshot::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, ProgressError::Snapshot(_)));
    }

    #[test]
    fn test_roundtrip() {
        let snapshot = SessionSnapshot {
            state: GameState::new(9).unwrap(),
            rng: GameRngState { seed: 1, word_pos: 64 },
            dismissed: true,
        };
        let back = SessionSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
        assert_eq!(snapshot, back);
    }
}
