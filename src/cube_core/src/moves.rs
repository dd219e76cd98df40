use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::face::Face;

/// A clockwise turn of one face by one, two, or three quarter turns, as seen
/// from outside the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoveRepr", into = "MoveRepr")]
pub struct Move {
    face: Face,
    turns: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("A move must turn one to three quarter turns but got {0}")]
    InvalidTurnCount(u8),
}

#[derive(Serialize, Deserialize)]
struct MoveRepr {
    face: Face,
    turns: u8,
}

impl TryFrom<MoveRepr> for Move {
    type Error = MoveError;

    fn try_from(value: MoveRepr) -> Result<Self, Self::Error> {
        Move::new(value.face, value.turns)
    }
}

impl From<Move> for MoveRepr {
    fn from(value: Move) -> Self {
        MoveRepr {
            face: value.face,
            turns: value.turns,
        }
    }
}

impl Move {
    /// # Errors
    ///
    /// If `turns` is not 1, 2, or 3.
    pub const fn new(face: Face, turns: u8) -> Result<Self, MoveError> {
        match turns {
            1..=3 => Ok(Move { face, turns }),
            _ => Err(MoveError::InvalidTurnCount(turns)),
        }
    }

    #[must_use]
    pub const fn quarter(face: Face) -> Self {
        Move { face, turns: 1 }
    }

    #[must_use]
    pub const fn half(face: Face) -> Self {
        Move { face, turns: 2 }
    }

    #[must_use]
    pub const fn prime(face: Face) -> Self {
        Move { face, turns: 3 }
    }

    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    #[must_use]
    pub const fn turns(self) -> u8 {
        self.turns
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Move {
            face: self.face,
            turns: 4 - self.turns,
        }
    }

    /// Every distinct move, 18 in total.
    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL
            .into_iter()
            .flat_map(|face| (1..=3).map(move |turns| Move { face, turns }))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        match self.turns {
            2 => f.write_str("2"),
            3 => f.write_str("'"),
            _ => Ok(()),
        }
    }
}
