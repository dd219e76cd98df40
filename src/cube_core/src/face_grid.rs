use std::ops::Index;

use thiserror::Error;

use crate::{STICKERS_PER_FACE, color::Sticker};

/// `CLOCKWISE[i]` is the old index whose sticker lands on index `i` after a
/// clockwise quarter turn of a row-major 3x3 grid.
const CLOCKWISE: [usize; STICKERS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// The inverse of `CLOCKWISE`.
const COUNTER_CLOCKWISE: [usize; STICKERS_PER_FACE] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// The nine stickers of one face in row-major order, as seen from outside
/// the cube with the face's fixed up reference at the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid([Sticker; STICKERS_PER_FACE]);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceGridError {
    #[error("A face must have exactly 9 stickers but got {actual}")]
    InvalidLength { actual: usize },
}

impl FaceGrid {
    /// Create a face from exactly nine stickers.
    ///
    /// # Errors
    ///
    /// If `stickers` does not yield exactly nine values.
    pub fn new<S: Into<Sticker>>(
        stickers: impl IntoIterator<Item = S>,
    ) -> Result<Self, FaceGridError> {
        let stickers: Vec<Sticker> = stickers.into_iter().map(Into::into).collect();
        let actual = stickers.len();
        stickers
            .try_into()
            .map(FaceGrid)
            .map_err(|_| FaceGridError::InvalidLength { actual })
    }

    #[must_use]
    pub fn uniform(sticker: impl Into<Sticker>) -> Self {
        let sticker = sticker.into();
        FaceGrid(std::array::from_fn(|_| sticker.clone()))
    }

    pub(crate) fn from_array(stickers: [Sticker; STICKERS_PER_FACE]) -> Self {
        FaceGrid(stickers)
    }

    /// The sticker at `index`, or `None` past the end of the grid.
    #[must_use]
    pub fn sticker(&self, index: usize) -> Option<&Sticker> {
        self.0.get(index)
    }

    #[must_use]
    pub fn stickers(&self) -> &[Sticker; STICKERS_PER_FACE] {
        &self.0
    }

    #[must_use]
    pub fn center(&self) -> &Sticker {
        &self.0[4]
    }

    /// Whether all nine stickers are equal.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.0.iter().all(|sticker| sticker == &self.0[0])
    }

    /// This face turned a quarter turn in place.
    #[must_use]
    pub fn rotated(&self, clockwise: bool) -> Self {
        FaceGrid(rotate(&self.0, clockwise))
    }

    /// This face after `turns` clockwise quarter turns.
    #[must_use]
    pub fn rotated_turns(&self, turns: u8) -> Self {
        (0..turns % 4).fold(self.clone(), |grid, _| grid.rotated(true))
    }
}

/// Quarter-turn any row-major 3x3 layout.
pub(crate) fn rotate<T: Clone>(
    cells: &[T; STICKERS_PER_FACE],
    clockwise: bool,
) -> [T; STICKERS_PER_FACE] {
    let mapping = if clockwise {
        &CLOCKWISE
    } else {
        &COUNTER_CLOCKWISE
    };
    std::array::from_fn(|i| cells[mapping[i]].clone())
}

impl Index<usize> for FaceGrid {
    type Output = Sticker;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
