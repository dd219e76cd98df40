use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    STICKERS_PER_FACE,
    color::{ColorScheme, Sticker},
    engine,
    face::Face,
    face_grid::{FaceGrid, FaceGridError},
    moves::Move,
};

/// The 54 stickers of a cube, one [`FaceGrid`] per face.
///
/// A `CubeState` is never modified in place. Turning a face returns a new
/// state that shares the untouched face grids with the old one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StateRepr", into = "StateRepr")]
pub struct CubeState {
    faces: [Arc<FaceGrid>; 6],
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeStateError {
    #[error("Face {face} must have exactly 9 stickers but got {actual}")]
    InvalidLength { face: Face, actual: usize },
    #[error("No stickers were given for face {0}")]
    MissingFace(Face),
    #[error("Stickers were given more than once for face {0}")]
    DuplicateFace(Face),
}

/// The persisted form: each face letter mapped to its nine sticker labels.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(non_snake_case)]
struct StateRepr {
    U: Option<Vec<Sticker>>,
    R: Option<Vec<Sticker>>,
    F: Option<Vec<Sticker>>,
    D: Option<Vec<Sticker>>,
    L: Option<Vec<Sticker>>,
    B: Option<Vec<Sticker>>,
}

impl TryFrom<StateRepr> for CubeState {
    type Error = CubeStateError;

    fn try_from(value: StateRepr) -> Result<Self, Self::Error> {
        CubeState::from_stickers(
            [
                (Face::U, value.U),
                (Face::R, value.R),
                (Face::F, value.F),
                (Face::D, value.D),
                (Face::L, value.L),
                (Face::B, value.B),
            ]
            .into_iter()
            .filter_map(|(face, stickers)| Some((face, stickers?))),
        )
    }
}

impl From<CubeState> for StateRepr {
    fn from(value: CubeState) -> Self {
        let [u, r, f, d, l, b] = value
            .faces
            .map(|grid| Some(grid.stickers().to_vec()));
        StateRepr {
            U: u,
            R: r,
            F: f,
            D: d,
            L: l,
            B: b,
        }
    }
}

impl CubeState {
    pub(crate) fn from_faces(faces: [Arc<FaceGrid>; 6]) -> Self {
        CubeState { faces }
    }

    pub(crate) fn face_arc(&self, face: Face) -> &Arc<FaceGrid> {
        &self.faces[face as usize]
    }

    /// A solved cube in the default color scheme.
    #[must_use]
    pub fn solved() -> Self {
        Self::solved_with(&ColorScheme::default())
    }

    #[must_use]
    pub fn solved_with(scheme: &ColorScheme) -> Self {
        CubeState {
            faces: Face::ALL.map(|face| Arc::new(FaceGrid::uniform(scheme.center(face)))),
        }
    }

    /// A cube that has not been scanned yet: every sticker is unrecognized.
    #[must_use]
    pub fn unclassified() -> Self {
        let grid = Arc::new(FaceGrid::uniform(Sticker::unknown()));
        CubeState {
            faces: std::array::from_fn(|_| Arc::clone(&grid)),
        }
    }

    /// Build a state from one grid per face.
    ///
    /// # Errors
    ///
    /// If a face is missing or given twice.
    pub fn from_grids(
        grids: impl IntoIterator<Item = (Face, FaceGrid)>,
    ) -> Result<Self, CubeStateError> {
        let mut faces: [Option<Arc<FaceGrid>>; 6] = [const { None }; 6];
        for (face, grid) in grids {
            let slot = &mut faces[face as usize];
            if slot.is_some() {
                return Err(CubeStateError::DuplicateFace(face));
            }
            *slot = Some(Arc::new(grid));
        }

        if let Some(face) = Face::ALL
            .into_iter()
            .find(|&face| faces[face as usize].is_none())
        {
            return Err(CubeStateError::MissingFace(face));
        }

        // Every slot was checked above
        Ok(CubeState {
            faces: faces.map(Option::unwrap),
        })
    }

    /// Build a state from classifier output: nine sticker labels per face.
    ///
    /// # Errors
    ///
    /// If a face is missing, given twice, or does not have nine stickers.
    pub fn from_stickers<S: Into<Sticker>>(
        stickers: impl IntoIterator<Item = (Face, Vec<S>)>,
    ) -> Result<Self, CubeStateError> {
        let grids = stickers
            .into_iter()
            .map(|(face, stickers)| {
                FaceGrid::new(stickers)
                    .map(|grid| (face, grid))
                    .map_err(|FaceGridError::InvalidLength { actual }| {
                        CubeStateError::InvalidLength { face, actual }
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_grids(grids)
    }

    /// The flat form of this state, suitable for persistence.
    #[must_use]
    pub fn to_stickers(&self) -> BTreeMap<Face, Vec<Sticker>> {
        Face::ALL
            .into_iter()
            .map(|face| (face, self.face_grid(face).stickers().to_vec()))
            .collect()
    }

    #[must_use]
    pub fn face_grid(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    #[must_use]
    pub fn sticker(&self, face: Face, index: usize) -> Option<&Sticker> {
        self.face_grid(face).sticker(index)
    }

    /// All 54 stickers in `Face::ALL` order.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, usize, &Sticker)> {
        Face::ALL.into_iter().flat_map(move |face| {
            (0..STICKERS_PER_FACE).map(move |index| (face, index, &self.face_grid(face)[index]))
        })
    }

    #[must_use]
    pub fn apply_move(&self, move_: Move) -> Self {
        engine::apply(self, move_)
    }

    #[must_use]
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        engine::apply_all(self, moves)
    }

    /// Whether all nine stickers of every face are equal. Neither the
    /// colors nor their legality are checked; pair with the validator for
    /// that.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| grid.is_uniform())
    }

    /// Whether `self` and `other` share the same allocation for `face`.
    #[must_use]
    pub fn shares_face_with(&self, other: &Self, face: Face) -> bool {
        Arc::ptr_eq(self.face_arc(face), other.face_arc(face))
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn solved_stickers() -> Vec<(Face, Vec<Color>)> {
        let scheme = ColorScheme::default();
        Face::ALL
            .into_iter()
            .map(|face| (face, vec![scheme.center(face); 9]))
            .collect()
    }

    #[test]
    fn from_stickers_builds_solved() {
        let state = CubeState::from_stickers(solved_stickers()).unwrap();
        assert_eq!(state, CubeState::solved());
        assert!(state.is_solved());
    }

    #[test]
    fn missing_face() {
        let mut stickers = solved_stickers();
        stickers.retain(|(face, _)| *face != Face::L);
        assert_eq!(
            CubeState::from_stickers(stickers),
            Err(CubeStateError::MissingFace(Face::L))
        );
    }

    #[test]
    fn duplicate_face() {
        let mut stickers = solved_stickers();
        stickers.push((Face::U, vec![Color::White; 9]));
        assert_eq!(
            CubeState::from_stickers(stickers),
            Err(CubeStateError::DuplicateFace(Face::U))
        );
    }

    #[test]
    fn short_face_is_rejected() {
        let mut stickers = solved_stickers();
        stickers[2].1.pop();
        assert_eq!(
            CubeState::from_stickers(stickers),
            Err(CubeStateError::InvalidLength {
                face: Face::F,
                actual: 8
            })
        );
    }

    #[test]
    fn unclassified_is_not_solved_by_color() {
        let state = CubeState::unclassified();
        assert!(state.stickers().all(|(_, _, sticker)| sticker.color().is_none()));
        assert_eq!(state.stickers().count(), 54);
    }

    #[test]
    fn solved_means_uniform_faces() {
        let unclassified = CubeState::unclassified();
        assert!(Face::ALL.iter().all(|&face| unclassified.face_grid(face).is_uniform()));
        assert!(unclassified.is_solved());

        let turned = CubeState::solved().apply_move(Move::quarter(Face::F));
        assert!(!turned.is_solved());
    }

    #[test]
    fn flat_round_trip() {
        let state = CubeState::solved();
        let flat = state.to_stickers();
        assert_eq!(flat.len(), 6);
        assert_eq!(CubeState::from_stickers(flat).unwrap(), state);
    }

    #[test]
    fn uniform_but_unconventional_faces_are_solved() {
        let stickers = Face::ALL
            .into_iter()
            .map(|face| (face, vec![Color::Blue; 9]))
            .collect::<Vec<_>>();
        assert!(CubeState::from_stickers(stickers).unwrap().is_solved());
    }
}
