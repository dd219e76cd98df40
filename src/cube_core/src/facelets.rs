//! The 54 character facelet string used by two-phase solvers.
//!
//! Faces are written in URFDLB order, each in its own reading order, and each
//! sticker is written as the letter of the face whose center shares its
//! color. A solved cube is `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    STICKER_COUNT, STICKERS_PER_FACE,
    color::{Color, ColorScheme, Sticker},
    face::Face,
    face_grid::FaceGrid,
    state::CubeState,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error("A facelet string must have 54 characters but got {0}")]
    InvalidLength(usize),
    #[error("Invalid facelet `{character}` at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Sticker {face}{index} has unknown color `{label}`")]
    UnrecognizedSticker {
        face: Face,
        index: usize,
        label: String,
    },
    #[error("More than one face has a {0} center")]
    DuplicateCenter(Color),
}

/// Encode `state` as a facelet string, naming colors by the face whose center
/// carries them.
///
/// # Errors
///
/// If a sticker has an unknown color or two centers share a color.
pub fn to_facelet_string(state: &CubeState) -> Result<String, FaceletError> {
    let mut centers = [Color::White; 6];
    for face in Face::ALL {
        let center = state.face_grid(face).center();
        let color = center
            .color()
            .ok_or_else(|| FaceletError::UnrecognizedSticker {
                face,
                index: 4,
                label: center.label().to_owned(),
            })?;
        if centers[..face as usize].contains(&color) {
            return Err(FaceletError::DuplicateCenter(color));
        }
        centers[face as usize] = color;
    }
    let scheme = ColorScheme::new(centers);

    state
        .stickers()
        .map(|(face, index, sticker)| {
            sticker
                .color()
                .and_then(|color| scheme.face_of(color))
                .map(Face::letter)
                .ok_or_else(|| FaceletError::UnrecognizedSticker {
                    face,
                    index,
                    label: sticker.label().to_owned(),
                })
        })
        .collect()
}

/// Decode a facelet string, painting each face letter with that face's
/// center color from `scheme`.
///
/// # Errors
///
/// If the string is not 54 face letters long.
pub fn from_facelet_string(
    facelets: &str,
    scheme: &ColorScheme,
) -> Result<CubeState, FaceletError> {
    let letters = facelets.trim().chars().collect::<Vec<_>>();
    if letters.len() != STICKER_COUNT {
        return Err(FaceletError::InvalidLength(letters.len()));
    }

    let colors = letters
        .iter()
        .enumerate()
        .map(|(position, &character)| {
            Face::from_letter(character)
                .map(|face| scheme.center(face))
                .ok_or(FaceletError::InvalidCharacter {
                    character,
                    position,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CubeState::from_faces(std::array::from_fn(|face| {
        Arc::new(FaceGrid::from_array(std::array::from_fn(|index| {
            Sticker::Color(colors[face * STICKERS_PER_FACE + index])
        })))
    })))
}
