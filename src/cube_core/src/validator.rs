use std::collections::HashMap;

use internment::ArcIntern;
use log::debug;
use thiserror::Error;

use crate::{
    STICKERS_PER_FACE,
    color::{Color, Sticker},
    face::Face,
    state::CubeState,
};

/// Something that makes a state impossible on a real cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected {expected} {color} stickers but found {actual}")]
    ColorCount {
        color: Color,
        expected: usize,
        actual: usize,
    },
    #[error("Unknown color `{label}` found on {count} sticker(s)")]
    UnknownColor { label: ArcIntern<str>, count: usize },
}

/// The outcome of [`validate`]. Always returned, never raised: callers decide
/// whether a failed validation blocks them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    needs_correction: Vec<Face>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Faces holding at least one sticker whose color was not recognized.
    #[must_use]
    pub fn faces_needing_correction(&self) -> &[Face] {
        &self.needs_correction
    }
}

/// Check that every color appears exactly nine times and that no sticker has
/// an unknown color.
///
/// This is necessary but not sufficient for a state to be reachable: piece
/// orientation and permutation parity are not checked.
#[must_use]
pub fn validate(state: &CubeState) -> ValidationResult {
    let mut color_counts = [0_usize; 6];
    let mut unknown: Vec<(ArcIntern<str>, usize)> = Vec::new();
    let mut unknown_index = HashMap::new();
    let mut needs_correction = Vec::new();

    for (face, _, sticker) in state.stickers() {
        match sticker {
            Sticker::Color(color) => {
                // Color::ALL lists the variants in declaration order
                color_counts[*color as usize] += 1;
            }
            Sticker::Unrecognized(label) => {
                let label = label.interned();
                let i = *unknown_index.entry(label.clone()).or_insert_with(|| {
                    unknown.push((label.clone(), 0));
                    unknown.len() - 1
                });
                unknown[i].1 += 1;
                if needs_correction.last() != Some(&face) {
                    needs_correction.push(face);
                }
            }
        }
    }

    let mut errors = Color::ALL
        .into_iter()
        .zip(color_counts)
        .filter(|&(_, actual)| actual != STICKERS_PER_FACE)
        .map(|(color, actual)| ValidationError::ColorCount {
            color,
            expected: STICKERS_PER_FACE,
            actual,
        })
        .collect::<Vec<_>>();
    errors.extend(
        unknown
            .into_iter()
            .map(|(label, count)| ValidationError::UnknownColor { label, count }),
    );

    debug!(
        "Validated state: {} error(s), {} face(s) need correction",
        errors.len(),
        needs_correction.len()
    );

    ValidationResult {
        errors,
        needs_correction,
    }
}
