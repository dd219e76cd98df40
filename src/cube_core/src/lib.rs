#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_panics_doc)]

//! Sticker-level state and move engine for the 3x3x3 cube.
//!
//! A [`CubeState`] is six [`FaceGrid`]s of nine [`Sticker`]s each. States are
//! values: applying a [`Move`] returns a new state and leaves the old one
//! untouched. All turning logic is driven by the single
//! [`adjacency::ADJACENCY`] table.

pub mod adjacency;
pub mod color;
pub mod engine;
pub mod face;
pub mod face_grid;
pub mod facelets;
pub mod moves;
pub mod notation;
pub mod scramble;
pub mod state;
pub mod validator;

pub use color::{Color, ColorScheme, ParseColorError, Sticker, UnknownLabel};
pub use face::{Face, ParseFaceError};
pub use face_grid::{FaceGrid, FaceGridError};
pub use moves::{Move, MoveError};
pub use state::{CubeState, CubeStateError};
pub use validator::{ValidationError, ValidationResult, validate};

/// Number of stickers on one face.
pub const STICKERS_PER_FACE: usize = 9;

/// Number of stickers on the whole cube.
pub const STICKER_COUNT: usize = STICKERS_PER_FACE * 6;
