//! Applying moves to states.
//!
//! Both the turned face and its four neighbors are driven by
//! [`ADJACENCY`]; there is no per-face special casing.

use std::sync::{Arc, LazyLock};

use log::trace;

use crate::{
    STICKER_COUNT, STICKERS_PER_FACE,
    adjacency::ADJACENCY,
    face::Face,
    face_grid::{self, FaceGrid},
    moves::Move,
    state::CubeState,
};

/// Turn `move_.face()` on any per-face layout of stickers, returning the five
/// faces that change. The turned face comes first.
fn turned_faces<'a, T: Clone + 'a>(
    cells: impl Fn(Face) -> &'a [T; STICKERS_PER_FACE],
    move_: Move,
) -> [(Face, [T; STICKERS_PER_FACE]); 5] {
    let face = move_.face();
    let turns = usize::from(move_.turns());
    let strips = ADJACENCY.neighbors(face);

    let mut own = cells(face).clone();
    for _ in 0..turns {
        own = face_grid::rotate(&own, true);
    }

    let before = strips.map(|strip| strip.indices.map(|index| cells(strip.face)[index].clone()));
    let [a, b, c, d] = std::array::from_fn(|i| {
        let strip = &strips[i];
        let source = &before[(i + 4 - turns) % 4];
        let mut stickers = cells(strip.face).clone();
        for (&index, sticker) in strip.indices.iter().zip(source) {
            stickers[index] = sticker.clone();
        }
        (strip.face, stickers)
    });

    [(face, own), a, b, c, d]
}

/// Apply one move, producing a new state. The face opposite the turned face
/// is shared with `state`.
#[must_use]
pub fn apply(state: &CubeState, move_: Move) -> CubeState {
    trace!("Applying {move_}");

    let mut faces = Face::ALL.map(|face| Arc::clone(state.face_arc(face)));
    for (face, stickers) in turned_faces(|face| state.face_grid(face).stickers(), move_) {
        faces[face as usize] = Arc::new(FaceGrid::from_array(stickers));
    }
    CubeState::from_faces(faces)
}

/// Apply `moves` in order.
#[must_use]
pub fn apply_all(state: &CubeState, moves: &[Move]) -> CubeState {
    moves
        .iter()
        .fold(state.clone(), |current, &move_| apply(&current, move_))
}

/// Every intermediate state of playing `moves` from `state`, one per move.
/// The starting state itself is not yielded.
pub fn playback<'a>(
    state: &CubeState,
    moves: &'a [Move],
) -> impl Iterator<Item = CubeState> + use<'a> {
    moves.iter().scan(state.clone(), |current, &move_| {
        *current = apply(current, move_);
        Some(current.clone())
    })
}

/// Position of `(face, index)` in a flattened 54 sticker layout.
#[must_use]
pub const fn flat_index(face: Face, index: usize) -> usize {
    face as usize * STICKERS_PER_FACE + index
}

static PERMUTATIONS: LazyLock<Box<[[usize; STICKER_COUNT]]>> = LazyLock::new(|| {
    let identity: [[usize; STICKERS_PER_FACE]; 6] =
        std::array::from_fn(|face| std::array::from_fn(|index| face * STICKERS_PER_FACE + index));

    Move::all()
        .map(|move_| {
            let mut flat: [usize; STICKER_COUNT] = std::array::from_fn(|i| i);
            for (face, cells) in turned_faces(|face| &identity[face as usize], move_) {
                flat[flat_index(face, 0)..flat_index(face, STICKERS_PER_FACE)]
                    .copy_from_slice(&cells);
            }
            flat
        })
        .collect()
});

/// The facelet permutation performed by `move_`, in "comes-from" form:
/// after the move, position `i` holds the sticker that was at
/// `permutation(move_)[i]`. Positions are numbered by [`flat_index`].
#[must_use]
pub fn permutation(move_: Move) -> &'static [usize; STICKER_COUNT] {
    &PERMUTATIONS[move_.face() as usize * 3 + usize::from(move_.turns()) - 1]
}
