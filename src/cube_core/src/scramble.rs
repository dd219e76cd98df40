use itertools::Itertools;
use log::debug;

use crate::moves::Move;

/// A random move sequence of `length` moves in which no two consecutive
/// moves turn the same face.
pub fn random_moves(length: usize, rng: &mut fastrand::Rng) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(length);
    for _ in 0..length {
        let last_face = moves.last().map(|last| last.face());
        let candidates = Move::all()
            .filter(|move_| Some(move_.face()) != last_face)
            .collect_vec();
        let Some(move_) = rng.choice(candidates) else {
            break;
        };
        moves.push(move_);
    }
    debug!("Generated a {length} move scramble");
    moves
}
