//! The geometry of the cube, written down once.
//!
//! For every face the table lists its four neighbors in clockwise order as
//! seen from outside that face, starting with the neighbor across its top
//! edge. Each neighbor entry names the three stickers on the neighbor that
//! touch the turned face, listed in the order they are met when walking the
//! turned face's border clockwise. A clockwise quarter turn therefore moves
//! strip `i` onto strip `i + 1`.
//!
//! Reading order of each face follows the standard unfolded net:
//!
//! ```text
//!           U0 U1 U2
//!           U3 U4 U5
//!           U6 U7 U8
//! L0 L1 L2  F0 F1 F2  R0 R1 R2  B0 B1 B2
//! L3 L4 L5  F3 F4 F5  R3 R4 R5  B3 B4 B5
//! L6 L7 L8  F6 F7 F8  R6 R7 R8  B6 B7 B8
//!           D0 D1 D2
//!           D3 D4 D5
//!           D6 D7 D8
//! ```

use crate::face::Face;

/// Three stickers of `face` lying along the border of a turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub indices: [usize; 3],
}

#[derive(Debug)]
pub struct AdjacencyTable([[Strip; 4]; 6]);

const fn strip(face: Face, indices: [usize; 3]) -> Strip {
    Strip { face, indices }
}

pub static ADJACENCY: AdjacencyTable = {
    use Face::{B, D, F, L, R, U};

    let mut table = [[strip(U, [0, 0, 0]); 4]; 6];
    table[U as usize] = [
        strip(B, [2, 1, 0]),
        strip(R, [2, 1, 0]),
        strip(F, [2, 1, 0]),
        strip(L, [2, 1, 0]),
    ];
    table[R as usize] = [
        strip(U, [8, 5, 2]),
        strip(B, [0, 3, 6]),
        strip(D, [8, 5, 2]),
        strip(F, [8, 5, 2]),
    ];
    table[F as usize] = [
        strip(U, [6, 7, 8]),
        strip(R, [0, 3, 6]),
        strip(D, [2, 1, 0]),
        strip(L, [8, 5, 2]),
    ];
    table[D as usize] = [
        strip(F, [6, 7, 8]),
        strip(R, [6, 7, 8]),
        strip(B, [6, 7, 8]),
        strip(L, [6, 7, 8]),
    ];
    table[L as usize] = [
        strip(U, [0, 3, 6]),
        strip(F, [0, 3, 6]),
        strip(D, [0, 3, 6]),
        strip(B, [8, 5, 2]),
    ];
    table[B as usize] = [
        strip(U, [2, 1, 0]),
        strip(L, [0, 3, 6]),
        strip(D, [6, 7, 8]),
        strip(R, [8, 5, 2]),
    ];

    AdjacencyTable(table)
};

impl AdjacencyTable {
    /// The four strips bordering `face`, clockwise from its top edge.
    #[must_use]
    pub fn neighbors(&self, face: Face) -> &[Strip; 4] {
        &self.0[face as usize]
    }

    /// The strip of `neighbor` that borders `face`, if they are adjacent.
    #[must_use]
    pub fn strip_between(&self, face: Face, neighbor: Face) -> Option<&Strip> {
        self.neighbors(face)
            .iter()
            .find(|strip| strip.face == neighbor)
    }
}
