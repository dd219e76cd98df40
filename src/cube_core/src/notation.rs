//! Standard face-turn notation: `R`, `U'`, `F2`, separated by whitespace.

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{face::Face, moves::Move};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Unrecognized move `{token}` at position {position}")]
    UnrecognizedToken { token: String, position: usize },
}

/// Read one token. `strict` rejects anything after the face letter other
/// than `2` or `'`; otherwise such suffixes are treated as a quarter turn.
fn parse_token(token: &str, strict: bool) -> Option<Move> {
    let mut chars = token.chars();
    let face = Face::from_letter(chars.next()?)?;
    let suffix = chars.as_str();
    let turns = match suffix {
        "" => 1,
        "2" => 2,
        "'" => 3,
        _ if strict => return None,
        _ if suffix.starts_with('2') => 2,
        _ if suffix.starts_with('\'') => 3,
        _ => 1,
    };
    Move::new(face, turns).ok()
}

/// Parse a whitespace separated move sequence. Tokens that do not start with
/// a face letter are skipped.
#[must_use]
pub fn parse(notation: &str) -> Vec<Move> {
    notation
        .split_whitespace()
        .filter_map(|token| {
            let move_ = parse_token(token, false);
            if move_.is_none() {
                debug!("Skipping unrecognized move `{token}`");
            }
            move_
        })
        .collect()
}

/// Parse a whitespace separated move sequence, rejecting anything that is not
/// exactly a face letter optionally followed by `2` or `'`.
///
/// # Errors
///
/// On the first unrecognized token; `position` counts tokens from zero.
pub fn parse_strict(notation: &str) -> Result<Vec<Move>, NotationError> {
    notation
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            parse_token(token, true).ok_or_else(|| NotationError::UnrecognizedToken {
                token: token.to_owned(),
                position,
            })
        })
        .collect()
}

#[must_use]
pub fn format(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

/// The sequence that undoes `moves`.
#[must_use]
pub fn invert(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_turns() {
        assert_eq!(
            parse("R U' F2"),
            [
                Move::quarter(Face::R),
                Move::prime(Face::U),
                Move::half(Face::F)
            ]
        );
    }

    #[test]
    fn lenient_parse_skips_garbage() {
        assert_eq!(
            parse("  x R\tfoo  2 D\n"),
            [Move::quarter(Face::R), Move::quarter(Face::D)]
        );
        assert_eq!(parse("R2' Bw"), [Move::half(Face::R), Move::quarter(Face::B)]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn strict_parse_reports_position() {
        assert_eq!(
            parse_strict("R U x F"),
            Err(NotationError::UnrecognizedToken {
                token: "x".to_owned(),
                position: 2
            })
        );
        assert!(parse_strict("R2'").is_err());
        assert_eq!(parse_strict("B' D2").unwrap(), parse("B' D2"));
    }

    #[test]
    fn format_moves() {
        assert_eq!(format(&parse("R U' F2  L")), "R U' F2 L");
        assert_eq!(format(&[]), "");
    }

    #[test]
    fn invert_sequence() {
        assert_eq!(format(&invert(&parse("R U F2 L'"))), "L F2 U' R'");
    }
}
