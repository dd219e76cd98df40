use cube_core::{
    Color, CubeState, CubeStateError, Face, FaceGrid, Move, Sticker, ValidationError,
    color::ColorScheme,
    engine, notation, scramble, validate,
};
use itertools::Itertools;
use log::info;

fn numbered() -> CubeState {
    CubeState::from_stickers(Face::ALL.map(|face| {
        (
            face,
            (0..9).map(|index| format!("{face}{index}")).collect_vec(),
        )
    }))
    .unwrap()
}

/// A handful of states to check each property against: solved, a labelled
/// state where every sticker is distinct, and a few random scrambles.
fn sample_states() -> Vec<CubeState> {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut states = vec![CubeState::solved(), numbered()];
    for _ in 0..5 {
        let moves = scramble::random_moves(30, &mut rng);
        states.push(numbered().apply_moves(&moves));
    }
    states
}

fn sorted_labels(state: &CubeState) -> Vec<String> {
    state
        .stickers()
        .map(|(_, _, sticker)| sticker.label().to_owned())
        .sorted()
        .collect_vec()
}

#[test_log::test]
fn four_quarter_turns_are_the_identity() {
    for state in sample_states() {
        for face in Face::ALL {
            let turn = Move::quarter(face);
            let after = (0..4).fold(state.clone(), |s, _| s.apply_move(turn));
            assert_eq!(after, state, "{face}4");
        }
    }
}

#[test_log::test]
fn turn_counts_compose() {
    for state in sample_states() {
        for face in Face::ALL {
            let quarter = Move::quarter(face);
            let twice = state.apply_move(quarter).apply_move(quarter);
            let thrice = twice.apply_move(quarter);
            assert_eq!(twice, state.apply_move(Move::half(face)), "{face}2");
            assert_eq!(thrice, state.apply_move(Move::prime(face)), "{face}'");
        }
    }
}

#[test_log::test]
fn inverse_turns_cancel() {
    for state in sample_states() {
        for face in Face::ALL {
            let after = state
                .apply_move(Move::quarter(face))
                .apply_move(Move::prime(face));
            assert_eq!(after, state);
        }
    }
}

#[test_log::test]
fn moves_conserve_stickers() {
    for state in sample_states() {
        let before = sorted_labels(&state);
        for move_ in Move::all() {
            assert_eq!(sorted_labels(&state.apply_move(move_)), before, "{move_}");
        }
    }
}

#[test_log::test]
fn scramble_then_inverse_is_the_identity() {
    let mut rng = fastrand::Rng::with_seed(2024);
    for _ in 0..20 {
        let moves = scramble::random_moves(rng.usize(1..60), &mut rng);
        let undo = moves.iter().rev().map(|m| m.inverse()).collect_vec();
        assert_eq!(undo, notation::invert(&moves));

        let start = numbered();
        let scrambled = start.apply_moves(&moves);
        assert_eq!(scrambled.apply_moves(&undo), start, "{}", notation::format(&moves));
    }
}

#[test_log::test]
fn r_turn_on_a_solved_cube() {
    let state = CubeState::solved().apply_move(Move::quarter(Face::R));
    let colors = |face: Face| {
        state
            .face_grid(face)
            .stickers()
            .iter()
            .map(|sticker| sticker.color().unwrap())
            .collect_vec()
    };
    let column = |face: Face, indices: [usize; 3]| indices.map(|i| colors(face)[i]);

    assert!(colors(Face::R).iter().all(|&c| c == Color::Green));
    assert_eq!(column(Face::U, [2, 5, 8]), [Color::Red; 3]);
    assert_eq!(column(Face::B, [0, 3, 6]), [Color::White; 3]);
    assert_eq!(column(Face::D, [2, 5, 8]), [Color::Orange; 3]);
    assert_eq!(column(Face::F, [2, 5, 8]), [Color::Yellow; 3]);
    assert_eq!(column(Face::U, [0, 1, 3]), [Color::White; 3]);
    assert!(colors(Face::L).iter().all(|&c| c == Color::Blue));
}

#[test_log::test]
fn solved_cube_validates() {
    let result = validate(&CubeState::solved());
    assert!(result.is_ok(), "{:?}", result.errors);

    let scheme = ColorScheme::new([
        Color::Blue,
        Color::Red,
        Color::White,
        Color::Green,
        Color::Orange,
        Color::Yellow,
    ]);
    assert!(validate(&CubeState::solved_with(&scheme)).is_ok());
}

#[test_log::test]
fn validator_detects_imbalance() {
    let mut stickers = CubeState::solved().to_stickers();
    if let Some(down) = stickers.get_mut(&Face::D) {
        down[0] = Sticker::Color(Color::White);
    }
    let state = CubeState::from_stickers(stickers).unwrap();
    let result = validate(&state);

    assert!(!result.is_ok());
    assert_eq!(
        result.errors,
        [
            ValidationError::ColorCount {
                color: Color::White,
                expected: 9,
                actual: 10
            },
            ValidationError::ColorCount {
                color: Color::Yellow,
                expected: 9,
                actual: 8
            },
        ]
    );
    assert!(result.faces_needing_correction().is_empty());
}

#[test_log::test]
fn scrambled_cube_stays_valid() {
    let mut rng = fastrand::Rng::with_seed(99);
    let moves = scramble::random_moves(40, &mut rng);
    let state = CubeState::solved().apply_moves(&moves);
    info!("Scramble: {}", notation::format(&moves));
    assert!(validate(&state).is_ok());
    assert!(!state.is_solved());
}

#[test_log::test]
fn invalid_states_can_still_be_turned() {
    let state = CubeState::unclassified();
    assert!(!validate(&state).is_ok());
    let turned = state.apply_moves(&notation::parse("R U F D L B"));
    assert_eq!(turned, state);

    let mut stickers = CubeState::solved().to_stickers();
    if let Some(up) = stickers.get_mut(&Face::U) {
        up[8] = Sticker::parse("???");
    }
    let broken = CubeState::from_stickers(stickers).unwrap();
    let moved = broken.apply_move(Move::quarter(Face::R));
    assert_eq!(moved.sticker(Face::B, 0).map(Sticker::label), Some("???"));
    assert_eq!(validate(&moved).errors, validate(&broken).errors);
    assert_eq!(validate(&moved).faces_needing_correction(), [Face::B]);
}

#[test_log::test]
fn notation_round_trips() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..50 {
        let moves = (0..rng.usize(0..40))
            .map(|_| rng.choice(Move::all().collect_vec()).unwrap())
            .collect_vec();
        assert_eq!(notation::parse(&notation::format(&moves)), moves);
        assert_eq!(
            notation::parse_strict(&notation::format(&moves)).unwrap(),
            moves
        );
    }
}

#[test_log::test]
fn malformed_classifier_input_is_rejected() {
    let mut stickers = CubeState::solved().to_stickers();
    if let Some(front) = stickers.get_mut(&Face::F) {
        front.pop();
    }
    assert_eq!(
        CubeState::from_stickers(stickers),
        Err(CubeStateError::InvalidLength {
            face: Face::F,
            actual: 8
        })
    );
    assert!(FaceGrid::new([Color::Red; 8]).is_err());
}

#[test_log::test]
fn playback_ends_where_apply_all_does() {
    let moves = notation::parse("F2 B' R L' U2 D");
    let last = engine::playback(&numbered(), &moves).last();
    assert_eq!(last, Some(engine::apply_all(&numbered(), &moves)));
    assert_eq!(engine::playback(&numbered(), &[]).count(), 0);
}
