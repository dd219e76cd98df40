use cube_core::{Color, CubeState, Face, Sticker};
use itertools::Itertools;
use owo_colors::OwoColorize;

const BLANK: &str = "      ";

fn cell(sticker: &Sticker) -> String {
    match sticker.color() {
        Some(Color::White) => "  ".on_white().to_string(),
        Some(Color::Yellow) => "  ".on_yellow().to_string(),
        Some(Color::Red) => "  ".on_red().to_string(),
        Some(Color::Orange) => "  ".on_truecolor(255, 128, 0).to_string(),
        Some(Color::Green) => "  ".on_green().to_string(),
        Some(Color::Blue) => "  ".on_blue().to_string(),
        None => "??".bold().to_string(),
    }
}

fn row(state: &CubeState, face: Face, row: usize, paint: fn(&Sticker) -> String) -> String {
    (0..3)
        .filter_map(|col| state.sticker(face, row * 3 + col))
        .map(paint)
        .join("")
}

fn net_with(state: &CubeState, paint: fn(&Sticker) -> String) -> String {
    let mut lines = Vec::with_capacity(9);
    for r in 0..3 {
        lines.push(format!("{BLANK}{}", row(state, Face::U, r, paint)));
    }
    for r in 0..3 {
        lines.push(
            [Face::L, Face::F, Face::R, Face::B]
                .into_iter()
                .map(|face| row(state, face, r, paint))
                .join(""),
        );
    }
    for r in 0..3 {
        lines.push(format!("{BLANK}{}", row(state, Face::D, r, paint)));
    }
    lines.join("\n")
}

/// The unfolded net with each sticker drawn as a colored block.
pub fn net(state: &CubeState) -> String {
    net_with(state, cell)
}

/// The unfolded net spelled out with one letter per sticker, for terminals
/// without color.
pub fn plain_net(state: &CubeState) -> String {
    net_with(state, |sticker| {
        let letter = match sticker.color() {
            Some(color) => color.name()[..1].to_ascii_uppercase(),
            None => "?".to_owned(),
        };
        format!("{letter} ")
    })
}
