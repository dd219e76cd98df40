use std::{fmt, str::FromStr};

use internment::ArcIntern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::face::Face;

/// The six sticker colors of a standard cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color `{0}`")]
pub struct ParseColorError(pub String);

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| color.name() == lowered)
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single facelet as reported by a classifier.
///
/// Classifiers can return labels that are not one of the six colors. Those
/// are kept verbatim as `Unrecognized` so the validator can report them
/// instead of having them coerced into a real color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sticker {
    Color(Color),
    Unrecognized(UnknownLabel),
}

/// A classifier label that does not name a color. Only [`Sticker::parse`]
/// creates these, so the label never reads back as a color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownLabel(ArcIntern<str>);

impl UnknownLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn interned(&self) -> &ArcIntern<str> {
        &self.0
    }
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Sticker {
    /// Label given to every sticker of a cube that has not been scanned yet.
    pub const UNKNOWN_LABEL: &'static str = "unknown";

    /// Interpret a classifier label. Never fails: anything that is not a
    /// color name becomes `Unrecognized`.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.parse::<Color>() {
            Ok(color) => Sticker::Color(color),
            Err(_) => Sticker::Unrecognized(UnknownLabel(ArcIntern::from(label))),
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Sticker::parse(Self::UNKNOWN_LABEL)
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Sticker::Color(color) => Some(*color),
            Sticker::Unrecognized(_) => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Sticker::Color(color) => color.name(),
            Sticker::Unrecognized(label) => label.as_str(),
        }
    }
}

impl From<Color> for Sticker {
    fn from(color: Color) -> Self {
        Sticker::Color(color)
    }
}

impl From<String> for Sticker {
    fn from(label: String) -> Self {
        Sticker::parse(&label)
    }
}

impl From<&str> for Sticker {
    fn from(label: &str) -> Self {
        Sticker::parse(label)
    }
}

impl From<Sticker> for String {
    fn from(sticker: Sticker) -> Self {
        sticker.label().to_owned()
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which color sits at the center of each face on a solved cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ColorSchemeRepr", into = "ColorSchemeRepr")]
pub struct ColorScheme([Color; 6]);

#[derive(Debug, Serialize, Deserialize)]
#[allow(non_snake_case)]
struct ColorSchemeRepr {
    U: Color,
    R: Color,
    F: Color,
    D: Color,
    L: Color,
    B: Color,
}

impl From<ColorSchemeRepr> for ColorScheme {
    fn from(value: ColorSchemeRepr) -> Self {
        let mut out = [Color::White; 6];
        out[Face::U as usize] = value.U;
        out[Face::R as usize] = value.R;
        out[Face::F as usize] = value.F;
        out[Face::D as usize] = value.D;
        out[Face::L as usize] = value.L;
        out[Face::B as usize] = value.B;
        ColorScheme(out)
    }
}

impl From<ColorScheme> for ColorSchemeRepr {
    fn from(value: ColorScheme) -> Self {
        ColorSchemeRepr {
            U: value.center(Face::U),
            R: value.center(Face::R),
            F: value.center(Face::F),
            D: value.center(Face::D),
            L: value.center(Face::L),
            B: value.center(Face::B),
        }
    }
}

impl Default for ColorScheme {
    /// U=white, D=yellow, F=red, B=orange, L=blue, R=green.
    fn default() -> Self {
        ColorSchemeRepr {
            U: Color::White,
            R: Color::Green,
            F: Color::Red,
            D: Color::Yellow,
            L: Color::Blue,
            B: Color::Orange,
        }
        .into()
    }
}

impl ColorScheme {
    /// Build a scheme from centers listed in `Face::ALL` order.
    #[must_use]
    pub const fn new(centers: [Color; 6]) -> Self {
        ColorScheme(centers)
    }

    #[must_use]
    pub const fn center(&self, face: Face) -> Color {
        self.0[face as usize]
    }

    /// The face whose center carries `color`, if any.
    #[must_use]
    pub fn face_of(&self, color: Color) -> Option<Face> {
        Face::ALL.into_iter().find(|&face| self.center(face) == color)
    }

    /// Whether every face has a different center color.
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        Color::ALL.iter().all(|&color| self.0.contains(&color))
    }
}
