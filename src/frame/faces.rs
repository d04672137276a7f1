//! This module draws the die faces shown on the board. There are seven of them: a blank one shown
//! before the first round, and one per side of the die. Each has a winning variant with its pips
//! in red, which is derived once when the set is built.

use console::style;

use crate::player::Face;

/// The number of lines a face takes up.
pub(crate) const FACE_HEIGHT: usize = 5;

/// The character a pip is drawn with.
const PIP: char = 'o';

/// The top and bottom edges of a face.
const EDGE: &str = "+-------+";

/// This function returns the three rows of pips inside the frame of the face with the given value.
/// Zero, or any value off the die, gets the blank placeholder face.
const fn pips(value: u8) -> [&'static str; 3] {
    match value {
        1 => ["       ", "   o   ", "       "],
        2 => [" o     ", "       ", "     o "],
        3 => [" o     ", "   o   ", "     o "],
        4 => [" o   o ", "       ", " o   o "],
        5 => [" o   o ", "   o   ", " o   o "],
        6 => [" o   o ", " o   o ", " o   o "],
        _ => ["       ", "       ", "       "],
    }
}

/// This function draws the plain face with the given value, frame included.
fn draw(value: u8) -> Vec<String> {
    let [top, middle, bottom] = pips(value);

    vec![
        EDGE.to_owned(),
        format!("|{top}|"),
        format!("|{middle}|"),
        format!("|{bottom}|"),
        EDGE.to_owned(),
    ]
}

/// This function derives the winning variant of a drawn face by turning every pip red. The frame
/// is left as it is.
fn highlight(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            line.chars()
                .map(|ch| {
                    if ch == PIP {
                        style(ch).red().bold().to_string()
                    } else {
                        ch.to_string()
                    }
                })
                .collect()
        })
        .collect()
}

/// This structure holds every face the board can show, indexed by the value on the die with zero
/// as the blank placeholder, in both the plain and the winning variant.
#[derive(Debug, Clone)]
pub(crate) struct FaceSet {
    /// This field contains the plain faces, from the blank one to six.
    plain: Vec<Vec<String>>,
    /// This field contains the faces with red pips, in the same order.
    winning: Vec<Vec<String>>,
}

impl FaceSet {
    /// This function draws all seven faces and derives their winning variants.
    pub(crate) fn new() -> Self {
        let plain: Vec<Vec<String>> = (0..=Face::SIDES).map(draw).collect();
        let winning = plain.iter().map(|lines| highlight(lines)).collect();

        Self { plain, winning }
    }

    /// This function returns the lines of the face to show for the given roll, or the blank face if
    /// there has been no roll yet.
    pub(crate) fn lines(&self, roll: Option<Face>, winner: bool) -> &[String] {
        let set = if winner { &self.winning } else { &self.plain };
        let index = roll.map_or(0, |face| usize::from(face.value()));

        set.get(index).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use console::{measure_text_width, strip_ansi_codes};

    use super::*;

    #[test]
    fn faces_show_as_many_pips_as_their_value() {
        let faces = FaceSet::new();

        for value in 1..=6 {
            let lines = faces.lines(Face::new(value), false);
            let pips: usize = lines.iter().map(|line| line.matches(PIP).count()).sum();

            assert_eq!(lines.len(), FACE_HEIGHT, "height of face {value}");
            assert_eq!(pips, usize::from(value), "pips on face {value}");
        }
    }

    #[test]
    fn placeholder_is_blank() {
        let faces = FaceSet::new();
        let lines = faces.lines(None, false);

        assert_eq!(lines.len(), FACE_HEIGHT, "height");
        assert!(lines.iter().all(|line| !line.contains(PIP)), "pips on the blank face");
    }

    #[test]
    fn winning_faces_only_change_colour() {
        let faces = FaceSet::new();

        for value in 1..=6 {
            let plain = faces.lines(Face::new(value), false);
            let winning = faces.lines(Face::new(value), true);

            for (plain, winning) in plain.iter().zip(winning) {
                assert_eq!(&strip_ansi_codes(winning), plain, "face {value}");
                assert_eq!(measure_text_width(winning), measure_text_width(plain), "width");
            }
        }
    }

    #[test]
    fn faces_are_distinct() {
        let faces = FaceSet::new();
        let all: Vec<&[String]> = (0..=6)
            .map(|value| faces.lines(Face::new(value), false))
            .collect();

        for (index, face) in all.iter().enumerate() {
            assert!(
                all.iter().skip(index + 1).all(|other| other != face),
                "face {index} is repeated"
            );
        }
    }
}
