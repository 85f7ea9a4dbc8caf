//! Metrics and encoding for the three standard fonts the documents use.
//!
//! Nothing is embedded: the viewer supplies Helvetica, Helvetica-Bold and
//! Courier, and these AFM advance widths let the layout measure text without
//! opening a font file.

use pdf_writer::Name;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::Courier];

    pub fn base_name(self) -> &'static [u8] {
        match self {
            Font::Helvetica => b"Helvetica",
            Font::HelveticaBold => b"Helvetica-Bold",
            Font::Courier => b"Courier",
        }
    }

    /// Page resource name the content streams select the font by.
    pub fn resource(self) -> Name<'static> {
        match self {
            Font::Helvetica => Name(b"F1"),
            Font::HelveticaBold => Name(b"F2"),
            Font::Courier => Name(b"F3"),
        }
    }
}

// Advance widths for ASCII 0x20..=0x7E in 1/1000 em, from the Adobe AFM
// files for the base-14 fonts.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_ADVANCE: u16 = 600;
/// Assumed width for bytes outside the tables (sanitized text rarely
/// carries any).
const FALLBACK_ADVANCE: u16 = 600;

fn advance(font: Font, ch: char) -> u16 {
    let code = ch as u32;
    match font {
        Font::Courier => COURIER_ADVANCE,
        _ if (0x20..=0x7E).contains(&code) => {
            let table = match font {
                Font::HelveticaBold => &HELVETICA_BOLD,
                _ => &HELVETICA,
            };
            table[(code - 0x20) as usize]
        }
        _ => FALLBACK_ADVANCE,
    }
}

/// Width of `s` at `size`, in the same unit as `size`.
pub fn text_width(font: Font, size: f32, s: &str) -> f32 {
    let units: u32 = s.chars().map(|c| u32::from(advance(font, c))).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap to `max_w`. Embedded newlines force breaks; a single
/// word wider than the line is split by characters rather than overflowing.
pub fn wrap(font: Font, size: f32, max_w: f32, text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        for word in raw.split_whitespace() {
            for part in split_long(font, size, max_w, word) {
                let candidate = if line.is_empty() {
                    part.clone()
                } else {
                    format!("{line} {part}")
                };
                if text_width(font, size, &candidate) <= max_w {
                    line = candidate;
                } else {
                    if !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                    }
                    line = part;
                }
            }
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn split_long(font: Font, size: f32, max_w: f32, word: &str) -> Vec<String> {
    if text_width(font, size, word) <= max_w {
        return vec![word.to_string()];
    }
    let mut parts = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        let mut next = piece.clone();
        next.push(ch);
        if !piece.is_empty() && text_width(font, size, &next) > max_w {
            parts.push(piece);
            piece = ch.to_string();
        } else {
            piece = next;
        }
    }
    if !piece.is_empty() {
        parts.push(piece);
    }
    parts
}

/// First `max` characters of `s`; generated headers and sentence halves are
/// clamped so a runaway model cannot blow out a fixed column.
pub fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Encode for the WinAnsi code page. The Latin-1 block maps straight
/// through; anything else becomes '?'.
pub fn winansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| {
            let code = ch as u32;
            match code {
                0x20..=0x7E | 0xA0..=0xFF => code as u8,
                _ => b'?',
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_scale_with_size() {
        let w = text_width(Font::Helvetica, 10.0, "Hi");
        // H = 722, i = 222 in 1/1000 em
        assert!((w - 9.44).abs() < 1e-3);
        assert_eq!(text_width(Font::Courier, 10.0, "Hi"), 12.0);
    }

    #[test]
    fn wrap_respects_max_width() {
        let lines = wrap(Font::Helvetica, 10.0, 50.0, "the quick brown fox jumps over");
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(Font::Helvetica, 10.0, line) <= 50.0, "{line}");
        }
    }

    #[test]
    fn wrap_splits_oversized_words() {
        let lines = wrap(Font::Helvetica, 10.0, 20.0, "incomprehensibilities");
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(Font::Helvetica, 10.0, line) <= 20.0);
        }
        assert_eq!(lines.concat(), "incomprehensibilities");
    }

    #[test]
    fn wrap_honors_embedded_newlines() {
        let lines = wrap(Font::Helvetica, 9.0, 200.0, "one\ntwo\nthree");
        assert_eq!(lines, ["one", "two", "three"]);
    }

    #[test]
    fn clip_counts_characters() {
        assert_eq!(clip("abcdef", 4), "abcd");
        assert_eq!(clip("ab", 4), "ab");
    }

    #[test]
    fn winansi_replaces_unmappable() {
        assert_eq!(winansi("abc"), b"abc");
        assert_eq!(winansi("a\u{2603}b"), b"a?b");
    }
}
