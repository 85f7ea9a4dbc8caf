//! Color-by-code mystery grid: a full-page framed 8x8 grid. The student
//! page shows only the words; the key fills each cell with its legend
//! color. Cell colors come either from a randomly chosen pattern matrix
//! (flat schema) or from a pre-laid color grid (laid schema).

use phonics_core::color;
use phonics_core::model::{ActivityContent, GridSource, MysteryGridContent};
use phonics_core::sanitize::clean_text;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Mode;
use crate::doc::{Align, BLACK, Doc, KEY_RED, MARGIN, PAGE_H, PAGE_W, USABLE_W};
use crate::fonts::Font;

const DIM: usize = 8;
const CELL: f32 = 22.0;

// Hand-authored color-index motifs. Cell values index the legend's color
// list modulo its length, so every pattern works for any 3- or 4-color
// legend.
#[rustfmt::skip]
const PATTERNS: [[[u8; DIM]; DIM]; 4] = [
    // concentric diamond
    [
        [0, 0, 1, 1, 1, 1, 0, 0],
        [0, 1, 2, 2, 2, 2, 1, 0],
        [1, 2, 3, 3, 3, 3, 2, 1],
        [1, 2, 3, 0, 0, 3, 2, 1],
        [1, 2, 3, 0, 0, 3, 2, 1],
        [1, 2, 3, 3, 3, 3, 2, 1],
        [0, 1, 2, 2, 2, 2, 1, 0],
        [0, 0, 1, 1, 1, 1, 0, 0],
    ],
    // checkerboard frame
    [
        [0, 1, 0, 1, 0, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 2, 2, 2, 2, 1, 0],
        [1, 0, 2, 3, 3, 2, 0, 1],
        [0, 1, 2, 3, 3, 2, 1, 0],
        [1, 0, 2, 2, 2, 2, 0, 1],
        [0, 1, 0, 1, 0, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 0],
    ],
    // diagonal weave
    [
        [0, 1, 2, 3, 0, 1, 2, 3],
        [1, 2, 3, 0, 1, 2, 3, 0],
        [2, 3, 0, 1, 2, 3, 0, 1],
        [3, 0, 1, 2, 3, 0, 1, 2],
        [0, 1, 2, 3, 0, 1, 2, 3],
        [1, 2, 3, 0, 1, 2, 3, 0],
        [2, 3, 0, 1, 2, 3, 0, 1],
        [3, 0, 1, 2, 3, 0, 1, 2],
    ],
    // crossed diagonals
    [
        [3, 0, 0, 1, 1, 0, 0, 3],
        [0, 3, 0, 1, 1, 0, 3, 0],
        [0, 0, 3, 2, 2, 3, 0, 0],
        [1, 1, 2, 3, 3, 2, 1, 1],
        [1, 1, 2, 3, 3, 2, 1, 1],
        [0, 0, 3, 2, 2, 3, 0, 0],
        [0, 3, 0, 1, 1, 0, 3, 0],
        [3, 0, 0, 1, 1, 0, 0, 3],
    ],
];

pub fn render<R: Rng + ?Sized>(doc: &mut Doc, content: &ActivityContent, mode: Mode, rng: &mut R) {
    // Full-page frame.
    doc.rect(10.0, 10.0, PAGE_W - 20.0, PAGE_H - 20.0);
    doc.set_font(Font::HelveticaBold, 20.0);
    doc.cell(MARGIN, USABLE_W, 15.0, "Aztec Quilt Mystery Grid", Align::Center, false, false);
    doc.ln(15.0);

    if mode.is_key() {
        doc.set_font(Font::HelveticaBold, 14.0);
        doc.set_text_color(KEY_RED);
        doc.cell(MARGIN, USABLE_W, 10.0, "TEACHER ANSWER KEY", Align::Center, false, false);
        doc.set_text_color(BLACK);
    } else {
        doc.set_font(Font::HelveticaBold, 12.0);
        doc.cell(
            MARGIN,
            USABLE_W,
            10.0,
            "Name: ___________________________________",
            Align::Left,
            false,
            false,
        );
    }
    doc.ln(10.0);

    let fallback = MysteryGridContent::default();
    let grid = content.mystery_grid.as_ref().unwrap_or(&fallback);

    doc.set_font(Font::HelveticaBold, 10.0);
    let legend_line = grid
        .legend
        .iter()
        .map(|(name, target)| format!("{name}: {target}"))
        .collect::<Vec<_>>()
        .join(" | ");
    doc.multi_cell(
        MARGIN,
        USABLE_W,
        8.0,
        &format!("Legend: {}", clean_text(&legend_line)),
        Align::Center,
    );
    doc.ln(5.0);

    let start_x = (PAGE_W - DIM as f32 * CELL) / 2.0;
    match grid.source() {
        Some(GridSource::Laid { words, colors }) => {
            for row in 0..DIM {
                for col in 0..DIM {
                    let word = words
                        .get(row)
                        .and_then(|r| r.get(col))
                        .map(|w| clean_text(w))
                        .unwrap_or_default();
                    let color_name = colors
                        .get(row)
                        .and_then(|r| r.get(col))
                        .map(String::as_str)
                        .unwrap_or("");
                    draw_cell(doc, start_x + col as f32 * CELL, &word, color_name, mode);
                }
                doc.ln(CELL);
            }
        }
        Some(GridSource::Flat(color_words)) => {
            let color_names = grid.color_names();
            // `choose` only returns None for an empty slice.
            let pattern = PATTERNS.choose(rng).unwrap_or(&PATTERNS[0]);
            for row in 0..DIM {
                for col in 0..DIM {
                    let idx = pattern[row][col] as usize % color_names.len().max(1);
                    let color_name = color_names.get(idx).copied().unwrap_or("");
                    let words = color_words
                        .iter()
                        .find(|(name, _)| name == color_name)
                        .map(|(_, words)| words.as_slice())
                        .unwrap_or(&[]);
                    // Shorter lists wrap around by cell position instead of
                    // leaving later cells empty.
                    let word = if words.is_empty() {
                        String::new()
                    } else {
                        clean_text(&words[(row * DIM + col) % words.len()])
                    };
                    draw_cell(doc, start_x + col as f32 * CELL, &word, color_name, mode);
                }
                doc.ln(CELL);
            }
        }
        None => {
            for _row in 0..DIM {
                for col in 0..DIM {
                    draw_cell(doc, start_x + col as f32 * CELL, "", "", mode);
                }
                doc.ln(CELL);
            }
        }
    }
}

fn draw_cell(doc: &mut Doc, x: f32, word: &str, color_name: &str, mode: Mode) {
    let display = if word.is_empty() { "?" } else { word };
    if mode.is_key() {
        let (fill, text) = color::resolve(color_name);
        doc.set_fill_color(fill);
        doc.set_text_color(text);
        doc.set_font(Font::HelveticaBold, 7.0);
        doc.cell(x, CELL, CELL, display, Align::Center, true, true);
        doc.set_text_color(BLACK);
    } else {
        doc.set_font(Font::Helvetica, 8.0);
        doc.cell(x, CELL, CELL, display, Align::Center, true, false);
    }
}
