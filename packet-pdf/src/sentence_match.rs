//! Sentence match: left halves flush left, a dotted connector, right halves
//! flush right. The key keeps the right column in answer order; the student
//! page scrambles it fresh on every render so the puzzle stays a puzzle.

use phonics_core::model::ActivityContent;
use phonics_core::sanitize::clean_text;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Mode;
use crate::doc::{Align, BLACK, Doc, KEY_RED, MARGIN};
use crate::fonts::{self, Font};

/// Sentence halves are clamped to keep the two columns from colliding.
const HALF_CLIP: usize = 50;
const HALF_W: f32 = 85.0;
const CONNECTOR_W: f32 = 10.0;
const ROW_H: f32 = 10.0;

pub fn render<R: Rng + ?Sized>(doc: &mut Doc, content: &ActivityContent, mode: Mode, rng: &mut R) {
    let mut right: Vec<String> = content.match_r.iter().map(|s| clean_text(s)).collect();
    if !mode.is_key() {
        right.shuffle(rng);
    }

    for (i, left) in content.match_l.iter().enumerate() {
        doc.ensure(ROW_H);
        doc.set_font(Font::Helvetica, 10.0);
        doc.cell(
            MARGIN,
            HALF_W,
            ROW_H,
            &fonts::clip(&clean_text(left), HALF_CLIP),
            Align::Left,
            false,
            false,
        );
        doc.set_font(Font::Courier, 10.0);
        doc.cell(MARGIN + HALF_W, CONNECTOR_W, ROW_H, ".......", Align::Center, false, false);
        doc.set_font(Font::Helvetica, 10.0);
        if mode.is_key() {
            doc.set_text_color(KEY_RED);
        }
        let paired = right.get(i).map(|s| fonts::clip(s, HALF_CLIP)).unwrap_or_default();
        doc.cell(
            MARGIN + HALF_W + CONNECTOR_W,
            HALF_W,
            ROW_H,
            &paired,
            Align::Right,
            false,
            false,
        );
        doc.set_text_color(BLACK);
        doc.ln(ROW_H);
    }
}
