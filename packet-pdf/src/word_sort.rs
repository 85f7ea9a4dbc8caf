//! Word bank sort: a shuffled flat word bank above an N-column category
//! table. The student page always gets six blank rows; the key fills
//! exactly as many rows as the largest category needs.

use phonics_core::model::ActivityContent;
use phonics_core::sanitize::clean_text;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Mode;
use crate::doc::{Align, BLACK, Doc, KEY_RED, MARGIN, USABLE_W};
use crate::fonts::{self, Font};

const STUDENT_ROWS: usize = 6;
/// Category headers are clamped so a rambling label cannot overflow its
/// column.
const HEADER_CLIP: usize = 20;

pub fn render<R: Rng + ?Sized>(doc: &mut Doc, content: &ActivityContent, mode: Mode, rng: &mut R) {
    if content.sort_cats.is_empty() {
        return;
    }

    // The bank mixes every category's words in a fresh random order each
    // render; reproducibility across renders is intentionally absent.
    let mut bank: Vec<String> = content
        .sort_cats
        .iter()
        .flat_map(|(_, words)| words.iter().map(|w| clean_text(w)))
        .collect();
    bank.shuffle(rng);
    doc.set_font(Font::Helvetica, 13.0);
    doc.multi_cell(
        MARGIN,
        USABLE_W,
        8.0,
        &format!("Word Bank:  {}", bank.join("   |   ")),
        Align::Left,
    );
    doc.ln(5.0);

    let col_w = USABLE_W / content.sort_cats.len() as f32;
    doc.set_font(Font::HelveticaBold, 9.0);
    doc.ensure(10.0);
    for (i, (category, _)) in content.sort_cats.iter().enumerate() {
        doc.cell(
            MARGIN + i as f32 * col_w,
            col_w,
            10.0,
            &fonts::clip(&clean_text(category), HEADER_CLIP),
            Align::Center,
            true,
            false,
        );
    }
    doc.ln(10.0);

    doc.set_font(Font::Helvetica, 12.0);
    if mode.is_key() {
        let rows = content.sort_cats.iter().map(|(_, words)| words.len()).max().unwrap_or(0);
        doc.set_text_color(KEY_RED);
        for row in 0..rows {
            doc.ensure(10.0);
            for (i, (_, words)) in content.sort_cats.iter().enumerate() {
                let word = words.get(row).map(|w| clean_text(w)).unwrap_or_default();
                doc.cell(MARGIN + i as f32 * col_w, col_w, 10.0, &word, Align::Center, true, false);
            }
            doc.ln(10.0);
        }
        doc.set_text_color(BLACK);
    } else {
        for _ in 0..STUDENT_ROWS {
            doc.ensure(12.0);
            for i in 0..content.sort_cats.len() {
                doc.cell(MARGIN + i as f32 * col_w, col_w, 12.0, "", Align::Left, true, false);
            }
            doc.ln(12.0);
        }
    }
}
