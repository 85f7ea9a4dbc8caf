//! Nonsense-word fluency drill: a grid of large practice cells, three per
//! row, followed by an optional labeled task block.

use phonics_core::model::ActivityContent;
use phonics_core::sanitize::clean_text;

use crate::doc::{Align, Doc, MARGIN, USABLE_W};
use crate::fonts::Font;

/// Words past the cap are dropped; the drill is a timed one-page exercise.
const MAX_WORDS: usize = 21;
const CELL_W: f32 = USABLE_W / 3.0;
const CELL_H: f32 = 20.0;

pub fn render(doc: &mut Doc, content: &ActivityContent) {
    doc.set_font(Font::HelveticaBold, 24.0);
    let count = content.words.len().min(MAX_WORDS);
    for (i, word) in content.words.iter().take(MAX_WORDS).enumerate() {
        let col = i % 3;
        if col == 0 {
            doc.ensure(CELL_H);
        }
        doc.cell(
            MARGIN + col as f32 * CELL_W,
            CELL_W,
            CELL_H,
            &clean_text(word),
            Align::Center,
            true,
            false,
        );
        if col == 2 {
            doc.ln(CELL_H);
        }
    }
    if count % 3 != 0 {
        doc.ln(CELL_H);
    }

    if content.detective_task.is_empty() {
        return;
    }
    doc.ln(10.0);
    doc.set_font(Font::HelveticaBold, 14.0);
    doc.ensure(8.0);
    doc.cell(MARGIN, USABLE_W, 8.0, "DETECTIVE TASK:", Align::Left, false, false);
    doc.ln(8.0);
    doc.set_font(Font::Helvetica, 12.0);
    for task in &content.detective_task {
        doc.multi_cell(MARGIN, USABLE_W, 6.0, &clean_text(task), Align::Left);
    }
}
