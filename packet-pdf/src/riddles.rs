//! Detective riddle cards: a fixed 2x4 grid of bordered cards at absolute
//! page coordinates. Cards past the eighth are dropped; the key anchors the
//! answer to each card's bottom edge.

use phonics_core::model::ActivityContent;
use phonics_core::sanitize::clean_text;

use crate::Mode;
use crate::doc::{Align, BLACK, Doc, KEY_RED, MARGIN};
use crate::fonts::Font;

const MAX_CARDS: usize = 8;
const CARD_W: f32 = 85.0;
const CARD_H: f32 = 45.0;
const GRID_TOP: f32 = 45.0;
const COL_STEP: f32 = 95.0;
const ROW_STEP: f32 = 50.0;

pub fn render(doc: &mut Doc, content: &ActivityContent, mode: Mode) {
    for (i, riddle) in content.riddles.iter().take(MAX_CARDS).enumerate() {
        let x = MARGIN + (i % 2) as f32 * COL_STEP;
        let y = GRID_TOP + (i / 2) as f32 * ROW_STEP;
        doc.rect(x, y, CARD_W, CARD_H);

        doc.set_font(Font::HelveticaBold, 10.0);
        doc.cell_at(x + 2.0, y + 2.0, CARD_W - 4.0, 5.0, &format!("Riddle #{}", i + 1), Align::Left, false, false);

        doc.set_font(Font::Helvetica, 9.0);
        let clues = format!(
            "Clue 1: {}\nClue 2: {}\nClue 3: {}",
            clean_text(&riddle.clue1),
            clean_text(&riddle.clue2),
            clean_text(&riddle.clue3)
        );
        doc.multi_cell_at(x + 2.0, y + 8.0, CARD_W - 4.0, 4.5, &clues);

        if mode.is_key() {
            doc.set_font(Font::HelveticaBold, 11.0);
            doc.set_text_color(KEY_RED);
            doc.cell_at(
                x,
                y + CARD_H - 7.0,
                CARD_W,
                6.0,
                &format!("Ans: {}", clean_text(&riddle.ans)),
                Align::Center,
                false,
                false,
            );
            doc.set_text_color(BLACK);
        }
    }
}
