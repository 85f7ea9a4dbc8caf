//! Sound mapping: each word gets an arrow and either three empty phoneme
//! boxes (student) or a grading note (key). The key deliberately does not
//! attempt segmentation; that judgment stays with the teacher.

use phonics_core::model::ActivityContent;
use phonics_core::sanitize::clean_text;

use crate::Mode;
use crate::doc::{Align, BLACK, Doc, KEY_RED, MARGIN};
use crate::fonts::Font;

const LABEL_W: f32 = 50.0;
const BOX_W: f32 = 20.0;
const ROW_H: f32 = 12.0;

pub fn render(doc: &mut Doc, content: &ActivityContent, mode: Mode) {
    for word in &content.map_words {
        doc.ensure(ROW_H + 2.0);
        doc.set_font(Font::HelveticaBold, 14.0);
        doc.cell(
            MARGIN,
            LABEL_W,
            ROW_H,
            &format!("{} -> ", clean_text(word)),
            Align::Right,
            false,
            false,
        );
        if mode.is_key() {
            doc.set_text_color(KEY_RED);
            doc.cell(
                MARGIN + LABEL_W,
                60.0,
                ROW_H,
                "(Break word into phonemes)",
                Align::Left,
                false,
                false,
            );
            doc.set_text_color(BLACK);
        } else {
            for slot in 0..3 {
                doc.cell(
                    MARGIN + LABEL_W + slot as f32 * BOX_W,
                    BOX_W,
                    ROW_H,
                    "",
                    Align::Left,
                    true,
                    false,
                );
            }
        }
        doc.ln(ROW_H);
        doc.ln(2.0);
    }
}
