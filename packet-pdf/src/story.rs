//! Decodable story: centered title, wrapped paragraphs, then an evidence
//! check where the key shows answers and the student page leaves writing
//! space instead.

use phonics_core::model::ActivityContent;
use phonics_core::sanitize::clean_text;

use crate::Mode;
use crate::doc::{Align, BLACK, BREAK_Y, Doc, KEY_RED, MARGIN, USABLE_H, USABLE_W};
use crate::fonts::Font;

/// Start the question block on a fresh page once the story has pushed into
/// the bottom fifth of the printable area; three questions with writing
/// space never fit there.
const QUESTION_BREAK_Y: f32 = BREAK_Y - USABLE_H * 0.2;

pub fn render(doc: &mut Doc, content: &ActivityContent, mode: Mode) {
    doc.set_font(Font::HelveticaBold, 12.0);
    doc.ensure(10.0);
    doc.cell(MARGIN, USABLE_W, 10.0, &clean_text(&content.title), Align::Center, false, false);
    doc.ln(10.0);

    doc.set_font(Font::Helvetica, 11.0);
    for paragraph in &content.paragraphs {
        doc.multi_cell(MARGIN, USABLE_W, 6.0, &clean_text(paragraph), Align::Left);
        doc.ln(2.0);
    }

    if doc.y > QUESTION_BREAK_Y {
        doc.add_page();
    }
    doc.ln(5.0);
    doc.set_font(Font::HelveticaBold, 11.0);
    doc.ensure(8.0);
    doc.cell(MARGIN, USABLE_W, 8.0, "Evidence Check:", Align::Left, false, false);
    doc.ln(8.0);

    doc.set_font(Font::Helvetica, 11.0);
    for question in &content.questions {
        doc.multi_cell(
            MARGIN,
            USABLE_W,
            7.0,
            &format!("Q: {}", clean_text(&question.q)),
            Align::Left,
        );
        if mode.is_key() {
            doc.set_text_color(KEY_RED);
            doc.multi_cell(
                MARGIN,
                USABLE_W,
                7.0,
                &format!("A: {}", clean_text(&question.a)),
                Align::Left,
            );
            doc.set_text_color(BLACK);
            doc.ln(2.0);
        } else {
            // Blank space for a handwritten answer.
            doc.ln(8.0);
        }
    }
}
