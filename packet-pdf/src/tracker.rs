//! Static skill-mastery tracker: a fixed checklist table with no dependency
//! on generated content.

use crate::doc::{Align, Doc, MARGIN, USABLE_W};
use crate::fonts::Font;

const GRADE_W: f32 = 30.0;
const SKILL_W: f32 = USABLE_W - 3.0 * GRADE_W;
const ROW_H: f32 = 8.0;

/// Tracker rows; `true` marks a full-width section header.
const SKILLS: [(&str, bool); 23] = [
    ("Letter Names & Sounds", false),
    ("Short Vowels (CVC)", false),
    ("Consonant Blends", false),
    ("Digraphs", false),
    ("Final Blends", false),
    ("Silent e (CVCe)", false),
    ("Vowel Teams", false),
    ("R-Controlled Vowels", false),
    ("MULTISYLLABLE", true),
    ("   - closed/closed", false),
    ("   - silent e", false),
    ("   - open", false),
    ("   - vowel team", false),
    ("   - consonant le", false),
    ("   - vowel r", false),
    ("ENDINGS", true),
    ("   - ed", false),
    ("   - ing", false),
    ("   - s", false),
    ("   - es", false),
    ("   - er", false),
    ("   - est", false),
    ("High-Frequency Words", false),
];

/// Render the tracker document and return its bytes.
pub fn render_tracker() -> Vec<u8> {
    let mut doc = Doc::new();

    doc.set_font(Font::HelveticaBold, 20.0);
    doc.cell(MARGIN, USABLE_W, 15.0, "Skill Mastery Tracker", Align::Center, false, false);
    doc.ln(15.0);
    doc.set_font(Font::HelveticaBold, 12.0);
    doc.cell(
        MARGIN,
        USABLE_W,
        10.0,
        "Student: _________________________________",
        Align::Left,
        false,
        false,
    );
    doc.ln(10.0);
    doc.ln(5.0);

    doc.set_font(Font::HelveticaBold, 12.0);
    doc.set_fill_color((220, 230, 245));
    doc.cell(MARGIN, SKILL_W, 10.0, " Phonics Skill", Align::Left, true, true);
    for (i, label) in ["Practice", "Pass-Off", "Initials"].iter().enumerate() {
        doc.cell(
            MARGIN + SKILL_W + i as f32 * GRADE_W,
            GRADE_W,
            10.0,
            label,
            Align::Center,
            true,
            true,
        );
    }
    doc.ln(10.0);

    let mut stripe = 0usize;
    for (skill, is_header) in SKILLS {
        doc.ensure(ROW_H);
        if is_header {
            doc.set_font(Font::HelveticaBold, 11.0);
            doc.set_fill_color((235, 235, 235));
            doc.cell(MARGIN, USABLE_W, ROW_H, &format!(" {skill}"), Align::Left, true, true);
            stripe = 0;
        } else {
            doc.set_font(Font::Helvetica, 10.0);
            doc.set_fill_color(if stripe % 2 == 0 {
                (250, 250, 250)
            } else {
                (255, 255, 255)
            });
            doc.cell(MARGIN, SKILL_W, ROW_H, &format!(" {skill}"), Align::Left, true, true);
            for i in 0..3 {
                doc.cell(
                    MARGIN + SKILL_W + i as f32 * GRADE_W,
                    GRADE_W,
                    ROW_H,
                    "",
                    Align::Center,
                    true,
                    true,
                );
            }
            stripe += 1;
        }
        doc.ln(ROW_H);
    }

    doc.finish()
}
