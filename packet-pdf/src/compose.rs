//! Packet-level page orchestration: cover page, one page per activity,
//! per-kind dispatch, and the key-only reference appendix.

use phonics_core::model::GeneratedPacket;
use phonics_core::plan::ActivityKind;
use phonics_core::sanitize::clean_text;
use rand::Rng;

use crate::doc::{Align, BLACK, Doc, KEY_RED, MARGIN, USABLE_W};
use crate::fonts::Font;
use crate::{Mode, drill, mystery_grid, riddles, sentence_match, sound_map, story, word_sort};

const NAME_LINE: &str = "Name: ___________________________________";

/// Render the whole packet for one mode and return the document bytes.
pub fn render_packet<R: Rng + ?Sized>(
    packet: &GeneratedPacket,
    mode: Mode,
    rng: &mut R,
) -> Vec<u8> {
    let mut doc = Doc::new();
    cover_page(&mut doc, packet, mode);

    for activity in &packet.activities {
        let Some(kind) = activity.kind() else {
            log::warn!("skipping activity with unknown kind {:?}", activity.type_);
            continue;
        };
        doc.add_page();
        // The mystery grid owns its whole page, frame and headers included.
        if kind == ActivityKind::MysteryGrid {
            mystery_grid::render(&mut doc, &activity.content, mode, rng);
            continue;
        }
        activity_header(&mut doc, kind, mode);
        match kind {
            ActivityKind::Story => story::render(&mut doc, &activity.content, mode),
            ActivityKind::NonsenseDrill => drill::render(&mut doc, &activity.content),
            ActivityKind::WordSort => word_sort::render(&mut doc, &activity.content, mode, rng),
            ActivityKind::SentenceMatch => {
                sentence_match::render(&mut doc, &activity.content, mode, rng)
            }
            ActivityKind::SoundMapping => sound_map::render(&mut doc, &activity.content, mode),
            ActivityKind::RiddleCards => riddles::render(&mut doc, &activity.content, mode),
            ActivityKind::MysteryGrid => {}
        }
    }

    if mode.is_key() {
        reference_page(&mut doc, packet);
    }
    log::info!(
        "rendered {mode:?} packet: {} activities, {} pages",
        packet.activities.len(),
        doc.page_count()
    );
    doc.finish()
}

fn cover_page(doc: &mut Doc, packet: &GeneratedPacket, mode: Mode) {
    doc.set_font(Font::HelveticaBold, 12.0);
    if mode.is_key() {
        doc.set_text_color(KEY_RED);
        doc.cell(MARGIN, USABLE_W, 10.0, "TEACHER ANSWER KEY", Align::Right, false, false);
        doc.set_text_color(BLACK);
    } else {
        doc.cell(
            MARGIN,
            USABLE_W,
            10.0,
            "Name: ___________________________________   Date: ___________",
            Align::Left,
            false,
            false,
        );
    }
    doc.ln(10.0);
    doc.ln(10.0);

    doc.set_font(Font::HelveticaBold, 26.0);
    doc.cell(MARGIN, USABLE_W, 15.0, "WIN Time Phonics Packet", Align::Center, false, false);
    doc.ln(15.0);
    doc.ln(10.0);

    doc.set_font(Font::HelveticaBold, 14.0);
    doc.cell(MARGIN, USABLE_W, 8.0, "Learning Focus:", Align::Left, false, false);
    doc.ln(8.0);
    doc.set_font(Font::Helvetica, 12.0);
    let overview = if packet.overview.trim().is_empty() {
        "Practice targeted phonics skills.".to_string()
    } else {
        clean_text(&packet.overview)
    };
    doc.multi_cell(MARGIN, USABLE_W, 6.0, &overview, Align::Left);
    doc.ln(10.0);

    doc.set_font(Font::HelveticaBold, 14.0);
    doc.cell(MARGIN, USABLE_W, 8.0, "Target Word Bank:", Align::Left, false, false);
    doc.ln(8.0);
    doc.set_font(Font::Helvetica, 12.0);
    let targets: Vec<String> = packet.target_words.iter().map(|w| clean_text(w)).collect();
    if targets.is_empty() {
        doc.cell(MARGIN, USABLE_W, 6.0, "Words provided in activities.", Align::Left, false, false);
        doc.ln(6.0);
    } else {
        doc.multi_cell(MARGIN, USABLE_W, 6.0, &targets.join("   |   "), Align::Left);
    }
    doc.ln(10.0);

    doc.set_font(Font::HelveticaBold, 14.0);
    doc.cell(MARGIN, USABLE_W, 8.0, "Packet Checklist:", Align::Left, false, false);
    doc.ln(8.0);
    doc.set_font(Font::Helvetica, 12.0);
    for (i, activity) in packet.activities.iter().enumerate() {
        let label = if activity.type_.trim().is_empty() {
            "Activity".to_string()
        } else {
            clean_text(&activity.type_)
        };
        doc.ensure(8.0);
        doc.cell(
            MARGIN,
            USABLE_W,
            8.0,
            &format!("[   ]  {}. {label}", i + 1),
            Align::Left,
            false,
            false,
        );
        doc.ln(8.0);
    }
}

fn activity_header(doc: &mut Doc, kind: ActivityKind, mode: Mode) {
    if mode.is_key() {
        doc.set_font(Font::HelveticaBold, 10.0);
        doc.set_text_color(KEY_RED);
        doc.cell(MARGIN, USABLE_W, 10.0, "TEACHER ANSWER KEY", Align::Right, false, false);
        doc.set_text_color(BLACK);
        doc.ln(10.0);
    } else {
        doc.set_font(Font::HelveticaBold, 10.0);
        doc.cell(MARGIN, USABLE_W, 8.0, NAME_LINE, Align::Right, false, false);
        doc.ln(8.0);
    }
    doc.ln(2.0);
    doc.set_font(Font::HelveticaBold, 14.0);
    doc.cell(MARGIN, USABLE_W, 10.0, kind.label(), Align::Left, false, false);
    doc.ln(10.0);
    doc.ln(2.0);
}

/// Key-only appendix: every target word on one reference page.
fn reference_page(doc: &mut Doc, packet: &GeneratedPacket) {
    doc.add_page();
    doc.set_font(Font::HelveticaBold, 14.0);
    doc.cell(MARGIN, USABLE_W, 10.0, "Teacher Reference: Target Words", Align::Left, false, false);
    doc.ln(12.0);
    doc.set_font(Font::Helvetica, 11.0);
    let joined = packet
        .target_words
        .iter()
        .map(|w| clean_text(w))
        .collect::<Vec<_>>()
        .join(", ");
    let text = if joined.is_empty() {
        "No target words were provided for this packet.".to_string()
    } else {
        joined
    };
    doc.multi_cell(MARGIN, USABLE_W, 6.0, &text, Align::Left);
}
