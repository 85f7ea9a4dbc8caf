use crate::plan::ActivityKind;

/// Phonics category menu: (category label, target labels). The order is the
/// order a picker should present; each plan item records one category and a
/// subset of its targets.
pub const PHONICS_MENU: [(&str, &[&str]); 10] = [
    ("Mixed Review (All Types)", &["All Patterns Combined"]),
    (
        "CVC (Short Vowels)",
        &["Short A", "Short E", "Short I", "Short O", "Short U", "Mixed Short Vowels"],
    ),
    ("Consonant Digraphs", &["sh", "ch", "th", "wh", "ck", "Mixed Digraphs"]),
    ("Consonant Blends", &["L-Blends", "R-Blends", "S-Blends", "Final Blends"]),
    ("Magic E (CVCe)", &["a-e", "i-e", "o-e", "u-e", "Mixed Magic E"]),
    ("Vowel r", &["ar", "or", "er", "ir", "ur", "Mixed Vowel r"]),
    (
        "Predictable Vowel Teams",
        &["Long A (ai, ay)", "Long E (ee, ea)", "Long O (oa, ow)", "Long I (igh, ie)"],
    ),
    (
        "Variant Vowel Teams",
        &["/ow/ (ou, ow)", "/oy/ (oi, oy)", "/oo/ (oo, ew)", "/aw/ (au, aw)"],
    ),
    (
        "Multisyllable",
        &["closed/closed", "silent e", "open", "vowel team", "consonant le", "vowel r"],
    ),
    ("Endings", &["ed", "ing", "s", "es", "er", "est"]),
];

/// Target labels for a category, if the category exists.
pub fn targets_for(category: &str) -> Option<&'static [&'static str]> {
    PHONICS_MENU
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, targets)| *targets)
}

/// One-line description shown for an activity kind in a picker.
pub fn activity_blurb(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Story => "Story (3+ paragraphs) & 3 Evidence Check questions.",
        ActivityKind::NonsenseDrill => "21 pseudo-words with a custom Detective Task.",
        ActivityKind::WordSort => "A Word Bank and columns to categorize words.",
        ActivityKind::SentenceMatch => "5 sentence halves to connect.",
        ActivityKind::SoundMapping => "Segment words into phoneme boxes.",
        ActivityKind::RiddleCards => "8 cards per page with 3 logic clues each.",
        ActivityKind::MysteryGrid => "Full-page 8x8 color-by-code geometric grid.",
    }
}
