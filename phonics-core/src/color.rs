/// 8-bit RGB triple.
pub type Rgb = (u8, u8, u8);

/// Neutral fallback for unrecognized color names.
pub const DEFAULT_FILL: Rgb = (255, 255, 255);
pub const DEFAULT_TEXT: Rgb = (0, 0, 0);

// Pastel fills keep black text readable; the dark swatches flip to white
// text instead. "orange" is listed before "red" so compound names such as
// "orangered" land on the longer match.
const SWATCHES: [(&str, Rgb, Rgb); 11] = [
    ("orange", (255, 220, 180), (0, 0, 0)),
    ("red", (255, 180, 180), (0, 0, 0)),
    ("blue", (180, 210, 255), (0, 0, 0)),
    ("green", (180, 255, 180), (0, 0, 0)),
    ("yellow", (255, 255, 180), (0, 0, 0)),
    ("purple", (220, 180, 255), (0, 0, 0)),
    ("pink", (255, 200, 230), (0, 0, 0)),
    ("brown", (210, 190, 170), (0, 0, 0)),
    ("black", (50, 50, 50), (255, 255, 255)),
    ("gray", (150, 150, 150), (255, 255, 255)),
    ("grey", (150, 150, 150), (255, 255, 255)),
];

/// Map a free-text color name to a (fill, text) pair for legend shading.
///
/// Matching is case-insensitive and ignores surrounding words, so
/// "Dark Blue" and "  blue " both hit the blue swatch. Unknown names fall
/// back to a white fill with black text; this never fails.
pub fn resolve(name: &str) -> (Rgb, Rgb) {
    let needle = name.trim().to_ascii_lowercase();
    for (key, fill, text) in SWATCHES {
        if needle.contains(key) {
            return (fill, text);
        }
    }
    (DEFAULT_FILL, DEFAULT_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_whitespace_insensitive() {
        let canonical = resolve("blue");
        assert_eq!(resolve("  BLUE "), canonical);
        assert_eq!(resolve("Dark Blue"), canonical);
        assert_ne!(canonical.0, DEFAULT_FILL);
    }

    #[test]
    fn all_primary_names_resolve() {
        for name in ["red", "blue", "green", "yellow", "orange", "purple", "pink", "brown"] {
            let (fill, text) = resolve(name);
            assert_ne!(fill, DEFAULT_FILL, "{name} fell through to the default");
            assert_eq!(text, (0, 0, 0));
        }
    }

    #[test]
    fn dark_swatches_use_light_text() {
        for name in ["black", "gray", "grey"] {
            let (_, text) = resolve(name);
            assert_eq!(text, (255, 255, 255));
        }
    }

    #[test]
    fn unknown_names_get_the_neutral_default() {
        assert_eq!(resolve("chartreuse"), (DEFAULT_FILL, DEFAULT_TEXT));
        assert_eq!(resolve(""), (DEFAULT_FILL, DEFAULT_TEXT));
    }
}
