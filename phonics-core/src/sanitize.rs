/// Normalize generated text for the WinAnsi-encoded standard fonts.
///
/// Smart quotes and typographic dashes become their ASCII equivalents,
/// ellipsis glyphs become three periods, and Markdown emphasis markers are
/// dropped. Characters outside the table pass through untouched. Applying
/// the function twice yields the same string as applying it once.
pub fn clean_text(t: &str) -> String {
    let mut out = String::with_capacity(t.len());
    for ch in t.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' => out.push('-'),
            '\u{2014}' => out.push_str("--"),
            '\u{2026}' => out.push_str("..."),
            '*' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Coerce any displayable value and normalize it in one step.
pub fn clean_display<T: std::fmt::Display>(value: T) -> String {
    clean_text(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_typographic_punctuation() {
        assert_eq!(clean_text("\u{2018}it\u{2019}s\u{201C}odd\u{201D}"), "'it's\"odd\"");
        assert_eq!(clean_text("a\u{2013}b\u{2014}c\u{2026}"), "a-b--c...");
    }

    #[test]
    fn strips_emphasis_markers() {
        assert_eq!(clean_text("**bold** and *slanted*"), "bold and slanted");
    }

    #[test]
    fn passes_other_text_through() {
        assert_eq!(clean_text("plain ascii, ünchanged"), "plain ascii, ünchanged");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "\u{201C}Stop!\u{201D} she said \u{2014} twice\u{2026}",
            "**mark**",
            "already clean -- text...",
        ];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn coerces_displayable_values() {
        assert_eq!(clean_display(21), "21");
        assert_eq!(clean_display(true), "true");
    }
}
