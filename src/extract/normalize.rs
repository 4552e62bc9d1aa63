//! Post-extraction text normalization.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Typographic ligatures and their expansions.
const LIGATURES: &[(char, &str)] = &[
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB05}', "st"),
    ('\u{FB06}', "st"),
];

/// A word broken across a line end: "infor-\nmation".
static LINE_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])-[ \t]*\r?\n[ \t]*([a-z])").expect("valid regex"));

/// Normalize extracted page text.
///
/// Applies NFC, expands ligatures, drops private-use code points left
/// behind by symbol fonts and rejoins words hyphenated at line ends.
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.nfc() {
        if let Some((_, expansion)) = LIGATURES.iter().find(|(lig, _)| *lig == c) {
            result.push_str(expansion);
        } else if !is_private_use(c) {
            result.push(c);
        }
    }
    LINE_HYPHEN.replace_all(&result, "$1$2").into_owned()
}

fn is_private_use(c: char) -> bool {
    let code = c as u32;
    (0xE000..=0xF8FF).contains(&code)
        || (0xF0000..=0xFFFFD).contains(&code)
        || (0x100000..=0x10FFFD).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc() {
        let decomposed = "cafe\u{0301}";
        assert_eq!(normalize_text(decomposed), "caf\u{00E9}");
    }

    #[test]
    fn test_ligatures() {
        assert_eq!(normalize_text("\u{FB01}nding \u{FB02}owers"), "finding flowers");
        assert_eq!(normalize_text("e\u{FB03}cient"), "efficient");
    }

    #[test]
    fn test_private_use_removed() {
        assert_eq!(normalize_text("a\u{E001}b"), "ab");
    }

    #[test]
    fn test_line_hyphenation() {
        assert_eq!(normalize_text("infor-\nmation"), "information");
        assert_eq!(normalize_text("infor- \n  mation"), "information");
        assert_eq!(normalize_text("well-known"), "well-known");
        assert_eq!(normalize_text("COVID-\n19"), "COVID-\n19");
    }
}
