//! Corpus-style sweeps: every line in the embedded tables is pushed through
//! all four modes and checked for acceptance, idempotence and the
//! no-invention property.

use grapheme_rs::{validate_str, GraphemeNormMode};

const MODES: [GraphemeNormMode; 4] = [
    GraphemeNormMode::SingleString,
    GraphemeNormMode::Combined,
    GraphemeNormMode::GlyphSplit,
    GraphemeNormMode::IndividualUnicodes,
];

/// Well-formed lines across the supported scripts.
const VALID_LINES: &[&str] = &[
    "नमस\u{094D}ते",
    "हिन\u{094D}दी",
    "ব\u{09BE}ংল\u{09BE}",
    "ಕನ\u{0CCD}ನಡ",
    "தமிழ\u{0BCD}",
    "ക\u{0D4D}\u{200D}",
    "ក\u{17D2}រ\u{17BB}ម",
    "កម\u{17D2}ពុជ\u{17B6}",
    "မ\u{1004}\u{103A}\u{1039}ဂလ\u{102C}",
    "မ\u{103C}န\u{103A}မ\u{102C}",
    "ꦗꦮ",
    "The quick brown fox",
    "e\u{0301}tude 123",
];

/// Lines with at least one code point every grammar must reject.
const INVALID_LINES: &[&str] = &[
    "\u{0905}\u{0946}",
    "क\u{093E}\u{093E}",
    "ក\u{17D2}\u{17D2}ក",
    "ក\u{17D2}\u{17B6}",
    "\u{1004}\u{103A}\u{1039}",
    "\u{1000}\u{1039}\u{102C}",
    "\u{0E40}\u{0E48}",
];

#[test]
fn valid_lines_accepted_in_every_mode() {
    let mut failures = Vec::new();
    for line in VALID_LINES {
        for mode in MODES {
            match validate_str(mode, false, line) {
                Ok(v) if v.ok => {}
                Ok(_) => failures.push(format!("{:?} rejected {:?}", mode, line)),
                Err(e) => failures.push(format!("{:?} errored on {:?}: {}", mode, line, e)),
            }
        }
    }
    if !failures.is_empty() {
        panic!("{} failures:\n{}", failures.len(), failures.join("\n"));
    }
}

#[test]
fn invalid_lines_rejected_but_never_error() {
    let mut failures = Vec::new();
    for line in INVALID_LINES {
        for mode in MODES {
            match validate_str(mode, false, line) {
                Ok(v) if !v.ok => {}
                Ok(_) => failures.push(format!("{:?} accepted {:?}", mode, line)),
                Err(e) => failures.push(format!("{:?} errored on {:?}: {}", mode, line, e)),
            }
        }
    }
    if !failures.is_empty() {
        panic!("{} failures:\n{}", failures.len(), failures.join("\n"));
    }
}

#[test]
fn cleaned_text_is_stable_under_revalidation() {
    // Scoped to accepted lines: a degraded (rejected) output may legitimately
    // keep shrinking, since recovery preserves partial units whose context
    // is gone.
    for line in VALID_LINES {
        let first = validate_str(GraphemeNormMode::SingleString, false, line).unwrap();
        let second =
            validate_str(GraphemeNormMode::SingleString, false, &first.concat()).unwrap();
        assert!(
            second.ok,
            "cleaned output of {:?} was rejected: {:?}",
            line,
            first.concat()
        );
        assert_eq!(second.concat(), first.concat(), "unstable for {:?}", line);
    }
}

#[test]
fn validator_invents_nothing_but_zwnj() {
    for line in VALID_LINES.iter().chain(INVALID_LINES) {
        let v = validate_str(GraphemeNormMode::IndividualUnicodes, false, line).unwrap();
        for group in &v.groups {
            for &c in group {
                assert!(
                    line.contains(c) || c == '\u{200C}',
                    "{:?} appeared from nowhere in {:?}",
                    c,
                    line
                );
            }
        }
    }
}

#[test]
fn all_modes_agree_on_the_flat_text() {
    for line in VALID_LINES.iter().chain(INVALID_LINES) {
        let reference = validate_str(MODES[0], false, line).unwrap().concat();
        for mode in &MODES[1..] {
            let v = validate_str(*mode, false, line).unwrap();
            assert_eq!(v.concat(), reference, "{:?} disagrees on {:?}", mode, line);
        }
    }
}
