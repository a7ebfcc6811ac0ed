use crate::classify::CharClass;
use crate::constants::*;
use crate::error::ValidatorError;
use crate::grammar::{consume_stray_joiner, extends_grapheme, GrammarState};

/// Consumes one grapheme under the generic (non-virama) grammar: a base
/// code point plus forward combiners. Grapheme-link characters and ZWJ keep
/// the grapheme open so the base that follows them joins the same unit,
/// which is what bounds the script grammars' lookahead in two-pass runs.
///
/// Returns `Ok(false)` on a malformed sequence; the orchestrator applies
/// skip-one recovery.
pub fn consume_grapheme(state: &mut GrammarState) -> Result<bool, ValidatorError> {
    let Some((cc, c)) = state.peek() else {
        return Ok(true);
    };
    if consume_stray_joiner(state) {
        return Ok(true);
    }
    if cc == CharClass::Whitespace {
        state.take();
        state.close_pending();
        state.end_unit();
        return Ok(true);
    }

    // A dangling combiner opening a unit is still adjacent to the previous
    // accepted code point; the pairwise tables apply across the boundary,
    // even when a dropped joiner sat between the two in the input.
    if extends_grapheme(cc) {
        if let Some(prev) = state.last_accepted() {
            if is_badly_formed(prev, c) {
                return Ok(false);
            }
        }
    }

    // Base code point. Anything non-breaking can anchor a grapheme; a
    // dangling combiner is preserved rather than invented around.
    state.take();
    let mut prev = c;
    let mut prev_links = cc == CharClass::Virama || cc == CharClass::Joiner;

    while let Some((cc2, c2)) = state.peek() {
        if !extends_grapheme(cc2) && !prev_links {
            break;
        }
        if is_badly_formed(prev, c2) {
            return Ok(false);
        }
        state.take();
        prev = c2;
        prev_links = cc2 == CharClass::Virama || cc2 == CharClass::Joiner;
        // A ZWNJ after a virama closes the conjunct explicitly.
        if cc2 == CharClass::NonJoiner {
            break;
        }
    }

    state.close_pending();
    state.end_unit();
    Ok(true)
}

/// Pairwise rejection table, always against the immediately preceding
/// accepted code point.
fn is_badly_formed(prev: char, c: char) -> bool {
    // Two grapheme links in a row, except the asat+virama interior of a
    // Myanmar kinzi.
    if has_grapheme_link(prev)
        && has_grapheme_link(c)
        && !(prev == '\u{103A}' && c == '\u{1039}')
    {
        return true;
    }
    if is_badly_formed_indic_vowel(prev, c) {
        return true;
    }
    if is_badly_formed_thai(prev, c) {
        return true;
    }
    false
}
