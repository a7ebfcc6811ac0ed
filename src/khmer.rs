use crate::classify::CharClass;
use crate::error::ValidatorError;
use crate::grammar::{consume_opaque, consume_stray_joiner, GrammarState};

/// Consumes one Khmer orthographic syllable:
/// `C [Shifter] {Robat | Coeng C}* [{ZWJ|ZWNJ} Matra [Piece]] {Sign} [Coeng C]`.
///
/// Khmer never writes a visible standalone virama: a coeng not immediately
/// followed by a consonant fails the unit, unlike the Indic normalization
/// path.
pub fn consume_syllable(state: &mut GrammarState) -> Result<bool, ValidatorError> {
    if consume_stray_joiner(state) {
        return Ok(true);
    }
    if consume_opaque(state) {
        state.end_unit();
        return Ok(true);
    }
    match state.peek() {
        Some((CharClass::Vowel, _)) => {
            // Independent vowel, optionally with signs.
            state.take();
            state.close_pending();
            while let Some((CharClass::VowelModifier, _)) = state.peek() {
                state.take();
                state.close_pending();
            }
            state.end_unit();
            Ok(true)
        }
        Some((CharClass::Consonant, _)) => consume_consonant(state),
        _ => Ok(false),
    }
}

fn consume_consonant(state: &mut GrammarState) -> Result<bool, ValidatorError> {
    state.take();
    // Register shifter rides the base consonant.
    if let Some((CharClass::Nukta, _)) = state.peek() {
        state.take();
    }
    state.close_pending();

    // Robat and stacked subscripts.
    loop {
        match state.peek() {
            Some((CharClass::Robat, _)) => {
                state.take();
                state.close_pending();
            }
            Some((CharClass::Virama, _)) => {
                if !consume_coeng_pair(state) {
                    return Ok(false);
                }
            }
            _ => break,
        }
    }

    // Dependent vowel, optionally introduced by a joiner.
    let joined_matra = matches!(state.peek(), Some((CharClass::Joiner | CharClass::NonJoiner, _)))
        && matches!(state.peek_at(1), Some((CharClass::Matra, _)));
    if joined_matra {
        state.take();
    }
    if let Some((CharClass::Matra, _)) = state.peek() {
        state.take();
        if let Some((CharClass::MatraPiece, _)) = state.peek() {
            state.take();
        }
        state.close_pending();
    }

    while let Some((CharClass::VowelModifier, _)) = state.peek() {
        state.take();
        state.close_pending();
    }

    // A final subscript may trail the vowel (e.g. coeng ro).
    if let Some((CharClass::Virama, _)) = state.peek() {
        if !consume_coeng_pair(state) {
            return Ok(false);
        }
    }

    state.end_unit();
    Ok(true)
}

/// Coeng plus the consonant it stacks; the pair is one sub-part because the
/// subscript form is a single glyph.
fn consume_coeng_pair(state: &mut GrammarState) -> bool {
    match state.peek_at(1) {
        Some((CharClass::Consonant, _)) => {
            state.take();
            state.take();
            state.close_pending();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ViramaScript;

    fn run(src: &[char]) -> (bool, Vec<Vec<char>>, Vec<char>) {
        let mut state = GrammarState::new(ViramaScript::Khmer, false, src);
        let mut ok = true;
        while !state.exhausted() {
            match consume_syllable(&mut state).unwrap() {
                true => {}
                false => {
                    ok = false;
                    state.recover();
                }
            }
        }
        (ok, state.parts().to_vec(), state.output().to_vec())
    }

    #[test]
    fn coeng_consonant_is_one_unit() {
        // KA + coeng + TA
        let src = ['\u{1780}', '\u{17D2}', '\u{178F}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(
            parts,
            vec![vec!['\u{1780}'], vec!['\u{17D2}', '\u{178F}']]
        );
    }

    #[test]
    fn coeng_before_vowel_fails() {
        // KA + coeng + independent vowel
        let src = ['\u{1780}', '\u{17D2}', '\u{17A5}'];
        let (ok, _, output) = run(&src);
        assert!(!ok);
        // The coeng is dropped; the base and the vowel survive.
        assert_eq!(output, vec!['\u{1780}', '\u{17A5}']);
    }

    #[test]
    fn robat_and_matra() {
        // MO + robat + AA
        let src = ['\u{1798}', '\u{17CC}', '\u{17B6}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn shifted_consonant_with_vowel() {
        // SA + triisap + II ("si")
        let src = ['\u{179F}', '\u{17CA}', '\u{17B8}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(parts[0], vec!['\u{179F}', '\u{17CA}']);
        assert_eq!(parts[1], vec!['\u{17B8}']);
    }

    #[test]
    fn trailing_coeng_ro_after_vowel() {
        // TA + OO + coeng + RO
        let src = ['\u{178F}', '\u{17BC}', '\u{17D2}', '\u{179A}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2], vec!['\u{17D2}', '\u{179A}']);
    }

    #[test]
    fn bare_coeng_at_start_fails() {
        let src = ['\u{17D2}', '\u{1780}'];
        let (ok, _, output) = run(&src);
        assert!(!ok);
        assert_eq!(output, vec!['\u{1780}']);
    }

    #[test]
    fn sign_run_after_vowel() {
        // KA + AA + nikahit
        let src = ['\u{1780}', '\u{17B6}', '\u{17C6}'];
        let (ok, _, _) = run(&src);
        assert!(ok);
    }
}
