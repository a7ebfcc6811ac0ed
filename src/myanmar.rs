use crate::classify::CharClass;
use crate::constants::*;
use crate::error::ValidatorError;
use crate::grammar::{consume_opaque, consume_stray_joiner, GrammarState};

/// Consumes one Myanmar syllable: an optional kinzi prefix, exactly one base
/// letter, at most one stacked subscript (virama + letter), then a tail of
/// medials, vowel signs and tone marks consumed one at a time.
///
/// The tail is deliberately permissive: Myanmar modifier ordering admits
/// sequences that are well-formed but visually ambiguous, and the Unicode
/// chapter says as much. Ordering errors inside the tail are left to the
/// rendering stage.
pub fn consume_syllable(state: &mut GrammarState) -> Result<bool, ValidatorError> {
    if consume_stray_joiner(state) {
        return Ok(true);
    }
    if consume_opaque(state) {
        state.end_unit();
        return Ok(true);
    }

    if at_kinzi(state) {
        state.take();
        state.take();
        state.take();
        state.close_pending();
        // Kinzi renders above a following base; without one it is dangling.
        if !matches!(state.peek(), Some((CharClass::Consonant | CharClass::Vowel, _))) {
            return Ok(false);
        }
    }

    match state.peek() {
        Some((CharClass::Consonant | CharClass::Vowel, _)) => {}
        _ => return Ok(false),
    }
    state.take();
    state.close_pending();

    // One stacked subscript.
    if let Some((CharClass::Virama, _)) = state.peek() {
        match state.peek_at(1) {
            Some((_, c2)) if is_myanmar_letter(c2) => {
                state.take();
                state.take();
                state.close_pending();
            }
            _ => return Ok(false),
        }
    }

    while let Some((cc, _)) = state.peek() {
        match cc {
            CharClass::Combiner | CharClass::Matra | CharClass::VowelModifier => {
                state.take();
                state.close_pending();
            }
            _ => break,
        }
    }

    state.end_unit();
    Ok(true)
}

fn at_kinzi(state: &mut GrammarState) -> bool {
    (0..3).all(|k| matches!(state.peek_at(k), Some((_, c)) if c == KINZI[k]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ViramaScript;

    fn run(src: &[char]) -> (bool, Vec<Vec<char>>, Vec<char>) {
        let mut state = GrammarState::new(ViramaScript::Myanmar, false, src);
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
    fn kinzi_prefix_joins_base() {
        // kinzi + KA
        let src = ['\u{1004}', '\u{103A}', '\u{1039}', '\u{1000}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(
            parts,
            vec![
                vec!['\u{1004}', '\u{103A}', '\u{1039}'],
                vec!['\u{1000}'],
            ]
        );
    }

    #[test]
    fn dangling_kinzi_fails() {
        let src = ['\u{1004}', '\u{103A}', '\u{1039}'];
        let (ok, _, _) = run(&src);
        assert!(!ok);
    }

    #[test]
    fn subscript_pair_folds() {
        // KA + virama + KHA (stacked)
        let src = ['\u{1000}', '\u{1039}', '\u{1001}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(
            parts,
            vec![vec!['\u{1000}'], vec!['\u{1039}', '\u{1001}']]
        );
    }

    #[test]
    fn final_asat_rides_the_tail() {
        // KA + KA + asat: two syllables, the second closed by asat
        let src = ['\u{1000}', '\u{1000}', '\u{103A}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn medial_and_vowel_tail() {
        // KYA: KA + medial YA + AA + asat would be unusual but legal
        let src = ['\u{1000}', '\u{103B}', '\u{102C}'];
        let (ok, _, _) = run(&src);
        assert!(ok);
    }

    #[test]
    fn shan_extension_letters_accepted() {
        // Shan SA (Extended block letters resolve by predicate)
        let src = ['\u{1075}', '\u{1062}'];
        let (ok, _, _) = run(&src);
        assert!(ok);
    }

    #[test]
    fn virama_without_letter_fails() {
        let src = ['\u{1000}', '\u{1039}', '\u{102C}'];
        let (ok, _, output) = run(&src);
        assert!(!ok);
        // The stranded matra is also rejected by recovery.
        assert_eq!(output, vec!['\u{1000}']);
    }
}
