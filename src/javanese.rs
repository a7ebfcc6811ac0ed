use crate::classify::CharClass;
use crate::constants::*;
use crate::error::ValidatorError;
use crate::grammar::{
    consume_opaque, consume_stray_joiner, finish_explicit_virama, GrammarState,
};

/// Consumes one Javanese syllable. The skeleton is the Indic consonant
/// chain, but conjuncts fold subscript-style (pasangan) and the pengkal and
/// cakra medials take the role Indic gives joiner-requested forms.
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
            state.take();
            state.close_pending();
            if let Some((CharClass::VowelModifier, _)) = state.peek() {
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
    take_consonant(state);
    state.close_pending();

    while let Some((CharClass::Virama, _)) = state.peek() {
        match state.peek_at(1) {
            Some((CharClass::Consonant, _)) => {
                // Pangkon + consonant: a stacked pasangan, one sub-part.
                state.take();
                take_consonant(state);
                state.close_pending();
            }
            Some((CharClass::Matra | CharClass::MatraPiece, _)) => return Ok(false),
            Some((CharClass::Joiner, _)) => return Ok(false),
            _ => {
                finish_explicit_virama(state)?;
                state.end_unit();
                return Ok(true);
            }
        }
    }

    // Matra slot; tarung may complete a taling or stand for one.
    match state.peek() {
        Some((CharClass::Matra, _)) => {
            state.take();
            if let Some((CharClass::MatraPiece, _)) = state.peek() {
                state.take();
            }
            state.close_pending();
        }
        Some((CharClass::MatraPiece, _)) => {
            state.take();
            state.close_pending();
        }
        _ => {}
    }

    if let Some((CharClass::VowelModifier, _)) = state.peek() {
        state.take();
        state.close_pending();
    }

    if let Some((CharClass::Virama, _)) = state.peek() {
        finish_explicit_virama(state)?;
    }

    state.end_unit();
    Ok(true)
}

/// A consonant with its optional cecak telu and medials attached.
fn take_consonant(state: &mut GrammarState) {
    state.take();
    if let Some((CharClass::Nukta, _)) = state.peek() {
        state.take();
    }
    while matches!(
        state.peek(),
        Some((_, c)) if c == JAVANESE_PENGKAL || c == JAVANESE_CAKRA
    ) {
        state.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ViramaScript;

    fn run(src: &[char]) -> (bool, Vec<Vec<char>>, Vec<char>) {
        let mut state = GrammarState::new(ViramaScript::Javanese, false, src);
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
    fn pasangan_folds_like_subscript() {
        // KA + pangkon + TA
        let src = ['\u{A98F}', '\u{A9C0}', '\u{A9A4}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(
            parts,
            vec![vec!['\u{A98F}'], vec!['\u{A9C0}', '\u{A9A4}']]
        );
    }

    #[test]
    fn cakra_medial_rides_base() {
        // KA + cakra + wulu
        let src = ['\u{A98F}', '\u{A9BF}', '\u{A9B6}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(parts[0], vec!['\u{A98F}', '\u{A9BF}']);
    }

    #[test]
    fn word_final_pangkon_normalizes() {
        let src = ['\u{A98F}', '\u{A9C0}'];
        let (ok, _, output) = run(&src);
        assert!(ok);
        assert_eq!(output, vec!['\u{A98F}', '\u{A9C0}', '\u{200C}']);
    }

    #[test]
    fn taling_tarung_is_one_part() {
        // KA + taling + tarung ("ko")
        let src = ['\u{A98F}', '\u{A9BA}', '\u{A9B4}'];
        let (ok, parts, _) = run(&src);
        assert!(ok);
        assert_eq!(parts[1], vec!['\u{A9BA}', '\u{A9B4}']);
    }

    #[test]
    fn matra_after_pangkon_fails() {
        let src = ['\u{A98F}', '\u{A9C0}', '\u{A9B6}'];
        let (ok, _, output) = run(&src);
        assert!(!ok);
        assert_eq!(output, vec!['\u{A98F}']);
    }

    #[test]
    fn cecak_as_final_modifier() {
        // KA + wulu + cecak
        let src = ['\u{A98F}', '\u{A9B6}', '\u{A981}'];
        let (ok, _, _) = run(&src);
        assert!(ok);
    }
}
