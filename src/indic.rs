use crate::classify::CharClass;
use crate::constants::*;
use crate::error::ValidatorError;
use crate::grammar::{
    consume_opaque, consume_stray_joiner, finish_explicit_virama, GrammarState,
};
use crate::script::ViramaScript;

/// Consumes one aksara under the shared Indic grammar. A unit is either an
/// independent vowel with optional modifier and vedic marks, or a virama-
/// linked consonant chain with its dependent tail.
///
/// Sub-part grouping differs by rendering style: half-form scripts glue a
/// linking virama onto the consonant before it, subscript scripts (Telugu,
/// Kannada) onto the consonant after it.
pub fn consume_syllable(state: &mut GrammarState) -> Result<bool, ValidatorError> {
    if consume_stray_joiner(state) {
        return Ok(true);
    }
    if consume_opaque(state) {
        state.end_unit();
        return Ok(true);
    }
    match state.peek() {
        Some((CharClass::Vowel, _)) => consume_vowel(state),
        Some((CharClass::VedicMark, _)) => {
            state.take();
            state.close_pending();
            state.end_unit();
            Ok(true)
        }
        Some((CharClass::Consonant, _)) => consume_consonant(state),
        _ => Ok(false),
    }
}

/// `Vowel [MatraPiece] [VowelModifier] (VedicMark)*`
fn consume_vowel(state: &mut GrammarState) -> Result<bool, ValidatorError> {
    state.take();
    // Decomposed two-part vowels (e.g. Tamil AU as O + length mark).
    if let Some((CharClass::MatraPiece, _)) = state.peek() {
        state.take();
    }
    state.close_pending();
    if let Some((CharClass::VowelModifier, _)) = state.peek() {
        state.take();
        state.close_pending();
    }
    while let Some((CharClass::VedicMark, _)) = state.peek() {
        state.take();
        state.close_pending();
    }
    state.end_unit();
    Ok(true)
}

fn consume_consonant(state: &mut GrammarState) -> Result<bool, ValidatorError> {
    take_consonant_and_nukta(state);
    state.close_pending();
    while let Some((CharClass::Virama, _)) = state.peek() {
        match consume_virama(state)? {
            ViramaOutcome::Linked => continue,
            ViramaOutcome::UnitClosed => {
                state.end_unit();
                return Ok(true);
            }
            ViramaOutcome::Invalid => return Ok(false),
        }
    }
    consume_tail(state)?;
    state.end_unit();
    Ok(true)
}

enum ViramaOutcome {
    /// Joined to a following consonant; the chain continues.
    Linked,
    /// Explicit virama (or a normalized one): the unit is finished.
    UnitClosed,
    /// Grammar violation at the virama.
    Invalid,
}

/// Cursor sits on a virama inside a consonant chain. Decides between a
/// linking virama, a joiner-requested conjunct form, and an explicit virama,
/// normalizing the last of these with a ZWNJ when none was written.
fn consume_virama(state: &mut GrammarState) -> Result<ViramaOutcome, ValidatorError> {
    match state.peek_at(1) {
        Some((CharClass::Consonant, _)) => {
            state.take(); // the virama
            if !state.script.is_subscript_script() {
                // Half form: the virama belongs with the consonant before it.
                state.merge_pending_into_last()?;
            }
            take_consonant_and_nukta(state);
            state.close_pending();
            Ok(ViramaOutcome::Linked)
        }
        Some((CharClass::Joiner, _)) => {
            // Virama + ZWJ requests a pre-formed conjunct (Malayalam chillu,
            // Sinhala yansaya/rakaransaya). No other script defines one.
            if !matches!(state.script, ViramaScript::Malayalam | ViramaScript::Sinhala) {
                return Ok(ViramaOutcome::Invalid);
            }
            state.take();
            state.take();
            state.merge_pending_into_last()?;
            if let Some((CharClass::Consonant, _)) = state.peek() {
                take_consonant_and_nukta(state);
                state.close_pending();
                Ok(ViramaOutcome::Linked)
            } else {
                Ok(ViramaOutcome::UnitClosed)
            }
        }
        Some((CharClass::Matra | CharClass::MatraPiece, _)) => Ok(ViramaOutcome::Invalid),
        _ => {
            finish_explicit_virama(state)?;
            Ok(ViramaOutcome::UnitClosed)
        }
    }
}

/// `[Matra [MatraPiece]] [VowelModifier]... [VedicMark] [Virama]`
fn consume_tail(state: &mut GrammarState) -> Result<(), ValidatorError> {
    if let Some((CharClass::Matra, _)) = state.peek() {
        state.take();
        if let Some((CharClass::MatraPiece, _)) = state.peek() {
            state.take();
        }
        state.close_pending();
    }
    if let Some((CharClass::VowelModifier, vm)) = state.peek() {
        state.take();
        state.close_pending();
        // Only Malayalam repeats a modifier, and only its anusvara.
        if state.script == ViramaScript::Malayalam && vm == MALAYALAM_ANUSVARA {
            while matches!(
                state.peek(),
                Some((CharClass::VowelModifier, c)) if c == MALAYALAM_ANUSVARA
            ) {
                state.take();
                state.close_pending();
            }
        }
    }
    if let Some((CharClass::VedicMark, _)) = state.peek() {
        state.take();
        state.close_pending();
    }
    if let Some((CharClass::Virama, _)) = state.peek() {
        // Word-final halant after a matra. Always explicit.
        finish_explicit_virama(state)?;
    }
    Ok(())
}

fn take_consonant_and_nukta(state: &mut GrammarState) {
    state.take();
    if let Some((CharClass::Nukta, _)) = state.peek() {
        state.take();
    }
}
