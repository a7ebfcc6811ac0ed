use crate::error::ValidatorError;
use crate::grammar::GrammarState;
use crate::script::ViramaScript;
use crate::{generic, indic, javanese, khmer, myanmar};

/// How the validated buffer is reshaped for the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GraphemeNormMode {
    /// Everything as one entry.
    SingleString,
    /// One entry per consumed unit (grapheme/syllable).
    Combined,
    /// One entry per glyph-like sub-part.
    GlyphSplit,
    /// One entry per code point.
    IndividualUnicodes,
}

/// Result of a validation call: a best-effort segmentation plus a flag.
/// `ok == false` means at least one code point was rejected; the groups
/// still hold everything that survived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub ok: bool,
    pub groups: Vec<Vec<char>>,
}

impl Validation {
    /// The flat cleaned text, all groups concatenated.
    pub fn concat(&self) -> String {
        self.groups.iter().flat_map(|g| g.iter()).collect()
    }

    /// Groups as owned strings.
    pub fn strings(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.iter().collect()).collect()
    }
}

/// Validates a buffer of code points against the grammar of its dominant
/// script and re-emits it at the requested granularity.
///
/// Malformed input degrades the result and clears `ok`; an `Err` is
/// reserved for internal invariant violations.
pub fn validate_and_segment(
    mode: GraphemeNormMode,
    report_errors: bool,
    src: &[char],
) -> Result<Validation, ValidatorError> {
    let mut groups = Vec::new();
    if src.is_empty() {
        return Ok(Validation { ok: true, groups });
    }
    let script = ViramaScript::most_frequent(src);
    if script == ViramaScript::None {
        // The generic grammar's units are already its finest parts, so the
        // two middle modes shift down one level of granularity.
        let mode = promote_generic_mode(mode);
        let ok = run_pass(ViramaScript::None, mode, report_errors, src, &mut groups)?;
        return Ok(Validation { ok, groups });
    }

    // Two passes: the generic grammar splits the buffer into graphemes, and
    // the script grammar then runs inside each one. A script grammar must
    // never consume across a generic break (digits, punctuation, or foreign
    // letters embedded in the text).
    let mut graphemes = Vec::new();
    let mut ok = run_pass(
        ViramaScript::None,
        GraphemeNormMode::Combined,
        report_errors,
        src,
        &mut graphemes,
    )?;
    for grapheme in &graphemes {
        ok &= run_pass(script, mode, report_errors, grapheme, &mut groups)?;
    }
    Ok(Validation { ok, groups })
}

/// Convenience wrapper over UTF-8 text.
pub fn validate_str(
    mode: GraphemeNormMode,
    report_errors: bool,
    text: &str,
) -> Result<Validation, ValidatorError> {
    let cps: Vec<char> = text.chars().collect();
    validate_and_segment(mode, report_errors, &cps)
}

fn promote_generic_mode(mode: GraphemeNormMode) -> GraphemeNormMode {
    match mode {
        GraphemeNormMode::Combined => GraphemeNormMode::GlyphSplit,
        GraphemeNormMode::GlyphSplit => GraphemeNormMode::IndividualUnicodes,
        other => other,
    }
}

/// One classify→consume loop over one buffer, appending reshaped results.
fn run_pass(
    script: ViramaScript,
    mode: GraphemeNormMode,
    report_errors: bool,
    src: &[char],
    dest: &mut Vec<Vec<char>>,
) -> Result<bool, ValidatorError> {
    let mut state = GrammarState::new(script, report_errors, src);
    let mut ok = true;
    while !state.exhausted() {
        let consumed = match script {
            ViramaScript::None => generic::consume_grapheme(&mut state)?,
            ViramaScript::Khmer => khmer::consume_syllable(&mut state)?,
            ViramaScript::Myanmar => myanmar::consume_syllable(&mut state)?,
            ViramaScript::Javanese => javanese::consume_syllable(&mut state)?,
            _ => indic::consume_syllable(&mut state)?,
        };
        if !consumed {
            ok = false;
            state.recover();
        }
    }
    move_results(&state, mode, dest);
    Ok(ok)
}

/// Reshapes one pass's accumulated output into the destination. In
/// SingleString shape, later passes extend the existing entry instead of
/// opening a new one.
fn move_results(state: &GrammarState, mode: GraphemeNormMode, dest: &mut Vec<Vec<char>>) {
    match mode {
        GraphemeNormMode::SingleString => {
            if state.output().is_empty() {
                return;
            }
            match dest.last_mut() {
                Some(last) => last.extend_from_slice(state.output()),
                None => dest.push(state.output().to_vec()),
            }
        }
        GraphemeNormMode::Combined => {
            for unit in state.units() {
                let entry: Vec<char> = unit.iter().flat_map(|p| p.iter().copied()).collect();
                if !entry.is_empty() {
                    dest.push(entry);
                }
            }
        }
        GraphemeNormMode::GlyphSplit => {
            for part in state.parts() {
                if !part.is_empty() {
                    dest.push(part.clone());
                }
            }
        }
        GraphemeNormMode::IndividualUnicodes => {
            for &c in state.output() {
                dest.push(vec![c]);
            }
        }
    }
}
