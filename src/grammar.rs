use crate::classify::{classify, CharClass};
use crate::constants::*;
use crate::error::ValidatorError;
use crate::script::ViramaScript;

/// Shared working state for one grammar pass over one buffer.
///
/// All grammars are free functions over this struct, dispatched by script
/// tag. The cursor only advances; accepted code points are copied to
/// `output` and grouped into `parts` (the glyph-like sub-part boundaries),
/// and `unit_ends` records how many parts each consumed unit produced.
pub struct GrammarState {
    pub script: ViramaScript,
    pub report_errors: bool,
    codes: Vec<(CharClass, char)>,
    used: usize,
    output: Vec<char>,
    output_used: usize,
    parts: Vec<Vec<char>>,
    unit_ends: Vec<usize>,
}

impl GrammarState {
    /// Classifies the source buffer and strips isolated joiners from the
    /// edges; a dangling ZWJ/ZWNJ carries no information on its own.
    pub fn new(script: ViramaScript, report_errors: bool, src: &[char]) -> Self {
        let mut codes: Vec<(CharClass, char)> =
            src.iter().map(|&c| (classify(script, c), c)).collect();
        while matches!(codes.first(), Some((CharClass::Joiner | CharClass::NonJoiner, _))) {
            codes.remove(0);
        }
        // A trailing joiner is isolated only when nothing links to it; after
        // a virama it is a legitimate explicit/conjunct-request form.
        while matches!(codes.last(), Some((CharClass::Joiner | CharClass::NonJoiner, _))) {
            let partnered = codes.len() >= 2 && has_grapheme_link(codes[codes.len() - 2].1);
            if partnered {
                break;
            }
            codes.pop();
        }
        GrammarState {
            script,
            report_errors,
            codes,
            used: 0,
            output: Vec::with_capacity(codes_capacity(src.len())),
            output_used: 0,
            parts: Vec::new(),
            unit_ends: Vec::new(),
        }
    }

    #[inline]
    pub fn exhausted(&self) -> bool {
        self.used >= self.codes.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<(CharClass, char)> {
        self.codes.get(self.used).copied()
    }

    /// Lookahead `k` positions past the cursor.
    #[inline]
    pub fn peek_at(&self, k: usize) -> Option<(CharClass, char)> {
        self.codes.get(self.used + k).copied()
    }

    /// Accepts the current code point into the output and advances.
    #[inline]
    pub fn take(&mut self) {
        if let Some(&(_, c)) = self.codes.get(self.used) {
            self.output.push(c);
            self.used += 1;
        }
    }

    /// Advances past the current code point without copying it.
    #[inline]
    pub fn skip(&mut self) {
        self.used += 1;
    }

    /// Inserts a normalization marker that was not present in the input.
    #[inline]
    pub fn emit(&mut self, c: char) {
        self.output.push(c);
    }

    /// Output code points accepted but not yet grouped into a sub-part.
    #[inline]
    pub fn pending(&self) -> usize {
        self.output.len() - self.output_used
    }

    /// The most recent code point accepted into the output, across unit
    /// boundaries.
    #[inline]
    pub fn last_accepted(&self) -> Option<char> {
        self.output.last().copied()
    }

    /// Groups all pending output into one sub-part. No-op when empty.
    pub fn close_pending(&mut self) {
        if self.output_used < self.output.len() {
            self.parts.push(self.output[self.output_used..].to_vec());
            self.output_used = self.output.len();
        }
    }

    /// Groups each pending output code point as its own sub-part.
    pub fn close_pending_each(&mut self) {
        while self.output_used < self.output.len() {
            self.parts.push(vec![self.output[self.output_used]]);
            self.output_used += 1;
        }
    }

    /// Appends all pending output to the most recent sub-part. Called by
    /// half-form scripts to glue a linking virama onto its consonant; a
    /// grammar that gets here without a previous part is inconsistent.
    pub fn merge_pending_into_last(&mut self) -> Result<(), ValidatorError> {
        if self.pending() == 0 {
            return Ok(());
        }
        let at = self.output_used;
        match self.parts.last_mut() {
            Some(last) => {
                last.extend_from_slice(&self.output[self.output_used..]);
                self.output_used = self.output.len();
                Ok(())
            }
            None => Err(ValidatorError::InvariantViolation {
                at,
                what: "merge into sub-part before any sub-part was closed",
            }),
        }
    }

    /// Marks the end of one consumed unit. Pending output that a grammar
    /// failed to group is closed as single-code-point parts, which is also
    /// how failed units keep their partial progress.
    pub fn end_unit(&mut self) {
        self.close_pending_each();
        let prev = self.unit_ends.last().copied().unwrap_or(0);
        if self.parts.len() > prev {
            self.unit_ends.push(self.parts.len());
        }
    }

    /// Skip-one recovery: keep whatever the failed unit accepted, drop the
    /// offending code point, and continue from the next one.
    pub fn recover(&mut self) {
        if self.report_errors {
            if let Some((cc, c)) = self.peek() {
                log::info!(
                    "{:?} grammar rejected U+{:04X} ({:?}) at position {}",
                    self.script,
                    c as u32,
                    cc,
                    self.used
                );
            }
        }
        self.end_unit();
        self.skip();
    }

    pub fn output(&self) -> &[char] {
        &self.output
    }

    pub fn parts(&self) -> &[Vec<char>] {
        &self.parts
    }

    /// Iterates the part ranges of each consumed unit.
    pub fn units(&self) -> impl Iterator<Item = &[Vec<char>]> + '_ {
        let ends = &self.unit_ends;
        let parts = &self.parts;
        ends.iter().enumerate().map(move |(i, &end)| {
            let start = if i == 0 { 0 } else { ends[i - 1] };
            &parts[start..end]
        })
    }
}

#[inline]
fn codes_capacity(n: usize) -> usize {
    // Room for the occasional inserted ZWNJ without reallocating.
    n + n / 8 + 1
}

/// True for the classes the generic grammar lets extend a grapheme.
#[inline]
pub fn extends_grapheme(cc: CharClass) -> bool {
    matches!(
        cc,
        CharClass::Combiner
            | CharClass::VedicMark
            | CharClass::Virama
            | CharClass::Joiner
            | CharClass::NonJoiner
    )
}

/// Classes that never begin a unit in any script grammar.
#[inline]
pub fn is_dependent_class(cc: CharClass) -> bool {
    matches!(
        cc,
        CharClass::Matra
            | CharClass::MatraPiece
            | CharClass::VowelModifier
            | CharClass::Nukta
            | CharClass::Robat
            | CharClass::Virama
            | CharClass::Combiner
    )
}

/// Shared tail: one `Other`-class or whitespace code point is its own unit.
/// Digits, punctuation and foreign letters flow through every script grammar
/// this way.
pub fn consume_opaque(state: &mut GrammarState) -> bool {
    match state.peek() {
        Some((CharClass::Other | CharClass::Whitespace, _)) => {
            state.take();
            state.close_pending();
            true
        }
        _ => false,
    }
}

/// Isolated joiners inside a buffer are consumed silently; they carry no
/// rendering information without a grammatical partner.
pub fn consume_stray_joiner(state: &mut GrammarState) -> bool {
    match state.peek() {
        Some((CharClass::Joiner | CharClass::NonJoiner, _)) => {
            state.skip();
            true
        }
        _ => false,
    }
}

/// The explicit-virama endgame shared by the Indic-family grammars: the
/// virama has been classified, and either an explicit ZWNJ follows in the
/// input or one is inserted so downstream stages always see the canonical
/// explicit form.
pub fn finish_explicit_virama(state: &mut GrammarState) -> Result<(), ValidatorError> {
    state.take(); // the virama
    if let Some((CharClass::NonJoiner, _)) = state.peek() {
        state.take();
    } else {
        state.emit(ZERO_WIDTH_NON_JOINER);
    }
    if state.script.is_subscript_script() {
        state.close_pending();
    } else {
        state.merge_pending_into_last()?;
    }
    Ok(())
}
