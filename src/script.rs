use fxhash::FxHashMap;
use unicode_script::{Script, UnicodeScript};

/// The virama scripts this validator knows, plus `None` for everything else.
///
/// Every tag except Myanmar corresponds to one contiguous 128-code-point
/// block; Myanmar is scattered across several blocks and is attributed by
/// Unicode script metadata instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViramaScript {
    None,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Myanmar,
    Khmer,
    Javanese,
}

impl ViramaScript {
    /// All virama tags, in a fixed order used for deterministic tie-breaks.
    pub const ALL: [ViramaScript; 13] = [
        ViramaScript::Devanagari,
        ViramaScript::Bengali,
        ViramaScript::Gurmukhi,
        ViramaScript::Gujarati,
        ViramaScript::Oriya,
        ViramaScript::Tamil,
        ViramaScript::Telugu,
        ViramaScript::Kannada,
        ViramaScript::Malayalam,
        ViramaScript::Sinhala,
        ViramaScript::Myanmar,
        ViramaScript::Khmer,
        ViramaScript::Javanese,
    ];

    /// First code point of the script's block, where one exists.
    pub fn block_start(self) -> Option<u32> {
        match self {
            ViramaScript::Devanagari => Some(0x0900),
            ViramaScript::Bengali => Some(0x0980),
            ViramaScript::Gurmukhi => Some(0x0A00),
            ViramaScript::Gujarati => Some(0x0A80),
            ViramaScript::Oriya => Some(0x0B00),
            ViramaScript::Tamil => Some(0x0B80),
            ViramaScript::Telugu => Some(0x0C00),
            ViramaScript::Kannada => Some(0x0C80),
            ViramaScript::Malayalam => Some(0x0D00),
            ViramaScript::Sinhala => Some(0x0D80),
            ViramaScript::Khmer => Some(0x1780),
            ViramaScript::Javanese => Some(0xA980),
            ViramaScript::Myanmar | ViramaScript::None => None,
        }
    }

    /// Returns `true` for the scripts whose conjuncts render as subscripts,
    /// which changes how virama+consonant pairs group into sub-parts.
    pub fn is_subscript_script(self) -> bool {
        matches!(
            self,
            ViramaScript::Telugu | ViramaScript::Kannada | ViramaScript::Javanese
        )
    }

    /// Attributes a single code point to a virama script, or `None`.
    pub fn of_char(c: char) -> ViramaScript {
        if c.script() == Script::Myanmar {
            return ViramaScript::Myanmar;
        }
        match (c as u32) & !0x7F {
            0x0900 => ViramaScript::Devanagari,
            0x0980 => ViramaScript::Bengali,
            0x0A00 => ViramaScript::Gurmukhi,
            0x0A80 => ViramaScript::Gujarati,
            0x0B00 => ViramaScript::Oriya,
            0x0B80 => ViramaScript::Tamil,
            0x0C00 => ViramaScript::Telugu,
            0x0C80 => ViramaScript::Kannada,
            0x0D00 => ViramaScript::Malayalam,
            0x0D80 => ViramaScript::Sinhala,
            0x1780 => ViramaScript::Khmer,
            0xA980 => ViramaScript::Javanese,
            _ => ViramaScript::None,
        }
    }

    /// Histograms the buffer by script and returns the dominant virama
    /// script, or `None` if the buffer contains no virama-script code point.
    /// Ties resolve in `ALL` order.
    pub fn most_frequent(cps: &[char]) -> ViramaScript {
        let mut counts: FxHashMap<ViramaScript, usize> = FxHashMap::default();
        for &c in cps {
            let tag = Self::of_char(c);
            if tag != ViramaScript::None {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        let mut best = ViramaScript::None;
        let mut best_count = 0;
        for tag in Self::ALL {
            let count = counts.get(&tag).copied().unwrap_or(0);
            if count > best_count {
                best = tag;
                best_count = count;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_dominates_devanagari_text() {
        let cps = ['\u{0905}', '\u{0915}', '\u{0946}'];
        assert_eq!(ViramaScript::most_frequent(&cps), ViramaScript::Devanagari);
    }

    #[test]
    fn ascii_has_no_virama_script() {
        let cps = ['A', 'B'];
        assert_eq!(ViramaScript::most_frequent(&cps), ViramaScript::None);
    }

    #[test]
    fn myanmar_attributed_by_script_not_block() {
        // Extended-A code point, far from the 0x1000 block
        assert_eq!(ViramaScript::of_char('\u{AA61}'), ViramaScript::Myanmar);
        assert_eq!(ViramaScript::of_char('\u{1000}'), ViramaScript::Myanmar);
    }

    #[test]
    fn mixed_buffer_picks_majority() {
        let cps = ['\u{0C15}', '\u{0C16}', '\u{0915}'];
        assert_eq!(ViramaScript::most_frequent(&cps), ViramaScript::Telugu);
    }
}
