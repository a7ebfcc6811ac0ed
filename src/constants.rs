
// Zero-width joiner controls
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

// Myanmar kinzi prefix: NGA + ASAT + VIRAMA, rendered above the next base
pub const KINZI: [char; 3] = ['\u{1004}', '\u{103A}', '\u{1039}'];

// Khmer coeng (subscript-consonant request) and robat (superscript ra)
pub const KHMER_COENG: char = '\u{17D2}';
pub const KHMER_ROBAT: char = '\u{17CC}';

// Javanese medial consonants (pengkal, cakra)
pub const JAVANESE_PENGKAL: char = '\u{A9BE}';
pub const JAVANESE_CAKRA: char = '\u{A9BF}';

// Malayalam anusvara, the only vowel modifier any Indic script lets repeat
pub const MALAYALAM_ANUSVARA: char = '\u{0D02}';

/// Vedic accents and cantillation marks shared across the Indic scripts.
#[inline]
pub fn is_vedic_accent(c: char) -> bool {
    let code = c as u32;
    (code >= 0x0951 && code <= 0x0954)
        || (code >= 0x1CD0 && code <= 0x1CFF)
        || (code >= 0xA8E0 && code <= 0xA8F7)
}

/// Unicode Grapheme_Link: viramas and their equivalents across scripts.
/// Mirrored here so the generic grammar needs no ICU-sized oracle.
#[inline]
pub fn has_grapheme_link(c: char) -> bool {
    matches!(
        c as u32,
        0x094D            // Devanagari
        | 0x09CD          // Bengali
        | 0x0A4D          // Gurmukhi
        | 0x0ACD          // Gujarati
        | 0x0B4D          // Oriya
        | 0x0BCD          // Tamil
        | 0x0C4D          // Telugu
        | 0x0CCD          // Kannada
        | 0x0D3B | 0x0D3C // Malayalam vertical/circular virama
        | 0x0D4D          // Malayalam
        | 0x0DCA          // Sinhala al-lakuna
        | 0x0E3A          // Thai phinthu
        | 0x0F84          // Tibetan halanta
        | 0x1039 | 0x103A // Myanmar virama, asat
        | 0x1714          // Tagalog
        | 0x1734          // Hanunoo
        | 0x17D2          // Khmer coeng
        | 0x1A60          // Tai Tham sakot
        | 0x1B44          // Balinese adeg adeg
        | 0x1BAA | 0x1BAB // Sundanese pamaaeh, virama
        | 0x1BF2 | 0x1BF3 // Batak pangolat, panongonan
        | 0x2D7F          // Tifinagh consonant joiner
        | 0xA806          // Syloti Nagri hasanta
        | 0xA8C4          // Saurashtra virama
        | 0xA953          // Rejang virama
        | 0xA9C0          // Javanese pangkon
        | 0xAAF6          // Meetei Mayek virama
        | 0xABED          // Meetei Mayek apun iyek
    )
}

// Thai, for the generic-grammar adjacency checks

#[inline]
pub fn is_thai_consonant(c: char) -> bool {
    let code = c as u32;
    code >= 0x0E01 && code <= 0x0E2E
}

#[inline]
pub fn is_thai_tone_mark(c: char) -> bool {
    let code = c as u32;
    code >= 0x0E48 && code <= 0x0E4C
}

/// Above/below dependent vowels; they attach directly to a consonant.
#[inline]
pub fn is_thai_attached_vowel(c: char) -> bool {
    let code = c as u32;
    code == 0x0E31 || (code >= 0x0E34 && code <= 0x0E3A)
}

// Myanmar. The script is scattered over three blocks (base, Extended-A,
// Extended-B), so membership is by predicate rather than block offset.

#[inline]
pub fn is_myanmar_consonant(c: char) -> bool {
    let code = c as u32;
    (code >= 0x1000 && code <= 0x1020)
        || code == 0x103F
        || (code >= 0x1050 && code <= 0x1051)
        || (code >= 0x105A && code <= 0x105D)
        || code == 0x1061
        || (code >= 0x1065 && code <= 0x1066)
        || (code >= 0x106E && code <= 0x1070)
        || (code >= 0x1075 && code <= 0x1081)
        || code == 0x108E
        || (code >= 0xA9E0 && code <= 0xA9E4)
        || (code >= 0xA9E7 && code <= 0xA9EF)
        || (code >= 0xA9FA && code <= 0xA9FE)
        || (code >= 0xAA60 && code <= 0xAA6F)
        || (code >= 0xAA71 && code <= 0xAA76)
        || code == 0xAA7A
        || (code >= 0xAA7E && code <= 0xAA7F)
}

#[inline]
pub fn is_myanmar_independent_vowel(c: char) -> bool {
    let code = c as u32;
    (code >= 0x1021 && code <= 0x102A) || (code >= 0x1052 && code <= 0x1055)
}

/// A letter that can serve as a syllable base or a stacked subscript.
#[inline]
pub fn is_myanmar_letter(c: char) -> bool {
    is_myanmar_consonant(c) || is_myanmar_independent_vowel(c)
}

#[inline]
pub fn is_myanmar_medial(c: char) -> bool {
    let code = c as u32;
    (code >= 0x103B && code <= 0x103E) || (code >= 0x105E && code <= 0x1060) || code == 0x1082
}

#[inline]
pub fn is_myanmar_vowel_sign(c: char) -> bool {
    let code = c as u32;
    (code >= 0x102B && code <= 0x1035)
        || (code >= 0x1056 && code <= 0x1059)
        || (code >= 0x1062 && code <= 0x1064)
        || (code >= 0x1067 && code <= 0x106D)
        || (code >= 0x1071 && code <= 0x1074)
        || (code >= 0x1083 && code <= 0x108D)
        || code == 0x108F
        || (code >= 0x109A && code <= 0x109D)
        || code == 0xA9E5
        || (code >= 0xAA7B && code <= 0xAA7D)
}

/// Asat and the tone/final signs that ride in a syllable tail.
#[inline]
pub fn is_myanmar_tail_sign(c: char) -> bool {
    let code = c as u32;
    code == 0x103A || (code >= 0x1036 && code <= 0x1038) || is_myanmar_vowel_sign(c)
}

/// Legacy mis-encodings: an independent vowel carrying a dependent sign for
/// a sound the letter already contains. Checked against the immediately
/// preceding accepted code point.
#[inline]
pub fn is_badly_formed_indic_vowel(prev: char, c: char) -> bool {
    let (p, n) = (prev as u32, c as u32);
    matches!(
        (p, n),
        (0x0905, 0x093E) | (0x0905, 0x0945) | (0x0905, 0x0946) | (0x0906, 0x0945) | (0x0909, 0x0941)
    ) || (p == 0x0905 && (0x0949..=0x094C).contains(&n))
        || (p == 0x090F && (0x0945..=0x0947).contains(&n))
}

/// Thai dependent signs that demand a particular predecessor.
#[inline]
pub fn is_badly_formed_thai(prev: char, c: char) -> bool {
    // Tone marks ride on a consonant or an attached vowel.
    if is_thai_tone_mark(c) && !(is_thai_consonant(prev) || is_thai_attached_vowel(prev)) {
        return true;
    }
    // Sara am follows a consonant or a tone mark.
    if c == '\u{0E33}' && !(is_thai_consonant(prev) || is_thai_tone_mark(prev)) {
        return true;
    }
    // Attached vowels sit directly on a consonant.
    if is_thai_attached_vowel(c) && !is_thai_consonant(prev) {
        return true;
    }
    false
}
