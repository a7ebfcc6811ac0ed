use unicode_general_category::{get_general_category, GeneralCategory};

use crate::constants::*;
use crate::script::ViramaScript;

/// Grammatical role of a single code point within its script.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharClass {
    Consonant,
    Vowel,
    Virama,
    Matra,
    MatraPiece,
    VowelModifier,
    Nukta,
    Robat,
    VedicMark,
    Joiner,
    NonJoiner,
    Whitespace,
    Combiner,
    Other,
}

/// Classifies one code point for the given script. Pure function; the
/// orchestrator assigns classes once per buffer before consumption starts.
pub fn classify(script: ViramaScript, c: char) -> CharClass {
    match c {
        ZERO_WIDTH_JOINER => return CharClass::Joiner,
        ZERO_WIDTH_NON_JOINER => return CharClass::NonJoiner,
        _ => {}
    }
    if c.is_whitespace() {
        return CharClass::Whitespace;
    }
    if is_vedic_accent(c) {
        return CharClass::VedicMark;
    }
    match script {
        ViramaScript::None => classify_generic(c),
        ViramaScript::Myanmar => classify_myanmar(c),
        ViramaScript::Khmer => classify_khmer(c),
        ViramaScript::Javanese => classify_javanese(c),
        ViramaScript::Sinhala => classify_sinhala(c),
        _ => {
            // Off-layout letters in otherwise regular blocks.
            match c as u32 {
                0x09CE => return CharClass::Consonant, // Bengali khanda ta
                0x0A70 | 0x0A71 => return CharClass::VowelModifier, // Gurmukhi tippi, addak
                _ => {}
            }
            // The nine ISCII-derived blocks share one layout.
            match script.block_start() {
                Some(base) => classify_indic(base, c),
                None => CharClass::Other,
            }
        }
    }
}

/// Classifier for the generic grammar: the Unicode category oracle decides
/// what combines, and grapheme-link characters act as forward combiners.
fn classify_generic(c: char) -> CharClass {
    if has_grapheme_link(c) {
        return CharClass::Virama;
    }
    // Sara am is category Lo but behaves as a dependent sign; the Thai
    // adjacency table has to see it next to its base.
    if c == '\u{0E33}' {
        return CharClass::Combiner;
    }
    match get_general_category(c) {
        GeneralCategory::NonspacingMark
        | GeneralCategory::SpacingMark
        | GeneralCategory::EnclosingMark => CharClass::Combiner,
        _ => CharClass::Other,
    }
}

/// Shared layout of the ISCII-derived blocks, as an offset from the block
/// start. Script-specific gaps (e.g. Tamil's missing nukta) fall out as
/// unassigned code points and classify the same way malformed input does.
fn classify_indic(base: u32, c: char) -> CharClass {
    let code = c as u32;
    if code < base || code >= base + 0x80 {
        return CharClass::Other;
    }
    match code - base {
        0x00..=0x03 => CharClass::VowelModifier,
        0x04..=0x14 => CharClass::Vowel,
        0x15..=0x39 => CharClass::Consonant,
        0x3A..=0x3B => CharClass::Matra,
        0x3C => CharClass::Nukta,
        0x3D => CharClass::Vowel, // avagraha
        0x3E..=0x4C => CharClass::Matra,
        0x4D => CharClass::Virama,
        0x4E..=0x4F => CharClass::Matra,
        0x50 => CharClass::Vowel, // om
        0x51..=0x54 => CharClass::VedicMark,
        0x55..=0x57 => CharClass::MatraPiece, // length marks
        0x58..=0x5F => CharClass::Consonant,  // nukta consonants
        0x60..=0x61 => CharClass::Vowel,      // vocalic rr/ll
        0x62..=0x63 => CharClass::Matra,
        0x79..=0x7F => CharClass::Consonant, // block-specific additions
        _ => CharClass::Other,
    }
}

/// Sinhala does not follow the ISCII layout.
fn classify_sinhala(c: char) -> CharClass {
    let code = c as u32;
    if code < 0x0D80 || code > 0x0DFF {
        return CharClass::Other;
    }
    match code - 0x0D80 {
        0x02..=0x03 => CharClass::VowelModifier, // anusvara, visarga
        0x05..=0x16 => CharClass::Vowel,
        0x1A..=0x46 => CharClass::Consonant,
        0x4A => CharClass::Virama, // al-lakuna
        0x4F..=0x5F => CharClass::Matra,
        0x72..=0x73 => CharClass::Matra, // gaetta-pilla, gayanukitta
        _ => CharClass::Other,
    }
}

fn classify_khmer(c: char) -> CharClass {
    if c == KHMER_COENG {
        return CharClass::Virama;
    }
    if c == KHMER_ROBAT {
        return CharClass::Robat;
    }
    match c as u32 {
        0x1780..=0x17A2 => CharClass::Consonant,
        0x17A3..=0x17B3 => CharClass::Vowel,
        0x17B6..=0x17C5 => CharClass::Matra,
        0x17C6..=0x17C8 => CharClass::VowelModifier, // nikahit, reahmuk, yuukaleapintu
        0x17C9..=0x17CA => CharClass::Nukta,         // consonant shifters
        0x17CB | 0x17CD..=0x17D1 | 0x17D3 | 0x17DD => CharClass::VowelModifier,
        _ => CharClass::Other,
    }
}

fn classify_myanmar(c: char) -> CharClass {
    let code = c as u32;
    if code == 0x1039 {
        return CharClass::Virama;
    }
    if is_myanmar_consonant(c) {
        return CharClass::Consonant;
    }
    if is_myanmar_independent_vowel(c) {
        return CharClass::Vowel;
    }
    if is_myanmar_medial(c) {
        return CharClass::Combiner;
    }
    if is_myanmar_vowel_sign(c) {
        return CharClass::Matra;
    }
    if is_myanmar_tail_sign(c) {
        // asat and the tone marks
        return CharClass::VowelModifier;
    }
    CharClass::Other
}

fn classify_javanese(c: char) -> CharClass {
    let code = c as u32;
    match code {
        0xA980..=0xA983 => CharClass::VowelModifier, // panyangga, cecak, layar, wignyan
        0xA984..=0xA98E => CharClass::Vowel,
        0xA98F..=0xA9B2 => CharClass::Consonant,
        0xA9B3 => CharClass::Nukta, // cecak telu
        0xA9B4 => CharClass::MatraPiece, // tarung
        0xA9B5..=0xA9BD => CharClass::Matra,
        0xA9BE..=0xA9BF => CharClass::Combiner, // pengkal, cakra
        0xA9C0 => CharClass::Virama,            // pangkon
        _ => CharClass::Other,
    }
}
