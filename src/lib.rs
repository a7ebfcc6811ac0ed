//! Script-aware validation and segmentation of OCR ground-truth text.
//!
//! The crate checks a line of text against the orthographic grammar of its
//! dominant script (the Brahmi-derived virama scripts each get their own
//! grammar, everything else falls back to a generic combining-mark one) and
//! re-emits the text segmented at a caller-chosen granularity: whole string,
//! syllables, glyph-like sub-parts, or single code points.

pub mod classify;
pub mod constants;
pub mod error;
pub mod generic;
pub mod grammar;
pub mod indic;
pub mod javanese;
pub mod khmer;
pub mod myanmar;
pub mod script;
pub mod validator;

pub use error::ValidatorError;
pub use script::ViramaScript;
pub use validator::{validate_and_segment, validate_str, GraphemeNormMode, Validation};
