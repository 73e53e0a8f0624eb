//! Text normalization applied before vectorization
//!
//! The pipeline mirrors the preprocessing the models were trained with:
//!
//! 1. lowercase
//! 2. URLs (`http…`, `www…`), `@mentions` and `#hashtags` become a space
//! 3. ASCII punctuation is deleted
//! 4. digit runs become a space
//! 5. whitespace runs collapse to one space, ends trimmed
//!
//! Step 3 can glue fragments into a fresh URL-like token (`ht.tpx` -> `httpx`),
//! so the steps are repeated until the text stops changing. The output is
//! therefore always a fixed point: `normalize(normalize(t)) == normalize(t)`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref URL_MENTION_HASHTAG_RE: Regex =
        Regex::new(r"http\S+|www\S+|@\w+|#\w+").expect("url/mention/hashtag pattern is valid");
    static ref DIGITS_RE: Regex = Regex::new(r"\d+").expect("digit pattern is valid");
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

/// One step of the normalization pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationStep {
    Lowercase,
    StripUrlsMentionsHashtags,
    StripPunctuation,
    StripDigits,
    CollapseWhitespace,
}

/// Normalized text plus a record of which steps altered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationTrace {
    /// The cleaned text
    pub output: String,

    /// Steps that changed the text in at least one pass, in pipeline order
    pub changed_steps: Vec<NormalizationStep>,

    /// Number of passes until the text reached a fixed point
    pub passes: usize,
}

/// Normalize raw user text into the form the vectorizers were fitted on.
///
/// Total over any input; the empty string maps to the empty string.
pub fn normalize(text: &str) -> String {
    normalize_with_trace(text).output
}

/// Same as [`normalize`], also reporting which steps fired
pub fn normalize_with_trace(text: &str) -> NormalizationTrace {
    let mut changed_steps = Vec::new();
    let mut current = single_pass(text, &mut changed_steps);
    let mut passes = 1;

    // After the first pass every further pass only deletes characters.
    loop {
        let next = single_pass(&current, &mut changed_steps);
        if next == current {
            break;
        }
        current = next;
        passes += 1;
    }

    changed_steps.sort_by_key(|step| *step as u8);
    NormalizationTrace {
        output: current,
        changed_steps,
        passes,
    }
}

fn single_pass(text: &str, changed: &mut Vec<NormalizationStep>) -> String {
    let lowered = text.to_lowercase();
    note(changed, NormalizationStep::Lowercase, text, &lowered);

    let stripped = URL_MENTION_HASHTAG_RE.replace_all(&lowered, " ");
    note(
        changed,
        NormalizationStep::StripUrlsMentionsHashtags,
        &lowered,
        &stripped,
    );

    let no_punct: String = stripped
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    note(changed, NormalizationStep::StripPunctuation, &stripped, &no_punct);

    let no_digits = DIGITS_RE.replace_all(&no_punct, " ");
    note(changed, NormalizationStep::StripDigits, &no_punct, &no_digits);

    let collapsed = WHITESPACE_RE.replace_all(&no_digits, " ");
    let trimmed = collapsed.trim();
    note(
        changed,
        NormalizationStep::CollapseWhitespace,
        &no_digits,
        trimmed,
    );

    trimmed.to_string()
}

fn note(changed: &mut Vec<NormalizationStep>, step: NormalizationStep, before: &str, after: &str) {
    if before != after && !changed.contains(&step) {
        changed.push(step);
    }
}
