//! Property tests for text normalization and prediction invariants

mod common;

use hoaxcheck_classifiers::artifact::{parse_model, parse_vectorizer};
use hoaxcheck_classifiers::{normalize, Classifier, ClassifierBundle};
use hoaxcheck_core::Domain;
use proptest::prelude::*;
use regex::Regex;

/// Text shaped like social-media posts: words, URLs, mentions, digits, punctuation
fn post_like() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z]{1,10}",
        "https?://[a-z]{1,8}\\.[a-z]{2,3}(/[a-z0-9]{0,6})?",
        "www\\.[a-z]{1,8}\\.id",
        "[@#][a-zA-Z0-9_]{1,8}",
        "[0-9]{1,6}",
        "[!-/:-@\\[-`{-~]{1,4}",
        "[ \t\n]{1,3}",
        "[ÀÉÎÕÜàéîõüİẞ]{1,3}",
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

fn news_bundle() -> ClassifierBundle {
    let model = parse_model(&serde_json::to_vec(&common::news_model()).unwrap()).unwrap();
    let vectorizer =
        parse_vectorizer(&serde_json::to_vec(&common::news_vectorizer()).unwrap()).unwrap();
    ClassifierBundle::new(Domain::News, model, vectorizer).unwrap()
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_on_posts(text in post_like()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_punctuation_or_digits(text in post_like()) {
        let digit = Regex::new(r"\d").unwrap();
        let cleaned = normalize(&text);
        prop_assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()), "{:?}", cleaned);
        prop_assert!(!digit.is_match(&cleaned), "{:?}", cleaned);
    }

    #[test]
    fn normalized_whitespace_is_single_and_trimmed(text in any::<String>()) {
        let cleaned = normalize(&text);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!cleaned.contains("  "));
        prop_assert!(cleaned.chars().all(|c| c == ' ' || !c.is_whitespace()));
    }

    #[test]
    fn predictions_are_valid_distributions(text in post_like()) {
        let bundle = news_bundle();
        let prediction = bundle.predict(&normalize(&text));
        let probs = prediction.probabilities;

        prop_assert!((0.0..=1.0).contains(&probs.real));
        prop_assert!((0.0..=1.0).contains(&probs.hoax));
        prop_assert!((probs.real + probs.hoax - 1.0).abs() < 1e-9);
        prop_assert_eq!(prediction.class, probs.argmax());
    }
}

#[test]
fn url_fragments_joined_by_punctuation_are_still_removed() {
    for text in ["ht-tpfoo bar", "w.wwx bar", "h'ttp's://x.com bar"] {
        let once = normalize(text);
        assert_eq!(once, "bar", "input {text:?}");
        assert_eq!(normalize(&once), once);
    }
}
