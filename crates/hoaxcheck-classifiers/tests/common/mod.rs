//! Shared fixtures: small but realistic exported artifacts

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::Path;

pub const ARTIFACT_FILES: [&str; 4] = [
    "model_berita.json",
    "vectorizer_berita.json",
    "model_sosmed.json",
    "vectorizer_sosmed.json",
];

pub fn news_vectorizer() -> Value {
    json!({
        "format_version": 1,
        "kind": "tfidf",
        "vocabulary": {
            "pemerintah": 0,
            "resmi": 1,
            "menurut": 2,
            "viral": 3,
            "sebarkan": 4,
            "heboh": 5
        },
        "idf": [1.2, 1.5, 1.1, 1.8, 2.0, 1.7],
        "norm": "l2",
        "sublinear_tf": true
    })
}

pub fn news_model() -> Value {
    json!({
        "format_version": 1,
        "kind": "multinomial_nb",
        "classes": [0, 1],
        "class_log_prior": [-0.6931471805599453, -0.6931471805599453],
        "feature_log_prob": [
            [-1.20, -1.30, -1.40, -2.90, -3.10, -3.00],
            [-3.00, -3.20, -2.80, -1.30, -1.10, -1.25]
        ],
        "alpha": 1.0
    })
}

pub fn social_vectorizer() -> Value {
    json!({
        "format_version": 1,
        "kind": "count",
        "vocabulary": {
            "info": 0,
            "grup": 1,
            "sebelah": 2,
            "info grup": 3,
            "klarifikasi": 4
        },
        "ngram_range": [1, 2]
    })
}

pub fn social_model() -> Value {
    json!({
        "format_version": 1,
        "kind": "multinomial_nb",
        "classes": [1, 0],
        "class_log_prior": [-0.5108256237659907, -0.916290731874155],
        "feature_log_prob": [
            [-1.6, -1.5, -1.4, -1.3, -3.0],
            [-2.0, -2.4, -2.6, -3.0, -0.8]
        ]
    })
}

pub fn write(dir: &Path, file: &str, value: &Value) {
    std::fs::write(dir.join(file), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Write all four artifacts with the conventional file names
pub fn write_all(dir: &Path) {
    write(dir, "model_berita.json", &news_model());
    write(dir, "vectorizer_berita.json", &news_vectorizer());
    write(dir, "model_sosmed.json", &social_model());
    write(dir, "vectorizer_sosmed.json", &social_vectorizer());
}
