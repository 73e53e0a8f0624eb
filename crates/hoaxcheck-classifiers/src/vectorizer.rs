//! Fitted text vectorizers (bag of words and TF-IDF)
//!
//! Inference-only: the vocabulary, IDF weights and tokenization settings all
//! come from a training run and never change afterwards. Terms outside the
//! vocabulary are silently dropped.

use hoaxcheck_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Default token pattern: runs of two or more word characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after TF-IDF weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Sparse feature row with strictly ascending column indices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    n_features: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Dimensionality of the space this row lives in
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Value at `index`, zero when absent
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Dot product with a dense weight row; weights beyond the row length count as zero
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|(i, v)| weights.get(*i).map(|w| w * v))
            .sum()
    }
}

/// IDF weighting parameters of a fitted TF-IDF vectorizer
#[derive(Debug, Clone)]
struct TfidfWeights {
    idf: Option<Vec<f64>>,
    norm: Option<Norm>,
    sublinear_tf: bool,
}

/// A fitted vectorizer mapping cleaned text to a sparse feature row
#[derive(Debug, Clone)]
pub struct TextVectorizer {
    vocabulary: HashMap<String, usize>,
    token_pattern: Regex,
    lowercase: bool,
    ngram_range: (usize, usize),
    stop_words: HashSet<String>,
    binary: bool,
    tfidf: Option<TfidfWeights>,
}

impl TextVectorizer {
    /// Raw term-count vectorizer over a fitted vocabulary
    pub fn count(vocabulary: HashMap<String, usize>) -> Result<Self> {
        let vectorizer = Self {
            vocabulary,
            token_pattern: compile_token_pattern(DEFAULT_TOKEN_PATTERN)?,
            lowercase: true,
            ngram_range: (1, 1),
            stop_words: HashSet::new(),
            binary: false,
            tfidf: None,
        };
        vectorizer.validate_vocabulary()?;
        Ok(vectorizer)
    }

    /// TF-IDF vectorizer with L2 normalization (the usual fitted defaults)
    pub fn tfidf(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self> {
        let mut vectorizer = Self::count(vocabulary)?;
        vectorizer.tfidf = Some(TfidfWeights {
            idf: None,
            norm: Some(Norm::L2),
            sublinear_tf: false,
        });
        vectorizer.with_idf(Some(idf))
    }

    pub fn with_token_pattern(mut self, pattern: &str) -> Result<Self> {
        self.token_pattern = compile_token_pattern(pattern)?;
        Ok(self)
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Result<Self> {
        if min_n == 0 || min_n > max_n {
            return Err(Error::classifier(format!(
                "invalid ngram_range ({min_n}, {max_n}): need 1 <= min_n <= max_n"
            )));
        }
        self.ngram_range = (min_n, max_n);
        Ok(self)
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Set the IDF vector, turning a count vectorizer into a TF-IDF one. `None` disables IDF.
    pub fn with_idf(mut self, idf: Option<Vec<f64>>) -> Result<Self> {
        if let Some(values) = &idf {
            if values.len() != self.n_features() {
                return Err(Error::classifier(format!(
                    "idf has {} entries but vocabulary has {} terms",
                    values.len(),
                    self.n_features()
                )));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(Error::classifier("idf contains non-finite values"));
            }
        }
        let weights = self.tfidf.get_or_insert(TfidfWeights {
            idf: None,
            norm: Some(Norm::L2),
            sublinear_tf: false,
        });
        weights.idf = idf;
        Ok(self)
    }

    pub fn with_norm(mut self, norm: Option<Norm>) -> Self {
        if let Some(weights) = self.tfidf.as_mut() {
            weights.norm = norm;
        }
        self
    }

    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        if let Some(weights) = self.tfidf.as_mut() {
            weights.sublinear_tf = sublinear_tf;
        }
        self
    }

    /// Number of columns (vocabulary size)
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_tfidf(&self) -> bool {
        self.tfidf.is_some()
    }

    /// Column of `term`, if it was seen during training
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Split text into tokens the way the vocabulary was built
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.token_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .collect()
    }

    /// Transform one document into a feature row
    pub fn transform(&self, text: &str) -> FeatureVector {
        let lowered;
        let text = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        let tokens = self.tokenize(text);
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                let column = if n == 1 {
                    self.vocabulary.get(window[0])
                } else {
                    self.vocabulary.get(&window.join(" "))
                };
                if let Some(&column) = column {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        if self.binary {
            entries.iter_mut().for_each(|(_, v)| *v = 1.0);
        }
        if let Some(weights) = &self.tfidf {
            apply_tfidf(&mut entries, weights);
        }

        FeatureVector {
            n_features: self.n_features(),
            entries,
        }
    }

    fn validate_vocabulary(&self) -> Result<()> {
        let n = self.vocabulary.len();
        let mut seen = vec![false; n];
        for (term, &column) in &self.vocabulary {
            match seen.get_mut(column) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(Error::classifier(format!(
                        "vocabulary column {column} is assigned twice (term '{term}')"
                    )))
                }
                None => {
                    return Err(Error::classifier(format!(
                        "vocabulary column {column} for term '{term}' is out of range 0..{n}"
                    )))
                }
            }
        }
        Ok(())
    }
}

fn apply_tfidf(entries: &mut [(usize, f64)], weights: &TfidfWeights) {
    for (column, value) in entries.iter_mut() {
        if weights.sublinear_tf {
            *value = 1.0 + value.ln();
        }
        if let Some(idf) = &weights.idf {
            *value *= idf.get(*column).copied().unwrap_or(0.0);
        }
    }

    let norm = match weights.norm {
        Some(Norm::L2) => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
        Some(Norm::L1) => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
        None => return,
    };
    if norm > 0.0 {
        entries.iter_mut().for_each(|(_, v)| *v /= norm);
    }
}

fn compile_token_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::classifier(format!("Failed to compile token pattern '{pattern}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> HashMap<String, usize> {
        terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect()
    }

    #[test]
    fn test_count_ignores_unseen_and_short_tokens() {
        let v = TextVectorizer::count(vocab(&["berita", "hoax", "vaksin"])).unwrap();
        let row = v.transform("berita hoax hoax a tidak dikenal");

        assert_eq!(row.n_features(), 3);
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![(0, 1.0), (1, 2.0)]);
        assert_eq!(row.get(2), 0.0);
    }

    #[test]
    fn test_completely_unseen_text_gives_empty_row() {
        let v = TextVectorizer::count(vocab(&["berita"])).unwrap();
        assert!(v.transform("kata asing semua").is_empty());
        assert!(v.transform("").is_empty());
    }

    #[test]
    fn test_bigrams_and_stop_words() {
        let v = TextVectorizer::count(vocab(&["vaksin", "berbahaya", "vaksin berbahaya"]))
            .unwrap()
            .with_ngram_range(1, 2)
            .unwrap()
            .with_stop_words(["sangat"]);

        // "sangat" is removed before n-grams are built
        let row = v.transform("vaksin sangat berbahaya");
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![(0, 1.0), (1, 1.0), (2, 1.0)]);
    }

    #[test]
    fn test_binary_clamps_counts() {
        let v = TextVectorizer::count(vocab(&["hoax"])).unwrap().with_binary(true);
        assert_eq!(v.transform("hoax hoax hoax").get(0), 1.0);
    }

    #[test]
    fn test_tfidf_l2_normalized() {
        let v = TextVectorizer::tfidf(vocab(&["berita", "palsu"]), vec![1.0, 2.0]).unwrap();
        let row = v.transform("berita palsu");

        // raw weights (1, 2) scaled to unit length
        let norm = 5f64.sqrt();
        assert!((row.get(0) - 1.0 / norm).abs() < 1e-12);
        assert!((row.get(1) - 2.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_tfidf_sublinear_without_norm() {
        let v = TextVectorizer::tfidf(vocab(&["viral"]), vec![3.0])
            .unwrap()
            .with_norm(None)
            .with_sublinear_tf(true);
        let row = v.transform("viral viral");
        assert!((row.get(0) - 3.0 * (1.0 + 2f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_idf_length_must_match_vocabulary() {
        let err = TextVectorizer::tfidf(vocab(&["a1", "b2"]), vec![1.0]).unwrap_err();
        assert!(err.to_string().contains("idf has 1 entries"));
    }

    #[test]
    fn test_vocabulary_must_be_dense() {
        let mut gappy = HashMap::new();
        gappy.insert("satu".to_string(), 0);
        gappy.insert("dua".to_string(), 2);
        assert!(TextVectorizer::count(gappy).is_err());

        let mut duplicated = HashMap::new();
        duplicated.insert("satu".to_string(), 0);
        duplicated.insert("dua".to_string(), 0);
        assert!(TextVectorizer::count(duplicated).is_err());
    }

    #[test]
    fn test_invalid_ngram_range_rejected() {
        let v = TextVectorizer::count(vocab(&["x1"])).unwrap();
        assert!(v.clone().with_ngram_range(0, 1).is_err());
        assert!(v.with_ngram_range(3, 2).is_err());
    }

    #[test]
    fn test_dot_product() {
        let v = TextVectorizer::count(vocab(&["aa", "bb", "cc"])).unwrap();
        let row = v.transform("aa cc cc");
        assert_eq!(row.dot(&[0.5, 10.0, 2.0]), 4.5);
    }
}
