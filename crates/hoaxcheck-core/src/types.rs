//! Core types for hoaxcheck

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text domain served by one classifier bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Long-form news articles ("berita")
    #[serde(rename = "berita", alias = "news")]
    News,

    /// Short social-media posts: captions, tweets, broadcast messages ("sosmed")
    #[serde(rename = "sosmed", alias = "social", alias = "social-media")]
    Social,
}

impl Domain {
    /// All domains, in display order
    pub const ALL: [Domain; 2] = [Domain::News, Domain::Social];

    /// Wire name, also used as the artifact file stem suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "berita",
            Self::Social => "sosmed",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "berita" | "news" => Ok(Self::News),
            "sosmed" | "social" | "social-media" => Ok(Self::Social),
            other => Err(format!(
                "unknown domain '{other}' (expected 'berita' or 'sosmed')"
            )),
        }
    }
}

/// Binary label produced by the classifiers.
///
/// Encoded as an integer in the model artifacts: `0` is real, `1` is hoax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PredictedClass {
    Real = 0,
    Hoax = 1,
}

impl PredictedClass {
    /// Map an encoded class label to a class
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Self::Real),
            1 => Some(Self::Hoax),
            _ => None,
        }
    }

    /// Column index of this class in a probability distribution
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Hoax => "HOAX",
        }
    }
}

impl fmt::Display for PredictedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Probability of each class, indexed by [`PredictedClass::index`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    pub real: f64,
    pub hoax: f64,
}

impl ProbabilityDistribution {
    pub fn new(real: f64, hoax: f64) -> Self {
        Self { real, hoax }
    }

    /// Build a distribution from per-class joint log-likelihoods (log-sum-exp normalized)
    pub fn from_log_likelihoods(jll: [f64; 2]) -> Self {
        let max = jll[0].max(jll[1]);
        let log_norm = max + ((jll[0] - max).exp() + (jll[1] - max).exp()).ln();
        Self {
            real: (jll[0] - log_norm).exp(),
            hoax: (jll[1] - log_norm).exp(),
        }
    }

    /// Probability assigned to `class`
    pub fn get(&self, class: PredictedClass) -> f64 {
        match class {
            PredictedClass::Real => self.real,
            PredictedClass::Hoax => self.hoax,
        }
    }

    /// Class of maximum probability; exact ties go to [`PredictedClass::Real`]
    pub fn argmax(&self) -> PredictedClass {
        if self.hoax > self.real {
            PredictedClass::Hoax
        } else {
            PredictedClass::Real
        }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.real, self.hoax]
    }
}

/// Outcome of one prediction: the class and the full distribution it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: PredictedClass,
    pub probabilities: ProbabilityDistribution,
}

impl Prediction {
    /// Derive the predicted class from a distribution, so the two can never disagree
    pub fn from_distribution(probabilities: ProbabilityDistribution) -> Self {
        Self {
            class: probabilities.argmax(),
            probabilities,
        }
    }

    /// Probability the classifier assigns to its own predicted class
    pub fn confidence(&self) -> f64 {
        self.probabilities.get(self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parsing_accepts_aliases() {
        assert_eq!("berita".parse::<Domain>().unwrap(), Domain::News);
        assert_eq!("News".parse::<Domain>().unwrap(), Domain::News);
        assert_eq!("sosmed".parse::<Domain>().unwrap(), Domain::Social);
        assert_eq!("social-media".parse::<Domain>().unwrap(), Domain::Social);
        assert!("forum".parse::<Domain>().is_err());
    }

    #[test]
    fn test_domain_serde_names() {
        assert_eq!(serde_json::to_string(&Domain::News).unwrap(), "\"berita\"");
        let social: Domain = serde_json::from_str("\"social\"").unwrap();
        assert_eq!(social, Domain::Social);
    }

    #[test]
    fn test_class_labels() {
        assert_eq!(PredictedClass::from_label(0), Some(PredictedClass::Real));
        assert_eq!(PredictedClass::from_label(1), Some(PredictedClass::Hoax));
        assert_eq!(PredictedClass::from_label(2), None);
        assert_eq!(PredictedClass::Hoax.index(), 1);
        assert_eq!(PredictedClass::Real.to_string(), "REAL");
    }

    #[test]
    fn test_argmax_tie_favors_real() {
        let probs = ProbabilityDistribution::new(0.5, 0.5);
        assert_eq!(probs.argmax(), PredictedClass::Real);
    }

    #[test]
    fn test_from_log_likelihoods_normalizes() {
        let probs = ProbabilityDistribution::from_log_likelihoods([-1000.0, -1001.0]);
        assert!((probs.real + probs.hoax - 1.0).abs() < 1e-12);
        assert!(probs.real > probs.hoax);

        let even = ProbabilityDistribution::from_log_likelihoods([-3.0, -3.0]);
        assert_eq!(even.real, even.hoax);
    }

    #[test]
    fn test_prediction_confidence_is_predicted_class_probability() {
        let prediction = Prediction::from_distribution(ProbabilityDistribution::new(0.2, 0.8));
        assert_eq!(prediction.class, PredictedClass::Hoax);
        assert!((prediction.confidence() - 0.8).abs() < f64::EPSILON);
    }
}
