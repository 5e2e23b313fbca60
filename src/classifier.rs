//! Multinomial naive Bayes classification over a radix tree vocabulary.
//!
//! Training records each token of a document against a category in the
//! underlying [`Tree`](crate::radix::Tree). Scoring combines category priors
//! with Lidstone-smoothed per-word likelihoods and normalizes the result into
//! posterior probabilities.
//!
//! Products of many likelihoods underflow `f64` quickly, and rounding can
//! split scores that are exactly equal. Scores are therefore accumulated as
//! exact rationals; the winner and ties are decided on those exact values,
//! and only the normalized posteriors are rounded to `f64`.
//!
//! # Examples
//!
//! ```
//! use bayesian::classifier::{BinaryClassifier, NEGATIVE, POSITIVE};
//!
//! let mut classifier = BinaryClassifier::new(1.0).unwrap();
//! classifier.learn_positive(&["spam", "spam", "offer"]).unwrap();
//! classifier.learn_negative(&["meeting", "notes"]).unwrap();
//!
//! let scores = classifier.scores(&["spam"]);
//! assert_eq!(scores.best, POSITIVE);
//! assert!(scores.strict);
//! assert!(scores.posteriors[POSITIVE] > scores.posteriors[NEGATIVE]);
//! ```

pub mod binary;
pub mod config;
pub mod naive_bayes;
pub mod scoring;

use num_rational::BigRational;
use num_traits::Zero;

use crate::error::Result;

pub use binary::{BinaryClassifier, NEGATIVE, POSITIVE};
pub use config::ClassifierConfig;
pub use naive_bayes::NaiveBayesClassifier;

/// Classifier trait.
///
/// Implementations learn from pre-tokenized documents and estimate the
/// posterior probability of each category for unseen documents.
pub trait Classifier: Send + Sync + std::fmt::Debug {
    /// Learn every token of `document` as a member of `category`.
    fn learn(&mut self, document: &[&str], category: usize) -> Result<()>;

    /// Compute posterior scores for `document`.
    fn scores(&self, document: &[&str]) -> Scores;

    /// Get the number of categories.
    fn categories(&self) -> usize;
}

/// Posterior estimate for a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    /// Normalized posterior probability per category.
    ///
    /// Sums to 1 unless every category has zero probability, in which case
    /// every entry is 0.
    pub posteriors: Vec<f64>,
    /// Unnormalized posterior per category, `prior × Π likelihood`, exact.
    pub exact: Vec<BigRational>,
    /// Index of the highest scoring category. The earliest index wins ties.
    pub best: usize,
    /// True iff no other category ties the best score.
    pub strict: bool,
}

impl Scores {
    /// Build scores from exact unnormalized posteriors.
    pub fn from_exact(exact: Vec<BigRational>) -> Self {
        let posteriors = scoring::normalize(&exact);
        let (best, strict) = scoring::find_max(&exact);

        Scores {
            posteriors,
            exact,
            best,
            strict,
        }
    }

    /// Get the posterior of a category, or 0 if it is out of range.
    pub fn posterior(&self, category: usize) -> f64 {
        self.posteriors.get(category).copied().unwrap_or(0.0)
    }

    /// Check if the posteriors carry any probability mass.
    pub fn is_informative(&self) -> bool {
        self.exact.iter().any(|score| !score.is_zero())
    }
}
