//! Two-category specialization of the naive Bayes classifier.

use serde::{Deserialize, Serialize};

use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::{Classifier, Scores};
use crate::error::{BayesianError, Result};
use crate::radix::Tree;

/// Category index of positive examples.
pub const POSITIVE: usize = 1;

/// Category index of negative examples.
pub const NEGATIVE: usize = 0;

/// A naive Bayes classifier with exactly two categories,
/// [`NEGATIVE`] (0) and [`POSITIVE`] (1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinaryClassifier {
    inner: NaiveBayesClassifier,
}

impl BinaryClassifier {
    /// Create a new binary classifier.
    pub fn new(smoothing_factor: f64) -> Result<Self> {
        Ok(Self {
            inner: NaiveBayesClassifier::new(2, smoothing_factor)?,
        })
    }

    /// Wrap a two-category classifier.
    pub fn from_classifier(inner: NaiveBayesClassifier) -> Result<Self> {
        if inner.categories() != 2 {
            return Err(BayesianError::InvalidCategoryCount(inner.categories()));
        }
        Ok(Self { inner })
    }

    /// Learn `document` as a positive example.
    pub fn learn_positive<S: AsRef<str>>(&mut self, document: &[S]) -> Result<()> {
        self.inner.learn(document, POSITIVE)
    }

    /// Learn `document` as a negative example.
    pub fn learn_negative<S: AsRef<str>>(&mut self, document: &[S]) -> Result<()> {
        self.inner.learn(document, NEGATIVE)
    }

    /// Compute posterior scores for `document`.
    pub fn scores<S: AsRef<str>>(&self, document: &[S]) -> Scores {
        self.inner.scores(document)
    }

    /// Check if `document` scores strictly positive.
    pub fn is_positive<S: AsRef<str>>(&self, document: &[S]) -> bool {
        let scores = self.inner.scores(document);
        scores.best == POSITIVE && scores.strict
    }

    /// Get the underlying classifier.
    pub fn inner(&self) -> &NaiveBayesClassifier {
        &self.inner
    }

    /// Unwrap the underlying classifier.
    pub fn into_inner(self) -> NaiveBayesClassifier {
        self.inner
    }

    /// Get the underlying vocabulary tree.
    pub fn tree(&self) -> &Tree {
        self.inner.tree()
    }
}

impl Classifier for BinaryClassifier {
    fn learn(&mut self, document: &[&str], category: usize) -> Result<()> {
        self.inner.learn(document, category)
    }

    fn scores(&self, document: &[&str]) -> Scores {
        self.inner.scores(document)
    }

    fn categories(&self) -> usize {
        2
    }
}
