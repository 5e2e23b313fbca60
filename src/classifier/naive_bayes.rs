//! Multinomial naive Bayes classifier backed by a radix tree.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::config::{ClassifierConfig, validate_smoothing_factor};
use crate::classifier::{Classifier, Scores, scoring};
use crate::error::Result;
use crate::radix::Tree;

/// Naive Bayes classifier over an arbitrary number of categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesClassifier {
    tree: Tree,
    smoothing_factor: f64,
}

impl NaiveBayesClassifier {
    /// Create a new classifier with `categories` categories.
    ///
    /// `smoothing_factor` is the Lidstone constant added to every word
    /// count; it must be finite and non-negative.
    pub fn new(categories: usize, smoothing_factor: f64) -> Result<Self> {
        let tree = Tree::new(categories)?;
        validate_smoothing_factor(smoothing_factor)?;

        debug!(categories, smoothing_factor, "created naive bayes classifier");

        Ok(Self {
            tree,
            smoothing_factor,
        })
    }

    /// Wrap an already validated tree.
    pub(crate) fn from_tree(tree: Tree, smoothing_factor: f64) -> Result<Self> {
        validate_smoothing_factor(smoothing_factor)?;
        Ok(Self {
            tree,
            smoothing_factor,
        })
    }

    /// Create a new classifier from a configuration.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        Self::new(config.categories, config.smoothing_factor)
    }

    /// Learn every token of `document` as a member of `category`.
    ///
    /// Stops at the first failing token. Tokens inserted before the failure
    /// stay learned; nothing is rolled back. An out-of-bounds category fails
    /// on the first token, so it never leaves partial state behind.
    pub fn learn<S: AsRef<str>>(&mut self, document: &[S], category: usize) -> Result<()> {
        for token in document {
            self.tree.insert(token.as_ref(), category)?;
        }
        Ok(())
    }

    /// Compute posterior scores for `document`.
    ///
    /// Each category scores `prior × Π likelihood` in exact rational
    /// arithmetic, so exactly tied categories are always reported as ties.
    pub fn scores<S: AsRef<str>>(&self, document: &[S]) -> Scores {
        let mut exact = self.exact_priors();

        for token in document {
            if exact.iter().all(Zero::is_zero) {
                break;
            }
            for (score, likelihood) in exact
                .iter_mut()
                .zip(self.exact_likelihoods(token.as_ref()))
            {
                *score *= likelihood;
            }
        }

        Scores::from_exact(exact)
    }

    /// Get the prior probability of each category.
    ///
    /// All zeros while nothing has been learned.
    pub fn priors(&self) -> Vec<f64> {
        self.exact_priors().iter().map(scoring::to_f64).collect()
    }

    /// Get the smoothed likelihood of `word` within each category.
    ///
    /// All zeros while the vocabulary is empty. Unseen words get the fully
    /// smoothed likelihood of a zero count.
    pub fn likelihoods(&self, word: &str) -> Vec<f64> {
        self.exact_likelihoods(word)
            .iter()
            .map(scoring::to_f64)
            .collect()
    }

    /// Exact prior of each category: its share of all learning events.
    pub fn exact_priors(&self) -> Vec<BigRational> {
        let totals = self.tree.totals();
        let sum: BigInt = totals.iter().map(|&total| BigInt::from(total)).sum();

        if sum.is_zero() {
            return vec![BigRational::zero(); totals.len()];
        }
        totals
            .iter()
            .map(|&total| BigRational::new(BigInt::from(total), sum.clone()))
            .collect()
    }

    /// Exact smoothed likelihood of `word` within each category.
    pub fn exact_likelihoods(&self, word: &str) -> Vec<BigRational> {
        let categories = self.tree.categories();
        let unique_words = self.tree.unique_words();
        if unique_words == 0 {
            return vec![BigRational::zero(); categories];
        }

        let smoothing = scoring::exact(self.smoothing_factor);
        let unseen = vec![0; categories];
        let counts = self.tree.find(word).unwrap_or(unseen.as_slice());

        counts
            .iter()
            .zip(self.tree.totals())
            .map(|(&count, &total)| {
                scoring::smoothed_likelihood(count, total, &smoothing, unique_words)
            })
            .collect()
    }

    /// Get the underlying vocabulary tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Get the smoothing factor.
    pub fn smoothing_factor(&self) -> f64 {
        self.smoothing_factor
    }

    /// Get the number of categories.
    pub fn categories(&self) -> usize {
        self.tree.categories()
    }

    /// Check the smoothing factor and every tree invariant.
    pub fn validate(&self) -> Result<()> {
        validate_smoothing_factor(self.smoothing_factor)?;
        self.tree.check_invariants()
    }
}

impl Classifier for NaiveBayesClassifier {
    fn learn(&mut self, document: &[&str], category: usize) -> Result<()> {
        NaiveBayesClassifier::learn(self, document, category)
    }

    fn scores(&self, document: &[&str]) -> Scores {
        NaiveBayesClassifier::scores(self, document)
    }

    fn categories(&self) -> usize {
        NaiveBayesClassifier::categories(self)
    }
}
