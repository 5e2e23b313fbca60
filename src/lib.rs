//! # Bayesian
//!
//! A multinomial naive Bayes text classifier whose vocabulary lives in a
//! compressed prefix tree.
//!
//! ## Features
//!
//! - Radix tree storing per-category counts for every learned token
//! - Any number of categories, plus a binary positive/negative specialization
//! - Lidstone smoothing with a configurable constant
//! - Exact rational scoring: no underflow on long documents, exact ties
//! - Lossless binary model files via serde and bincode, validated on load
//!
//! Tokenization is left to the caller: every operation accepts documents as
//! slices of pre-tokenized words.
//!
//! ## Concurrency
//!
//! Nothing here is internally synchronized. Scoring only needs `&self` and
//! may run from many threads at once; learning needs `&mut self`, so
//! concurrent training and scoring require an external lock around a shared
//! classifier.

pub mod classifier;
pub mod error;
pub mod persistence;
pub mod radix;

pub mod prelude {
    pub use crate::classifier::{
        BinaryClassifier, Classifier, ClassifierConfig, NEGATIVE, NaiveBayesClassifier, POSITIVE,
        Scores,
    };
    pub use crate::error::{BayesianError, Result};
    pub use crate::radix::Tree;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
