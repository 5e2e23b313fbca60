//! Error types for the bayesian library.
//!
//! All fallible operations return [`BayesianError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use bayesian::error::{BayesianError, Result};
//! use bayesian::radix::Tree;
//!
//! fn build() -> Result<Tree> {
//!     Tree::new(0)
//! }
//!
//! match build() {
//!     Err(BayesianError::InvalidCategoryCount(n)) => assert_eq!(n, 0),
//!     _ => panic!("zero categories must be rejected"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for classifier and tree operations.
#[derive(Error, Debug)]
pub enum BayesianError {
    /// A tree or classifier was requested with no categories.
    #[error("Invalid category count: {0}")]
    InvalidCategoryCount(usize),

    /// The smoothing factor is negative, NaN or infinite.
    #[error("Invalid smoothing factor: {0}")]
    InvalidSmoothingFactor(f64),

    /// A category index outside `0..categories` was used.
    #[error("Out of bounds category: {category} (categories: {categories})")]
    OutOfBoundsCategory { category: usize, categories: usize },

    /// The insertion walk failed to produce a node. Indicates a broken tree invariant.
    #[error("Cannot create node: {0}")]
    CannotCreateNode(String),

    /// Decoded model state does not satisfy the tree invariants.
    #[error("Corrupt model: {0}")]
    CorruptModel(String),

    /// Binary encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors while reading or writing a model.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with BayesianError.
pub type Result<T> = std::result::Result<T, BayesianError>;

impl BayesianError {
    /// Create a new cannot-create-node error.
    pub fn cannot_create_node<S: Into<String>>(msg: S) -> Self {
        BayesianError::CannotCreateNode(msg.into())
    }

    /// Create a new corrupt model error.
    pub fn corrupt_model<S: Into<String>>(msg: S) -> Self {
        BayesianError::CorruptModel(msg.into())
    }
}

impl From<bincode::Error> for BayesianError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(io_err) => BayesianError::Io(io_err),
            other => BayesianError::Serialization(other.to_string()),
        }
    }
}
