//! Binary model files.
//!
//! A model file is a small header (magic number and format version)
//! followed by the bincode encoding of a [`NaiveBayesClassifier`]. Every
//! field of the tree is stored, including leaf flags and per-node counts,
//! so a loaded model scores and keeps training exactly like the original.
//!
//! Loading validates the header and all tree invariants before handing the
//! model out. The tree is stored as a flat node list, so neither decoding
//! nor validation recurses, and a hostile file fails with
//! [`BayesianError::CorruptModel`] instead of exhausting the stack.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{BinaryClassifier, NaiveBayesClassifier};
use crate::error::{BayesianError, Result};
use crate::radix::Tree;
use crate::radix::repr::TreeRepr;

/// Magic number at the start of every model file ("NBAY").
pub const MODEL_MAGIC: u32 = 0x4E42_4159;

/// Current model file format version.
pub const MODEL_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ModelHeader {
    magic: u32,
    version: u32,
}

/// Model body as stored, before the tree is rebuilt and validated.
#[derive(Debug, Deserialize)]
struct ModelBody {
    tree: TreeRepr,
    smoothing_factor: f64,
}

impl NaiveBayesClassifier {
    /// Write the model to `writer`.
    pub fn save<W: Write>(&self, mut writer: W) -> Result<()> {
        let header = ModelHeader {
            magic: MODEL_MAGIC,
            version: MODEL_VERSION,
        };
        bincode::serialize_into(&mut writer, &header)?;
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a model from `reader`.
    pub fn load<R: Read>(mut reader: R) -> Result<Self> {
        let header: ModelHeader = bincode::deserialize_from(&mut reader)?;
        if header.magic != MODEL_MAGIC {
            return Err(BayesianError::corrupt_model(format!(
                "invalid magic number {:#010x}",
                header.magic
            )));
        }
        if header.version != MODEL_VERSION {
            return Err(BayesianError::corrupt_model(format!(
                "unsupported model version: {}",
                header.version
            )));
        }

        let body: ModelBody = bincode::deserialize_from(&mut reader)?;
        let tree = Tree::try_from(body.tree)?;
        NaiveBayesClassifier::from_tree(tree, body.smoothing_factor)
    }

    /// Encode the model into a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.save(&mut bytes)?;
        debug!(
            bytes = bytes.len(),
            unique_words = self.tree().unique_words(),
            "encoded model"
        );
        Ok(bytes)
    }

    /// Decode a model from bytes produced by [`NaiveBayesClassifier::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::load(bytes)
    }

    /// Save the model to a file, replacing any existing content.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.save(BufWriter::new(file))?;
        debug!(
            path = %path.display(),
            unique_words = self.tree().unique_words(),
            "saved model"
        );
        Ok(())
    }

    /// Load a model from a file written by [`NaiveBayesClassifier::save_to_file`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let classifier = Self::load(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            unique_words = classifier.tree().unique_words(),
            "loaded model"
        );
        Ok(classifier)
    }
}

impl BinaryClassifier {
    /// Write the model to `writer`.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        self.inner().save(writer)
    }

    /// Read a two-category model from `reader`.
    pub fn load<R: Read>(reader: R) -> Result<Self> {
        Self::from_classifier(NaiveBayesClassifier::load(reader)?)
    }

    /// Encode the model into a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.inner().to_bytes()
    }

    /// Decode a two-category model from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_classifier(NaiveBayesClassifier::from_bytes(bytes)?)
    }

    /// Save the model to a file, replacing any existing content.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.inner().save_to_file(path)
    }

    /// Load a two-category model from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_classifier(NaiveBayesClassifier::load_from_file(path)?)
    }
}
