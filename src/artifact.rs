//! Model artifact loader.
//!
//! Parses persisted model documents. These are "foreign types" used only for
//! parsing: the toolkit only cares about the nested `param.vector` map from
//! feature name to weight, and unknown sibling fields (real artifacts carry
//! training state, objective settings and so on) are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::vector::FeatureVector;

/// Error type for artifact loading.
///
/// Loading is all-or-nothing: the diff/dump utilities treat any variant as
/// fatal and exit with the message.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("cannot read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid model artifact: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level model artifact document.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub param: ModelParam,
}

/// Model parameters; only the feature-weight vector is retained.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelParam {
    pub vector: FeatureVector,
}

impl ModelArtifact {
    /// Load an artifact from a JSON file.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use model_inspect::ModelArtifact;
    ///
    /// let artifact = ModelArtifact::from_file("model.json")?;
    /// let weights = &artifact.param.vector;
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse an artifact from a serde_json value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    /// The feature-weight vector, consuming the artifact.
    pub fn into_vector(self) -> FeatureVector {
        self.param.vector
    }
}

// =============================================================================
// Tests
// =============================================================================
