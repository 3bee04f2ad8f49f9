//! model-inspect: debugging tools for model artifacts and predictions.
//!
//! Two independent pipelines for poking at binary classification models:
//!
//! - [`artifact`] / [`vector`] - load the feature-weight vector out of a
//!   persisted model artifact, then diff two vectors or dump one ranked by
//!   absolute weight.
//! - [`report`] - stream prediction lines (instance JSON + predicted score)
//!   and render a color-coded HTML page of per-example errors with the
//!   instance's supporting context, for eyeballing what the model gets wrong.
//!
//! # Loading Artifacts
//!
//! Use [`ModelArtifact::from_file`] to load a JSON artifact and reach its
//! `param.vector` map. See the [`artifact`] module for details.
//!
//! # Rendering Reports
//!
//! Use [`report::render`] with a [`ReportConfig`]. Malformed input lines are
//! skipped, never fatal; see the [`report`] module for the full policy.

pub mod artifact;
pub mod report;
pub mod vector;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use artifact::{ArtifactError, ModelArtifact};
pub use report::palette::{bin_error, color_for, BINS, PALETTE};
pub use report::record::{parse_line, ParseError, PredictionRecord};
pub use report::render::{render, ReportConfig, ReportStats};
pub use vector::{diff, rank, round_sig, FeatureDelta, FeatureVector, DIFF_THRESHOLD};
