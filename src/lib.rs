//! Haralick texture features computed from gray-level co-occurrence matrices
//!
//! The caller supplies a normalized co-occurrence matrix and a selection of
//! features; the crate returns a record of the fourteen Haralick descriptors.
//! The maximal correlation coefficient is backed by a general real eigenvalue
//! solver (balancing, Hessenberg reduction, shifted QR iteration).

#![forbid(unsafe_code)]

/// Error handling and configuration
pub mod common;
/// Eigenvalues of general real square matrices
pub mod eigen;
/// Feature computation, selection and output records
pub mod features;
/// Co-occurrence matrix input and derived distributions
pub mod glcm;
/// Information-theoretic helpers
pub mod math;

pub use common::configuration::{EigenConfig, ExtractorConfig};
pub use common::error::{Result, TextureError};
pub use features::{
    DirectionalSummary, Feature, FeatureRecord, FeatureSelection, TextureExtractor,
    compute_texture_features,
};
pub use glcm::CooccurrenceMatrix;
