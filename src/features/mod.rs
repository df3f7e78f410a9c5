//! Haralick feature computation and orchestration

/// Maximal correlation coefficient via the eigenvalue engine
pub mod correlation;
/// Selection-driven feature orchestration
pub mod extractor;
/// Output record
pub mod record;
/// Feature identifiers and selection mask
pub mod selection;
/// Closed-form statistical features
pub mod statistics;
/// Mean and range across directional records
pub mod summary;

pub use extractor::{TextureExtractor, compute_texture_features};
pub use record::FeatureRecord;
pub use selection::{Feature, FeatureSelection};
pub use summary::DirectionalSummary;
