//! Error handling and configuration shared by every module

/// Numeric constants and runtime configuration
pub mod configuration;
/// Error types and result alias
pub mod error;
