//! Error types for quadmesh.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh generation.
///
/// The partitioning and mesh-generation algorithms themselves are total:
/// empty shape lists, empty sample sets, and cells with no materials are all
/// valid states. Errors only arise from invalid configuration.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The domain extent is degenerate (zero, negative, or non-finite).
    #[error("invalid domain extent: {width} x {height}")]
    InvalidDomain {
        /// The requested domain width.
        width: f64,
        /// The requested domain height.
        height: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
