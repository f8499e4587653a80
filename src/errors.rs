//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`ArmatureError`] covers all failure modes including:
//! - Index and count precondition violations on skeleton operations
//! - Rig fitting against a mesh with the wrong topology
//! - OFF mesh import/export failures
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ArmatureError>`.
//!
//! ```rust,ignore
//! use armature::errors::{ArmatureError, Result};
//!
//! fn refit() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```
//!
//! Degenerate geometry (zero-length bones, near-colinear reference axes) is
//! never an error; those cases fall back to an identity basis or a substitute
//! reference axis. Every operation either completes or reports and leaves the
//! skeleton unmodified.

use thiserror::Error;

/// The main error type for the armature crate.
///
/// Each variant carries the context needed to identify the offending
/// index or count without re-querying the skeleton.
#[derive(Error, Debug)]
pub enum ArmatureError {
    // ========================================================================
    // Skeleton Precondition Errors
    // ========================================================================
    /// A joint index was outside the skeleton's joint sequence.
    #[error("joint index out of bounds: {index} (joint count: {count})")]
    JointIndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of joints in the skeleton
        count: usize,
    },

    /// A bone index was outside the skeleton's bone sequence.
    #[error("bone index out of bounds: {index} (bone count: {count})")]
    BoneIndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of bones in the skeleton
        count: usize,
    },

    /// A bone insertion referenced a joint that does not exist.
    #[error("invalid bone endpoints: start {start:?}, end {end:?} (joint count: {count})")]
    InvalidBoneEndpoints {
        /// Requested start joint
        start: Option<usize>,
        /// Requested end joint
        end: Option<usize>,
        /// Number of joints in the skeleton
        count: usize,
    },

    /// A bone insertion referenced a parent bone that does not exist.
    #[error("invalid parent bone: {parent} (bone count: {count})")]
    InvalidParentBone {
        /// Requested parent bone index
        parent: usize,
        /// Number of bones in the skeleton
        count: usize,
    },

    // ========================================================================
    // Retargeting Errors
    // ========================================================================
    /// No bone without a parent exists, so the tree has no traversal root.
    #[error("no root bone found")]
    NoRootBone,

    /// The retarget source does not have the same number of bones.
    #[error("bone count mismatch: expected {expected}, found {found}")]
    BoneCountMismatch {
        /// This skeleton's bone count
        expected: usize,
        /// The source's bone or length count
        found: usize,
    },

    // ========================================================================
    // Rig Fitting Errors
    // ========================================================================
    /// The supplied vertex buffer is not the expected fixed mesh topology.
    #[error("vertex count mismatch: expected {expected}, found {found}")]
    VertexCountMismatch {
        /// Vertex count of the rig's bound topology
        expected: usize,
        /// Vertex count of the supplied buffer
        found: usize,
    },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An OFF file did not parse as expected.
    #[error("malformed OFF data: {0}")]
    MalformedOff(String),
}

/// Alias for `Result<T, ArmatureError>`.
pub type Result<T> = std::result::Result<T, ArmatureError>;
