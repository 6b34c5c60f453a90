//! Error types for mesh generation.

use thiserror::Error;

/// Errors surfaced by the node generation and connectivity pipeline.
///
/// All of these are terminal for the batch run: the caller fixes the input
/// and re-runs. No partial results are returned alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeshError {
    /// The two axis points coincide, so no axis direction exists.
    #[error("axis endpoints coincide; a cylinder axis needs two distinct points")]
    DegenerateAxis,

    /// The pipeline was invoked with no input points.
    #[error("no input points given; at least one ring is required")]
    EmptyInput,

    /// More rings than the two-digit ring field can hold.
    #[error("ring count {count} exceeds the 2-digit id field (max 99)")]
    TooManyRings { count: usize },

    /// A ring holds more points than the three-digit angular field can hold.
    #[error("ring {ring} holds {count} points, exceeding the 3-digit id field (max 999)")]
    TooManyPointsInRing { ring: usize, count: usize },

    /// More radial fractions than the two-digit fraction field can hold.
    #[error("fraction count {count} exceeds the 2-digit id field (max 99)")]
    TooManyFractions { count: usize },

    /// A node, edge, or ring count does not match the declared structure.
    #[error("structural mismatch: {quantity} expected {expected}, found {found}")]
    StructuralMismatch {
        quantity: &'static str,
        expected: usize,
        found: usize,
    },
}
