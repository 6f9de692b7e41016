use crate::Cell;
use crate::Real;

/// Everything that can go wrong before the numeric work starts.
///
/// The kernel itself is total once these are ruled out: construction
/// rejects malformed descriptors and samples, transform rejects malformed
/// inputs, and nothing inside the chained descent can fail recoverably.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("shape mismatch: expected {expect} coordinates, got {got}")]
    ShapeMismatch { expect: usize, got: usize },

    #[error("cell {cell} out of range on axis {axis} ({cells} cells)")]
    OutOfRangeIndex { axis: usize, cell: Cell, cells: usize },

    #[error("inverted bounds on axis {axis}: {lb} > {ub}")]
    InvertedBounds { axis: usize, lb: Real, ub: Real },

    #[error("axis {axis} has zero cells")]
    EmptyAxis { axis: usize },

    #[error("transform over an empty sample")]
    EmptySample,

    #[error("input {value} on axis {axis} outside the unit interval")]
    InputOutOfUnit { axis: usize, value: Real },
}
