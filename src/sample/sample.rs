use crate::Cell;
use crate::Weight;
use crate::quantile::cohort::Cohort;

/// Capability set at the sample-container boundary.
///
/// A sample is anything the chained transform can walk: hand out a root
/// cursor, view the conditional population at a cursor, descend by the
/// position the kernel chose. Cursors are cheap copyable handles rather
/// than references, so containers arena their nodes however they like.
pub trait Sample {
    type Cursor: Copy;
    fn root(&self) -> Self::Cursor;
    /// conditional population at this cursor's depth
    fn layer(&self, at: Self::Cursor) -> impl Cohort;
    /// child at `pos` within this cursor's population
    fn descend(&self, at: Self::Cursor, pos: usize) -> Self::Cursor;
    fn dimension(&self) -> usize;
    /// total sample mass
    fn total(&self) -> Weight;
    /// largest occupied cell on an axis, `None` when nothing lives there
    fn extent(&self, axis: usize) -> Option<Cell>;
}
