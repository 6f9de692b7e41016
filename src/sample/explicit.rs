use crate::Cell;
use crate::Real;
use crate::Weight;
use crate::errors::Error;
use crate::grid::grid::Grid;
use crate::quantile::cohort::Cohort;
use crate::quantile::kernel;
use crate::quantile::row::Row;
use std::collections::BTreeMap;

/// Conformance baseline: the raw sample rows, no compression.
///
/// Every transform rescans all rows against the prefix chosen so far and
/// aggregates the matching ones into a cohort, so a call costs
/// `O(rows * d)` per axis. It exists to pin the outputs of the implicit
/// variants in tests; its conditional state is the prefix itself, which is
/// why it lives outside the cursor-based `Sample` seam.
#[derive(Debug, Clone)]
pub struct Explicit {
    dimension: usize,
    rows: Vec<(Vec<Cell>, Weight)>,
}

impl Explicit {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            rows: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn total(&self) -> Weight {
        self.rows.iter().map(|&(_, mass)| mass).sum()
    }

    pub fn observe(&mut self, path: &[Cell]) -> Result<(), Error> {
        self.insert(path, 1)
    }

    pub fn insert(&mut self, path: &[Cell], weight: Weight) -> Result<(), Error> {
        if path.len() != self.dimension {
            return Err(Error::ShapeMismatch {
                expect: self.dimension,
                got: path.len(),
            });
        }
        self.rows.push((path.to_vec(), weight));
        Ok(())
    }

    /// rows matching the prefix, aggregated by their cell on this axis
    fn cohort(&self, prefix: &[Cell], axis: usize) -> Row {
        let mut masses = BTreeMap::new();
        for (row, mass) in self.rows.iter().filter(|(row, _)| row.starts_with(prefix)) {
            *masses.entry(row[axis]).or_insert(0) += mass;
        }
        Row::from(masses.into_iter().collect::<Vec<_>>())
    }

    pub fn transform(&self, grid: &Grid, u: &[Real]) -> Result<Vec<Real>, Error> {
        if grid.dimension() != self.dimension {
            return Err(Error::ShapeMismatch {
                expect: self.dimension,
                got: grid.dimension(),
            });
        }
        if u.len() != self.dimension {
            return Err(Error::ShapeMismatch {
                expect: self.dimension,
                got: u.len(),
            });
        }
        for (axis, &value) in u.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InputOutOfUnit { axis, value });
            }
        }
        if self.total() == 0 {
            return Err(Error::EmptySample);
        }
        let mut prefix = Vec::with_capacity(self.dimension);
        let mut out = Vec::with_capacity(self.dimension);
        for (axis, &value) in u.iter().enumerate() {
            let cohort = self.cohort(&prefix, axis);
            let (pos, x) = kernel::invert(grid.axis(axis), &cohort, value);
            out.push(x);
            prefix.push(cohort.cell(pos));
        }
        Ok(out)
    }
}
