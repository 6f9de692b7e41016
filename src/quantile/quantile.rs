use super::kernel;
use crate::Real;
use crate::errors::Error;
use crate::grid::grid::Grid;
use crate::sample::layered::Layered;
use crate::sample::sample::Sample;
use crate::sample::sorted::Sorted;
use crate::sample::trie::Trie;

/// The chained conditional-quantile transform.
///
/// Inverts the empirical CDF axis by axis: the first coordinate through
/// the marginal along axis 0, each next one through the CDF conditional on
/// the cells already chosen, descending the sample container as it goes.
/// Drawing the input uniformly on `[0,1]^d` makes the output distribute
/// like the sample.
///
/// Pure over (grid, sample, input). Once built, a `&Quantile` can serve
/// any number of threads concurrently; nothing here mutates.
pub struct Quantile<S> {
    grid: Grid,
    sample: S,
}

/// variant aliases
pub type ImplicitQuantile = Quantile<Trie>;
pub type SortedQuantile = Quantile<Sorted>;
pub type LayeredQuantile = Quantile<Layered>;

impl<S: Sample> Quantile<S> {
    /// Validates the pairing before any numeric work: dimensions agree,
    /// the sample holds mass, every occupied cell fits its axis.
    pub fn new(grid: Grid, sample: S) -> Result<Self, Error> {
        if grid.dimension() != sample.dimension() {
            return Err(Error::ShapeMismatch {
                expect: grid.dimension(),
                got: sample.dimension(),
            });
        }
        if sample.total() == 0 {
            return Err(Error::EmptySample);
        }
        for k in 0..grid.dimension() {
            if let Some(cell) = sample.extent(k) {
                if cell as usize >= grid.axis(k).cells() {
                    return Err(Error::OutOfRangeIndex {
                        axis: k,
                        cell,
                        cells: grid.axis(k).cells(),
                    });
                }
            }
        }
        log::debug!("quantile over {} with mass {}", grid, sample.total());
        Ok(Self { grid, sample })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn sample(&self) -> &S {
        &self.sample
    }

    pub fn transform(&self, u: &[Real]) -> Result<Vec<Real>, Error> {
        let d = self.grid.dimension();
        if u.len() != d {
            return Err(Error::ShapeMismatch {
                expect: d,
                got: u.len(),
            });
        }
        for (axis, &value) in u.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InputOutOfUnit { axis, value });
            }
        }
        let mut at = self.sample.root();
        let mut out = Vec::with_capacity(d);
        for (k, &value) in u.iter().enumerate() {
            let (pos, x) = kernel::invert(self.grid.axis(k), &self.sample.layer(at), value);
            out.push(x);
            at = self.sample.descend(at, pos);
        }
        Ok(out)
    }
}
