use crate::Arbitrary;
use crate::Real;
use crate::errors::Error;

/// One axis of the rectangular domain: bounds, cell count, and the
/// precomputed cell boundaries.
///
/// Cell `j` is the half-open interval `[edge(j), edge(j+1))` of full width
/// `2 * dx`. The boundary edges are pinned to `lb` and `ub` exactly.
/// Frozen after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    axis: usize,
    lb: Real,
    ub: Real,
    cells: usize,
    edges: Vec<Real>,
    dx: Real,
}

impl Axis {
    pub fn new(axis: usize, lb: Real, ub: Real, cells: usize) -> Result<Self, Error> {
        if cells == 0 {
            return Err(Error::EmptyAxis { axis });
        }
        if lb > ub {
            return Err(Error::InvertedBounds { axis, lb, ub });
        }
        let span = ub - lb;
        let mut edges = (0..=cells)
            .map(|j| lb + j as Real * span / cells as Real)
            .collect::<Vec<Real>>();
        edges[0] = lb;
        edges[cells] = ub;
        Ok(Self {
            axis,
            lb,
            ub,
            cells,
            edges,
            dx: span / (2. * cells as Real),
        })
    }

    pub fn lb(&self) -> Real {
        self.lb
    }
    pub fn ub(&self) -> Real {
        self.ub
    }
    /// number of cells on this axis
    pub fn cells(&self) -> usize {
        self.cells
    }
    /// cell boundaries, `cells + 1` of them, non-decreasing
    pub fn edges(&self) -> &[Real] {
        &self.edges
    }
    pub fn edge(&self, j: usize) -> Real {
        self.edges[j]
    }
    /// half-cell width
    pub fn dx(&self) -> Real {
        self.dx
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:[{}, {}]x{}", self.axis, self.lb, self.ub, self.cells)
    }
}

impl Arbitrary for Axis {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let a: Real = rng.random_range(-100.0..100.0);
        let b: Real = rng.random_range(-100.0..100.0);
        let cells = rng.random_range(1..=20);
        Self::new(0, a.min(b), a.max(b), cells).expect("ordered bounds")
    }
}
