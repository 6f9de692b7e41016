use super::axis::Axis;
use crate::Arbitrary;
use crate::Real;
use crate::errors::Error;

/// The axis-aligned grid descriptor over `[lb, ub]^d`.
///
/// Immutable value type; `transform` borrows it shared-read.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    axes: Vec<Axis>,
}

impl Grid {
    pub fn new(lb: &[Real], ub: &[Real], cells: &[usize]) -> Result<Self, Error> {
        if lb.len() != ub.len() {
            return Err(Error::ShapeMismatch {
                expect: lb.len(),
                got: ub.len(),
            });
        }
        if lb.len() != cells.len() {
            return Err(Error::ShapeMismatch {
                expect: lb.len(),
                got: cells.len(),
            });
        }
        let axes = lb
            .iter()
            .zip(ub.iter())
            .zip(cells.iter())
            .enumerate()
            .map(|(k, ((&lb, &ub), &cells))| Axis::new(k, lb, ub, cells))
            .collect::<Result<Vec<Axis>, Error>>()?;
        Ok(Self { axes })
    }

    pub fn dimension(&self) -> usize {
        self.axes.len()
    }
    pub fn axis(&self, k: usize) -> &Axis {
        &self.axes[k]
    }
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "grid d={}", self.dimension())?;
        self.axes.iter().try_for_each(|a| write!(f, " {}", a))
    }
}

impl Arbitrary for Grid {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let d = rng.random_range(4..=100);
        let axes = (0..d)
            .map(|k| {
                let a: Real = rng.random_range(-100.0..100.0);
                let b: Real = rng.random_range(-100.0..100.0);
                let cells = rng.random_range(1..=20);
                Axis::new(k, a.min(b), a.max(b), cells).expect("ordered bounds")
            })
            .collect::<Vec<Axis>>();
        Self { axes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_shape_mismatch_rejected() {
        let grid = Grid::new(&[0., 0.], &[1., 1.], &[2]);
        assert!(grid == Err(Error::ShapeMismatch { expect: 2, got: 1 }));
    }

    #[test]
    fn is_axis_ordinal_reported() {
        let grid = Grid::new(&[0., 0., 5.], &[1., 1., -5.], &[2, 2, 2]);
        assert!(grid == Err(Error::InvertedBounds { axis: 2, lb: 5., ub: -5. }));
    }

    #[test]
    fn is_dimension_axis_count() {
        let grid = Grid::new(&[0., 0.], &[1., 2.], &[4, 8]).unwrap();
        assert!(grid.dimension() == 2);
        assert!(grid.axis(1).cells() == 8);
    }

    #[test]
    fn is_arbitrary_well_formed() {
        let grid = Grid::random();
        assert!(grid.dimension() >= 4);
        assert!(grid.axes().iter().all(|a| a.cells() >= 1));
        assert!(grid.axes().iter().all(|a| a.lb() <= a.ub()));
    }
}
