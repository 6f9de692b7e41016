use super::cohort::Cohort;
use crate::Cell;
use crate::Weight;

/// A materialized cohort: (cell, mass) pairs in arbitrary order, answering
/// everything by linear scan. The unsorted trie views each node this way,
/// and the explicit baseline aggregates its matching rows into one.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pairs: Vec<(Cell, Weight)>,
    total: Weight,
}

impl From<Vec<(Cell, Weight)>> for Row {
    fn from(pairs: Vec<(Cell, Weight)>) -> Self {
        let total = pairs.iter().map(|&(_, mass)| mass).sum();
        Self { pairs, total }
    }
}

impl Cohort for Row {
    fn total(&self) -> Weight {
        self.total
    }
    fn below(&self, cell: Cell) -> Weight {
        self.pairs
            .iter()
            .filter(|&&(c, _)| c < cell)
            .map(|&(_, mass)| mass)
            .sum()
    }
    fn find(&self, cell: Cell) -> Option<usize> {
        self.pairs.iter().position(|&(c, _)| c == cell)
    }
    fn cell(&self, pos: usize) -> Cell {
        self.pairs[pos].0
    }
    fn least(&self) -> usize {
        self.pairs
            .iter()
            .enumerate()
            .min_by_key(|&(_, &(c, _))| c)
            .map(|(pos, _)| pos)
            .expect("resident cohort")
    }
    fn greatest(&self) -> usize {
        self.pairs
            .iter()
            .enumerate()
            .max_by_key(|&(_, &(c, _))| c)
            .map(|(pos, _)| pos)
            .expect("resident cohort")
    }
    fn nearest(&self, cell: Cell) -> usize {
        self.pairs
            .iter()
            .enumerate()
            .min_by_key(|&(_, &(c, _))| (c.abs_diff(cell), c))
            .map(|(pos, _)| pos)
            .expect("resident cohort")
    }
}
