pub mod errors;
pub mod grid;
pub mod quantile;
pub mod sample;

/// dimensional analysis types
pub type Real = f64;
pub type Cell = u32;
pub type Weight = usize;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}
