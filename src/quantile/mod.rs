pub mod cohort;
pub mod kernel;
pub mod quantile;
pub mod row;
