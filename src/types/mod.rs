pub mod aggregate;
pub mod coordinate;
pub mod grid;
pub mod interpolation;
pub mod month_set;
pub mod observation;
