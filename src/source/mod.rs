pub mod document;
pub mod error;
pub mod year_source;
