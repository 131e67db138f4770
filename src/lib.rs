//! Monthly wind-speed and solar-radiation summaries with gap filling.
//!
//! Raw ten-minute observations are grouped into months (average wind speed in km/h, total
//! solar radiation in kWh/m²) and months without observations can be estimated from their
//! neighbors by linear, quadratic or spline interpolation.

mod aggregation;
mod error;
mod interpolation;
mod pipeline;
mod source;
mod types;
mod utils;
mod weather_summary;

pub use error::WindSolarError;
pub use weather_summary::*;

pub use aggregation::aggregator::aggregate;
pub use aggregation::normalizer::normalize;
pub use pipeline::summarize;

pub use interpolation::gaps::{locate_gaps, Gaps};
pub use interpolation::neighbors::nearest_known;
pub use interpolation::Sample;

pub use types::aggregate::{MonthlyAggregate, MS_TO_KMH, WM2_TO_KWHM2};
pub use types::coordinate::Coordinate;
pub use types::grid::{Grid, YearRow};
pub use types::interpolation::Interpolation;
pub use types::month_set::MonthSet;
pub use types::observation::{Observation, RawField, RawRecord};

pub use source::document::{parse_document, DocumentFormat};
pub use source::error::SourceError;
pub use source::year_source::{YearSource, DEFAULT_BASE_URL, FALLBACK_YEARS};
