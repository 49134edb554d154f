//! Data module - category series and tabular chart data

mod series;
mod table;

pub use series::{CategorySeries, Rgb, SeriesError};
pub use table::DataTable;
