//! GUI module - User interface components

mod app;
mod chart_viewer;

pub use app::PieViewApp;
pub use chart_viewer::{ChartViewer, ViewerAction};
