//! Charts module - chart configuration and rendering

mod plotter;
pub mod presets;
mod renderer;

use serde::{Deserialize, Serialize};

pub use plotter::{PieChart, PiePlotter, PALETTE};
pub use renderer::{RenderError, StaticPieRenderer};

/// Supported chart kinds. Serialized lowercase to match the `"pie"`
/// type tag used by chart configuration records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
}

/// Recognized rendering options for a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Resize the chart with its container instead of using a fixed size.
    #[serde(default)]
    pub responsive: bool,
    /// Title drawn above the chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChartKind::Pie).unwrap(), "\"pie\"");
        let kind: ChartKind = serde_json::from_str("\"pie\"").unwrap();
        assert_eq!(kind, ChartKind::Pie);
    }

    #[test]
    fn render_options_round_trip() {
        let options = RenderOptions {
            responsive: true,
            title: Some("My Day Schedule".into()),
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: RenderOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn render_options_defaults() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert!(!options.responsive);
        assert!(options.title.is_none());
    }
}
