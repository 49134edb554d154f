//! Built-in Chart Configurations
//! Assembles the two charts the dashboard ships with: the color sample
//! pie, available immediately, and the day schedule pie, built from a
//! loaded chart package.

use crate::charts::{ChartKind, PieChart, RenderOptions, PALETTE};
use crate::data::{CategorySeries, DataTable, Rgb, SeriesError};
use crate::loader::SchedulePackage;
use crate::targets::TargetRegistry;
use anyhow::Result;

/// Target id the color sample pie binds to.
pub const COLOR_PIE_TARGET: &str = "pieChart";
/// Target id the day schedule pie binds to.
pub const SCHEDULE_PIE_TARGET: &str = "piechart";

const COLOR_LABELS: [&str; 5] = ["Red", "Green", "Yellow", "Grey", "Dark Grey"];
const COLOR_VALUES: [f64; 5] = [300.0, 50.0, 100.0, 40.0, 120.0];
const COLOR_FILLS: [&str; 5] = ["#F7464A", "#46BFBD", "#FDB45C", "#949FB1", "#4D5360"];
const COLOR_HOVERS: [&str; 5] = ["#FF5A5E", "#5AD3D1", "#FFC870", "#A8B3C5", "#616774"];

/// How far palette colors move toward white for their hover variant.
const HOVER_LIGHTEN: f32 = 0.2;

/// Assemble the color sample pie: five fixed categories with matched
/// fill and hover colors, responsive sizing, no title. Fails if the
/// target id is not registered.
pub fn color_sample_chart(targets: &TargetRegistry, target_id: &str) -> Result<PieChart> {
    let series =
        CategorySeries::from_hex(&COLOR_LABELS, &COLOR_VALUES, &COLOR_FILLS, &COLOR_HOVERS)?;
    let target = targets.resolve(target_id)?;
    Ok(PieChart::new(
        ChartKind::Pie,
        series,
        RenderOptions {
            responsive: true,
            title: None,
        },
        target,
    ))
}

/// Assemble the day schedule pie from a loaded package. Slice colors come
/// from the default palette since the package authors none.
pub fn day_schedule_chart(
    targets: &TargetRegistry,
    target_id: &str,
    package: SchedulePackage,
) -> Result<PieChart> {
    let target = targets.resolve(target_id)?;
    let options = RenderOptions {
        responsive: false,
        title: Some(package.title.clone()),
    };
    let series = palette_series(&package.into_table())?;
    Ok(PieChart::new(ChartKind::Pie, series, options, target))
}

/// Series from a two-column table, colored with the default palette.
fn palette_series(table: &DataTable) -> Result<CategorySeries, SeriesError> {
    let fills: Vec<Rgb> = (0..table.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();
    let hovers: Vec<Rgb> = fills.iter().map(|c| c.lighten(HOVER_LIGHTEN)).collect();
    CategorySeries::new(
        table.labels().map(str::to_string).collect(),
        table.values().collect(),
        fills,
        hovers,
    )
}
