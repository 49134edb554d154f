//! Pie Plotter Module
//! Interactive pie rendering with egui: slice geometry, hover highlighting
//! and the legend.

use crate::charts::{ChartKind, RenderOptions};
use crate::data::{CategorySeries, Rgb};
use crate::targets::RenderTarget;
use egui::{Color32, Pos2, RichText, Stroke};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Default slice colors for series without authored colors.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(231, 76, 60),  // Red
    Rgb::new(46, 204, 113), // Green
    Rgb::new(155, 89, 182), // Purple
    Rgb::new(243, 156, 18), // Orange
    Rgb::new(26, 188, 156), // Teal
    Rgb::new(233, 30, 99),  // Pink
    Rgb::new(0, 188, 212),  // Cyan
    Rgb::new(255, 87, 34),  // Deep Orange
    Rgb::new(121, 85, 72),  // Brown
    Rgb::new(96, 125, 139), // Blue Grey
];

/// Slices start at 12 o'clock and proceed clockwise.
pub(crate) const START_ANGLE: f64 = -FRAC_PI_2;

/// Diameter used when the chart is not responsive.
const FIXED_DIAMETER: f32 = 320.0;

/// Arc sampling step, radians.
const ARC_STEP: f64 = 0.06;

/// A fully assembled pie chart configuration: what to draw, how, and where.
/// Pure data; building one has no side effects and identical inputs yield
/// an equal value.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub kind: ChartKind,
    pub series: CategorySeries,
    pub options: RenderOptions,
    pub target: RenderTarget,
}

impl PieChart {
    pub fn new(
        kind: ChartKind,
        series: CategorySeries,
        options: RenderOptions,
        target: RenderTarget,
    ) -> Self {
        Self {
            kind,
            series,
            options,
            target,
        }
    }
}

/// Angular sweep of each slice, proportional to its value. A zero total
/// yields no slices (nothing to draw).
pub(crate) fn slice_sweeps(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    values.iter().map(|v| v / total * TAU).collect()
}

/// Slice index containing the given absolute angle (radians, screen
/// convention: y grows downward, so increasing angle is clockwise).
pub(crate) fn slice_at(angle: f64, sweeps: &[f64]) -> Option<usize> {
    let mut rel = (angle - START_ANGLE).rem_euclid(TAU);
    for (i, &sweep) in sweeps.iter().enumerate() {
        if rel < sweep {
            return Some(i);
        }
        rel -= sweep;
    }
    // Floating point can leave a sliver past the last slice boundary.
    sweeps.iter().rposition(|&s| s > 0.0)
}

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Draws pie charts into an egui `Ui`.
pub struct PiePlotter;

impl PiePlotter {
    /// Draw the chart: optional title, the pie itself with hover
    /// highlighting, then the legend. Safe to call every frame; identical
    /// inputs produce identical output.
    pub fn draw(ui: &mut egui::Ui, chart: &PieChart) {
        if let Some(title) = &chart.options.title {
            ui.label(RichText::new(title).size(16.0).strong());
            ui.add_space(4.0);
        }

        let diameter = if chart.options.responsive {
            ui.available_width().clamp(120.0, 420.0)
        } else {
            FIXED_DIAMETER
        };

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
        let center = rect.center();
        let radius = diameter * 0.5 - 4.0;

        let sweeps = slice_sweeps(chart.series.values());
        let hovered = response.hover_pos().and_then(|pos| {
            let d = pos - center;
            if d.length() > radius {
                return None;
            }
            slice_at((d.y as f64).atan2(d.x as f64), &sweeps)
        });

        let painter = ui.painter();
        let mut start = START_ANGLE;
        for (i, &sweep) in sweeps.iter().enumerate() {
            if sweep > 0.0 {
                let color = if hovered == Some(i) {
                    chart.series.hover_colors()[i]
                } else {
                    chart.series.fill_colors()[i]
                };
                Self::fill_sector(painter, center, radius, start, sweep, color32(color));
            }
            start += sweep;
        }

        ui.add_space(6.0);
        Self::draw_legend(ui, &chart.series, hovered);
    }

    /// Fill one sector as a triangle fan and stroke its outline in white.
    /// A fan is used instead of a convex polygon because sectors wider
    /// than a half circle are not convex.
    fn fill_sector(
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
        start: f64,
        sweep: f64,
        color: Color32,
    ) {
        let arc = Self::arc_points(center, radius, start, sweep);

        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(center, color);
        for &p in &arc {
            mesh.colored_vertex(p, color);
        }
        for i in 1..arc.len() as u32 {
            mesh.add_triangle(0, i, i + 1);
        }
        painter.add(egui::Shape::mesh(mesh));

        // Slice border, matching the white separator between slices.
        let mut outline = Vec::with_capacity(arc.len() + 1);
        outline.push(center);
        outline.extend(arc);
        painter.add(egui::Shape::closed_line(
            outline,
            Stroke::new(2.0, Color32::WHITE),
        ));
    }

    fn arc_points(center: Pos2, radius: f32, start: f64, sweep: f64) -> Vec<Pos2> {
        let steps = (sweep / ARC_STEP).ceil().max(1.0) as usize;
        (0..=steps)
            .map(|s| {
                let angle = start + sweep * s as f64 / steps as f64;
                Pos2::new(
                    center.x + radius * angle.cos() as f32,
                    center.y + radius * angle.sin() as f32,
                )
            })
            .collect()
    }

    fn draw_legend(ui: &mut egui::Ui, series: &CategorySeries, hovered: Option<usize>) {
        ui.horizontal_wrapped(|ui| {
            for (i, label) in series.labels().iter().enumerate() {
                let color = if hovered == Some(i) {
                    series.hover_colors()[i]
                } else {
                    series.fill_colors()[i]
                };

                // Color square
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color32(color));

                let text = RichText::new(label).size(12.0);
                let text = if hovered == Some(i) {
                    text.strong()
                } else {
                    text
                };
                ui.label(text);
                ui.add_space(10.0);
            }
        });
    }
}
