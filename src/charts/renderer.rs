//! Static Chart Renderer
//! Rasterizes a pie chart into a PNG for export. Shares slice geometry
//! with the interactive plotter so both agree on what is drawn.

use super::plotter::{slice_at, slice_sweeps, START_ANGLE};
use super::PieChart;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode PNG: {0}")]
    Png(#[from] image::ImageError),
}

pub struct StaticPieRenderer;

impl StaticPieRenderer {
    /// Render the pie onto a white square image, `size` pixels per side.
    /// Each pixel inside the circle is mapped to its slice by angle.
    pub fn render(chart: &PieChart, size: u32) -> RgbaImage {
        let mut img = ImageBuffer::from_pixel(size, size, WHITE);

        let sweeps = slice_sweeps(chart.series.values());
        if sweeps.is_empty() {
            return img;
        }

        let center = size as f64 / 2.0;
        let radius = center * 0.92;
        let fills = chart.series.fill_colors();

        for y in 0..size {
            for x in 0..size {
                let dx = x as f64 + 0.5 - center;
                let dy = y as f64 + 0.5 - center;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                // Pixel dead on the center has no angle; give it slice 0.
                let angle = if dx == 0.0 && dy == 0.0 {
                    START_ANGLE
                } else {
                    dy.atan2(dx)
                };
                if let Some(i) = slice_at(angle, &sweeps) {
                    let c = fills[i];
                    img.put_pixel(x, y, Rgba([c.r, c.g, c.b, 255]));
                }
            }
        }

        img
    }

    /// Render and PNG-encode in memory.
    pub fn render_png_bytes(chart: &PieChart, size: u32) -> Result<Vec<u8>, RenderError> {
        let img = Self::render(chart, size);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::presets::{color_sample_chart, COLOR_PIE_TARGET};
    use crate::charts::{ChartKind, RenderOptions};
    use crate::data::CategorySeries;
    use crate::targets::TargetRegistry;

    fn color_chart() -> PieChart {
        let mut targets = TargetRegistry::new();
        targets.register(COLOR_PIE_TARGET);
        color_sample_chart(&targets, COLOR_PIE_TARGET).unwrap()
    }

    #[test]
    fn top_of_circle_gets_first_fill_color() {
        let img = StaticPieRenderer::render(&color_chart(), 100);
        // Halfway up from center toward 12 o'clock: inside slice 0 (#F7464A).
        let px = img.get_pixel(50, 25);
        assert_eq!(px, &Rgba([0xF7, 0x46, 0x4A, 255]));
    }

    #[test]
    fn corners_stay_white() {
        let img = StaticPieRenderer::render(&color_chart(), 100);
        assert_eq!(img.get_pixel(1, 1), &WHITE);
        assert_eq!(img.get_pixel(98, 98), &WHITE);
    }

    #[test]
    fn zero_total_series_renders_blank() {
        let mut targets = TargetRegistry::new();
        targets.register("blank");
        let series = CategorySeries::from_hex(
            &["a", "b"],
            &[0.0, 0.0],
            &["#111111", "#222222"],
            &["#111111", "#222222"],
        )
        .unwrap();
        let chart = PieChart::new(
            ChartKind::Pie,
            series,
            RenderOptions::default(),
            targets.resolve("blank").unwrap(),
        );
        let img = StaticPieRenderer::render(&chart, 50);
        assert!(img.pixels().all(|p| p == &WHITE));
    }

    #[test]
    fn encodes_png_bytes() {
        let bytes = StaticPieRenderer::render_png_bytes(&color_chart(), 64).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
