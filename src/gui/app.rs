//! PieView Main Application
//! Main window wiring: render targets, the package loader, and the two
//! chart configurators.

use crate::charts::presets::{self, COLOR_PIE_TARGET, SCHEDULE_PIE_TARGET};
use crate::charts::{PieChart, StaticPieRenderer};
use crate::gui::{ChartViewer, ViewerAction};
use crate::loader::{LoadResult, PackageLoader};
use crate::targets::TargetRegistry;
use tracing::{error, info};

/// Pixel size of exported chart images.
const EXPORT_SIZE: u32 = 800;

/// Main application window.
pub struct PieViewApp {
    targets: TargetRegistry,
    color_chart: PieChart,
    schedule_chart: Option<PieChart>,
    loader: PackageLoader,
    viewer: ChartViewer,
    status: String,
}

impl PieViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let mut targets = TargetRegistry::new();
        targets.register(COLOR_PIE_TARGET);
        targets.register(SCHEDULE_PIE_TARGET);

        // A missing target here is fatal: the window is unusable without
        // its first chart, so startup aborts.
        let color_chart = presets::color_sample_chart(&targets, COLOR_PIE_TARGET)?;

        // Kick off the schedule package load; the chart is configured
        // once the completion signal is polled.
        let loader = PackageLoader::load();

        Ok(Self {
            targets,
            color_chart,
            schedule_chart: None,
            loader,
            viewer: ChartViewer::new(),
            status: "Loading schedule chart package...".to_string(),
        })
    }

    /// Check for the load-completion signal and configure the schedule
    /// chart once it arrives.
    fn check_package(&mut self) {
        match self.loader.poll() {
            Some(LoadResult::Complete(package)) => {
                match presets::day_schedule_chart(&self.targets, SCHEDULE_PIE_TARGET, package) {
                    Ok(chart) => {
                        self.schedule_chart = Some(chart);
                        self.status = "Ready".to_string();
                    }
                    Err(e) => {
                        error!("schedule chart configuration failed: {e}");
                        self.status = format!("Error: {e}");
                    }
                }
            }
            Some(LoadResult::Error(e)) => {
                self.status = format!("Error: {e}");
            }
            None => {}
        }
    }

    /// Ask for an output path, render the chart to PNG and open it.
    fn export_chart(&mut self, chart: &PieChart) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("{}.png", chart.target.id()))
            .save_file()
        else {
            return; // User cancelled
        };

        let result = StaticPieRenderer::render_png_bytes(chart, EXPORT_SIZE)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(anyhow::Error::from));

        match result {
            Ok(()) => {
                info!(path = %path.display(), "chart exported");
                if let Err(e) = open::that(&path) {
                    error!("failed to open exported chart: {e}");
                }
                self.status = format!("Exported {}", path.display());
            }
            Err(e) => {
                error!("chart export failed: {e}");
                self.status = format!("Export error: {e}");
            }
        }
    }
}

impl eframe::App for PieViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_package();

        // Keep repainting while the package load is outstanding.
        if self.loader.is_pending() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let action = self
                .viewer
                .show(ui, &self.color_chart, self.schedule_chart.as_ref());

            match action {
                ViewerAction::ExportColor => {
                    let chart = self.color_chart.clone();
                    self.export_chart(&chart);
                }
                ViewerAction::ExportSchedule => {
                    if let Some(chart) = self.schedule_chart.clone() {
                        self.export_chart(&chart);
                    }
                }
                ViewerAction::None => {}
            }
        });
    }
}
