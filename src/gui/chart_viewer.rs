//! Chart Viewer Widget
//! Central panel showing the two chart cards side by side, with a
//! loading placeholder until the schedule chart package arrives.

use crate::charts::{PieChart, PiePlotter};
use egui::{Color32, RichText, ScrollArea};

const CARD_WIDTH: f32 = 440.0;
const CARD_SPACING: f32 = 15.0;
const PLACEHOLDER_HEIGHT: f32 = 360.0;
const CARD_BORDER: Color32 = Color32::from_rgb(108, 117, 125);

/// Action requested from within the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    None,
    ExportColor,
    ExportSchedule,
}

/// Draws the two chart cards.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        color_chart: &PieChart,
        schedule_chart: Option<&PieChart>,
    ) -> ViewerAction {
        let mut action = ViewerAction::None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    if Self::draw_chart_card(ui, "Color Sample", color_chart) {
                        action = ViewerAction::ExportColor;
                    }
                    ui.add_space(CARD_SPACING);
                    match schedule_chart {
                        Some(chart) => {
                            if Self::draw_chart_card(ui, "Day Schedule", chart) {
                                action = ViewerAction::ExportSchedule;
                            }
                        }
                        None => Self::draw_loading_card(ui),
                    }
                });
            });

        action
    }

    /// Draw a single chart card. Returns true if export was clicked.
    fn draw_chart_card(ui: &mut egui::Ui, heading: &str, chart: &PieChart) -> bool {
        let mut export_clicked = false;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, CARD_BORDER))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(heading).size(18.0).strong());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Export PNG").clicked() {
                                    export_clicked = true;
                                }
                            },
                        );
                    });

                    ui.add_space(8.0);
                    PiePlotter::draw(ui, chart);
                });
            });

        export_clicked
    }

    fn draw_loading_card(ui: &mut egui::Ui) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, CARD_BORDER))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.set_height(PLACEHOLDER_HEIGHT);
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Loading chart package...").size(14.0));
                });
            });
    }
}
