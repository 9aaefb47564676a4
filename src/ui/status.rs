//! Status line and view/count indicators.

use eframe::egui;

use crate::app::NexrainApp;
use crate::status::{format_timestamp, INVALID_TIME};

fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

impl NexrainApp {
    /// Render the status message with the view range and point count
    pub fn render_status(&mut self, ui: &mut egui::Ui) {
        let status = self.session.status();
        let chart = self.session.chart();

        ui.horizontal(|ui| {
            if !status.message.is_empty() {
                egui::Frame::NONE
                    .fill(rgb(status.kind.color()))
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&status.message)
                                .color(rgb(status.kind.text_color()))
                                .size(14.0),
                        );
                    });
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (view, count) = match chart {
                    Some(chart) => {
                        let (start, end) = chart.x_bounds();
                        (
                            format!(
                                "view: {} → {}",
                                format_timestamp(start as i64),
                                format_timestamp(end as i64)
                            ),
                            format!("count: {}", chart.points().len()),
                        )
                    }
                    None => (format!("view: {}", INVALID_TIME), "count: 0".to_string()),
                };
                ui.label(egui::RichText::new(count).color(egui::Color32::GRAY));
                ui.separator();
                ui.label(egui::RichText::new(view).color(egui::Color32::GRAY));
            });
        });
    }
}
