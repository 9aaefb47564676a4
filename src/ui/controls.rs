//! Point and window selectors.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::NexrainApp;
use crate::state::WindowHours;

impl NexrainApp {
    /// Render the selector row above the chart
    pub fn render_controls(&mut self, ui: &mut egui::Ui) {
        let mut new_point: Option<String> = None;
        let mut new_window: Option<WindowHours> = None;

        let current_point = self.session.selected_point().unwrap_or_default().to_string();
        let current_window = self.session.window();
        let can_select = self.session.phase().accepts_selection();

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Point").strong());
            ui.add_enabled_ui(can_select, |ui| {
                egui::ComboBox::from_id_salt("point_select")
                    .selected_text(current_point.as_str())
                    .width(220.0)
                    .show_ui(ui, |ui| {
                        for point in self.session.points() {
                            if ui
                                .selectable_label(*point == current_point, point.as_str())
                                .clicked()
                            {
                                new_point = Some(point.clone());
                            }
                        }
                    });
            });

            ui.add_space(16.0);

            ui.label(egui::RichText::new("Window").strong());
            egui::ComboBox::from_id_salt("window_select")
                .selected_text(current_window.label())
                .show_ui(ui, |ui| {
                    for window in WindowHours::iter() {
                        if ui
                            .selectable_label(window == current_window, window.label())
                            .clicked()
                        {
                            new_window = Some(window);
                        }
                    }
                });

            if self.is_loading() {
                ui.add_space(8.0);
                ui.spinner();
            }
        });

        if let Some(point) = new_point {
            self.select_point(&point);
        }
        if let Some(window) = new_window {
            self.set_window(window);
        }
    }
}
