//! DBZ chart rendering.

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::app::NexrainApp;
use crate::chart::tooltip_title;
use crate::state::{CHART_LINE_COLOR, Y_AXIS_MAX, Y_AXIS_MIN, Y_AXIS_STEP};
use crate::status::format_axis_time;

impl NexrainApp {
    /// Render the chart for the current visible slice
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        let Some(chart) = self.session.chart() else {
            let text = if self.is_loading() {
                "Loading…"
            } else {
                "No series loaded"
            };
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(text)
                        .size(20.0)
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        };

        let (x_min, x_max) = chart.x_bounds();
        let line_points: PlotPoints = chart.line_points().into_iter().collect();
        let color = egui::Color32::from_rgb(
            CHART_LINE_COLOR[0],
            CHART_LINE_COLOR[1],
            CHART_LINE_COLOR[2],
        );

        // Window selector is the only view control: bounds are pinned every frame
        let plot = Plot::new("dbz_chart")
            .x_axis_label("Date / Time")
            .y_axis_label("DBZ")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .x_axis_formatter(|mark, _range| format_axis_time(mark.value as i64))
            .y_grid_spacer(egui_plot::uniform_grid_spacer(|_input| {
                [Y_AXIS_STEP, Y_AXIS_STEP * 2.0, Y_AXIS_STEP * 6.0]
            }))
            .label_formatter(move |_name, value| match chart.nearest(value.x) {
                Some(point) => point.tooltip(),
                None => tooltip_title(value.x),
            });

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [x_min, Y_AXIS_MIN],
                [x_max, Y_AXIS_MAX],
            ));

            plot_ui.line(Line::new("DBZ", line_points).color(color).width(1.5));
        });
    }
}
