use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the chart in the central panel.
pub fn bar_chart_plot(ui: &mut Ui, state: &ViewerState) {
    let spec = &state.spec;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&spec.title);
    });

    let axis = spec.clone();
    let mut plot = Plot::new("bar_chart")
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .x_axis_formatter(move |mark, _range| {
            axis.category_at(mark.value).unwrap_or_default().to_string()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if spec.has_legend() {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &spec.series {
            let bars: Vec<Bar> = series
                .bars
                .iter()
                .map(|b| {
                    Bar::new(b.center, b.height)
                        .width(spec.bar_width)
                        .name(&spec.categories[b.category])
                        .fill(Color32::from(b.color))
                })
                .collect();

            let mut chart = BarChart::new(bars).color(Color32::from(series.color));
            if let Some(name) = &series.name {
                chart = chart.name(name);
            }
            plot_ui.bar_chart(chart);
        }
    });
}
