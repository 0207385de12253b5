use anyhow::{anyhow, Result};
use eframe::egui;

use crate::chart::BarChartSpec;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartViewerApp {
    pub state: ViewerState,
}

impl ChartViewerApp {
    pub fn new(spec: BarChartSpec) -> Self {
        Self {
            state: ViewerState::new(spec),
        }
    }
}

impl eframe::App for ChartViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: bar values ----
        if self.state.show_values {
            egui::SidePanel::right("values_panel")
                .default_width(260.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::values_panel(ui, &self.state);
                });
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::bar_chart_plot(ui, &self.state);
        });
    }
}

/// Open a window showing `spec` and block until it is closed.
pub fn run_viewer(spec: BarChartSpec) -> Result<()> {
    let (width, height) = spec.size;
    let title = spec.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartViewerApp::new(spec)))),
    )
    .map_err(|e| anyhow!("chart viewer failed: {e}"))
}
