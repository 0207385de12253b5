use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Right side panel – bar values
// ---------------------------------------------------------------------------

/// Render the table of plotted values.
pub fn values_panel(ui: &mut Ui, state: &ViewerState) {
    ui.heading("Values");
    ui.separator();

    let rows = state.spec.rows();
    let with_series = state.spec.has_legend();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto());
    if with_series {
        table = table.column(Column::auto());
    }
    table
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Category");
            });
            if with_series {
                header.col(|ui| {
                    ui.strong("Series");
                });
            }
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for (category, series, value) in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(category);
                    });
                    if with_series {
                        row.col(|ui| {
                            ui.label(series);
                        });
                    }
                    row.col(|ui| {
                        ui.monospace(format!("{value:.4}"));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save PNG…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} categories, {} series",
            state.spec.categories.len(),
            state.spec.series.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_values, "Values table")
            .clicked()
        {
            state.show_values = !state.show_values;
        }

        if let Some(msg) = &state.status_message {
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Save chart")
        .set_file_name(state.default_file_name())
        .add_filter("PNG image", &["png"])
        .save_file();

    if let Some(path) = file {
        state.save_png(&path);
    }
}
