use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – file selector and date range
// ---------------------------------------------------------------------------

/// Render the selection sidebar. Widgets edit the *pending* values only;
/// the Update button applies them.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Recordings");
    ui.separator();

    // Clone so we can mutate state inside the widget closures.
    let files: Vec<String> = state.catalog().to_vec();
    if files.is_empty() {
        ui.label("No recordings found in the data folder.");
        return;
    }

    ui.strong("Select a file");
    let current = state.pending_file.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("file_select")
        .width(ui.available_width())
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for file in &files {
                if ui.selectable_label(current == *file, file).clicked() {
                    state.pending_file = Some(file.clone());
                }
            }
        });

    ui.add_space(8.0);
    ui.strong("Select range of data acquisition");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("From");
        ui.add(DatePickerButton::new(&mut state.pending_range.0).id_salt("range_start"));
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label("To");
        ui.add(DatePickerButton::new(&mut state.pending_range.1).id_salt("range_end"));
    });

    ui.add_space(8.0);
    if ui.button("Update").clicked() {
        state.confirm();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(file) = &state.selection.file {
            ui.label(file);
        }
        if let Some((chart, _)) = &state.view {
            ui.label(format!(
                "{} samples × {} channels",
                chart.sample_count(),
                chart.series().count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open geophone data folder")
        .pick_folder();

    if let Some(dir) = dir {
        state.set_data_dir(dir);
    }
}
