use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GeoScopeApp {
    pub state: AppState,
}

impl GeoScopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GeoScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu / status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: file + date range selection ----
        egui::SidePanel::left("selection_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: waveform plot + raw data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.state.view {
                Some((chart, summary)) => {
                    ui.heading(chart.title);
                    plot::waveform_plot(ui, chart, ui.available_height() * 0.55);

                    ui.separator();
                    ui.heading("Raw data");
                    ui.columns(2, |columns| {
                        table::raw_table(&mut columns[0], summary);
                        table::summary_table(&mut columns[1], summary);
                    });
                }
                None => {
                    let hint = match &self.state.status_message {
                        Some(msg) => msg.clone(),
                        None => "Select a recording in the sidebar.".to_string(),
                    };
                    ui.centered_and_justified(|ui: &mut egui::Ui| {
                        ui.heading(hint);
                    });
                }
            }
        });
    }
}
