use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::{CHANNEL_COUNT, CHANNEL_NAMES, TIMESTAMP_COLUMN};
use crate::data::stats::ChannelStats;
use crate::view::SummarySpec;

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// Virtualized table of the raw recording: the `Timestamp` index plus the
/// six channel columns.
pub fn raw_table(ui: &mut Ui, summary: &SummarySpec) {
    let recording = summary.recording();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .columns(Column::remainder(), CHANNEL_COUNT)
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong(TIMESTAMP_COLUMN);
            });
            for name in CHANNEL_NAMES {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, recording.len(), |mut row| {
                let i = row.index();
                row.col(|ui: &mut Ui| {
                    ui.monospace(&recording.timestamps[i]);
                });
                for samples in &recording.samples {
                    row.col(|ui: &mut Ui| {
                        ui.monospace(format!("{:.6}", samples[i]));
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Per-channel statistics grid
// ---------------------------------------------------------------------------

/// Grid of descriptive statistics, one column per channel.
pub fn summary_table(ui: &mut Ui, summary: &SummarySpec) {
    egui::Grid::new("summary_grid")
        .striped(true)
        .min_col_width(72.0)
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for stats in &summary.channels {
                ui.strong(stats.name);
            }
            ui.end_row();

            ui.label("count");
            for stats in &summary.channels {
                ui.monospace(format!("{}", stats.count));
            }
            ui.end_row();

            stat_row(ui, &summary.channels, "mean", |s| s.mean);
            stat_row(ui, &summary.channels, "std", |s| s.std_dev);
            stat_row(ui, &summary.channels, "min", |s| s.min);
            stat_row(ui, &summary.channels, "25%", |s| s.q1);
            stat_row(ui, &summary.channels, "50%", |s| s.median);
            stat_row(ui, &summary.channels, "75%", |s| s.q3);
            stat_row(ui, &summary.channels, "max", |s| s.max);
        });
}

fn stat_row(
    ui: &mut Ui,
    channels: &[ChannelStats],
    label: &str,
    value: impl Fn(&ChannelStats) -> f64,
) {
    ui.label(label);
    for stats in channels {
        ui.monospace(format!("{:.6}", value(stats)));
    }
    ui.end_row();
}
