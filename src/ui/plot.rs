use eframe::egui::Ui;
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotPoints};

use crate::color::channel_colors;
use crate::view::ChartSpec;

// ---------------------------------------------------------------------------
// Waveform plot (central panel)
// ---------------------------------------------------------------------------

/// Render the six geophone traces against the fixed time axis.
pub fn waveform_plot(ui: &mut Ui, chart: &ChartSpec, height: f32) {
    let colors = channel_colors();
    let ticks = chart.x_tick_count.max(1) as f64;

    Plot::new("waveform_plot")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .x_grid_spacer(move |input: GridInput| fixed_count_marks(input, ticks))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, (name, samples)) in chart.series().enumerate() {
                let points: PlotPoints = chart
                    .time_axis
                    .iter()
                    .zip(samples)
                    .map(|(&t, &amp)| [t, amp])
                    .collect();

                let line = Line::new(points)
                    .name(name)
                    .color(colors[i % colors.len()])
                    .width(1.0);

                plot_ui.line(line);
            }
        });
}

/// Evenly spaced grid marks so the visible span always shows the configured
/// tick count, whatever the zoom level.
fn fixed_count_marks(input: GridInput, ticks: f64) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = ((max - min) / ticks).max(f64::EPSILON);

    let mut marks = Vec::new();
    let mut value = (min / step).floor() * step;
    while value <= max {
        marks.push(GridMark {
            value,
            step_size: step,
        });
        value += step;
    }
    marks
}
