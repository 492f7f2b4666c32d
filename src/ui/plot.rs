use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints};

use stick_spectra::data::filter::{curve_in_window, sticks_in_window, Orientation};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the broadened spectrum and, optionally, its stick lines.
///
/// egui_plot has no reversed axis, so positions are mapped through
/// [`Orientation`] and the tick labels map them back.
pub fn spectrum_plot(ui: &mut Ui, state: &AppState) {
    let curve = match &state.curve {
        Some(c) => c,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a Gaussian output file to view its spectrum  (File → Open…)");
            });
            return;
        }
    };

    let dialect = state.dialect;
    let orientation = Orientation::for_dialect(dialect);
    let unit = dialect.position_unit();
    let window = state.window;

    let view = curve_in_window(curve, &window);
    let sticks = match (&state.spectrum, state.show_sticks) {
        (Some(sp), true) => sticks_in_window(sp, &window),
        _ => Vec::new(),
    };

    let y_max = sticks
        .iter()
        .map(|l| l.intensity())
        .chain(view.y.iter().copied())
        .fold(0.0, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    let (x_left, x_right) = orientation.axis_bounds(&window);

    let points: PlotPoints = view
        .x
        .iter()
        .zip(view.y.iter())
        .map(|(&x, &y)| [orientation.to_axis(x), y])
        .collect();

    Plot::new("spectrum_plot")
        .legend(Legend::default())
        .x_axis_label(format!("{} ({unit})", dialect.position_label()))
        .y_axis_label("Intensity (a.u.)")
        .x_axis_formatter(move |mark, _range| format!("{:.0}", orientation.from_axis(mark.value)))
        .label_formatter(move |name, value| {
            let pos = orientation.from_axis(value.x);
            if name.is_empty() {
                format!("{pos:.1} {unit}\n{:.4}", value.y)
            } else {
                format!("{name}\n{pos:.1} {unit}\n{:.4}", value.y)
            }
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_left, 0.0], [x_right, y_top]));

            plot_ui.line(
                Line::new(points)
                    .name("Simulated spectrum")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );

            for stick in &sticks {
                let x = orientation.to_axis(stick.position());
                plot_ui.line(
                    Line::new(PlotPoints::new(vec![[x, 0.0], [x, stick.intensity()]]))
                        .name("Stick spectrum")
                        .color(Color32::RED)
                        .style(LineStyle::dotted_dense())
                        .width(1.0),
                );
            }
        });
}
