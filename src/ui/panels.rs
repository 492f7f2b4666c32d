use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use stick_spectra::data::filter::{sort_for_display, Orientation};
use stick_spectra::data::Dialect;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – broadening controls and stick table
// ---------------------------------------------------------------------------

/// Slider range for the FWHM, in the dialect's position unit.
fn fwhm_range(dialect: Dialect) -> RangeInclusive<f64> {
    match dialect {
        Dialect::Vibrational => 1.0..=50.0,
        Dialect::Electronic => 0.1..=20.0,
    }
}

fn resolution_range(dialect: Dialect) -> RangeInclusive<f64> {
    match dialect {
        Dialect::Vibrational => 0.1..=10.0,
        Dialect::Electronic => 0.01..=2.0,
    }
}

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Spectrum");
    ui.separator();

    // ---- Dialect selector ----
    ui.strong("Report type");
    let current = state.dialect;
    egui::ComboBox::from_id_salt("dialect")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for dialect in Dialect::ALL {
                if ui
                    .selectable_label(current == dialect, dialect.to_string())
                    .clicked()
                    && dialect != current
                {
                    state.switch_dialect(dialect);
                }
            }
        });
    ui.separator();

    if state.spectrum.is_none() {
        ui.label("No spectrum extracted.");
        return;
    }

    let dialect = state.dialect;
    let unit = dialect.position_unit();

    // ---- Broadening ----
    ui.strong("Gaussian broadening");
    let fwhm = ui.add(
        egui::Slider::new(&mut state.config.fwhm, fwhm_range(dialect))
            .text(format!("FWHM ({unit})")),
    );
    let resolution = ui.add(
        egui::Slider::new(&mut state.config.resolution, resolution_range(dialect))
            .logarithmic(true)
            .text(format!("Step ({unit})")),
    );
    let padding = ui.add(
        egui::DragValue::new(&mut state.config.domain_padding)
            .range(0.0..=2000.0)
            .prefix("Padding: ")
            .suffix(format!(" {unit}")),
    );
    if fwhm.changed() || resolution.changed() || padding.changed() {
        state.rebroaden();
    }
    ui.separator();

    // ---- Display window ----
    ui.strong(format!("{} range ({unit})", dialect.position_label()));
    let mut lo = state.window.lo();
    let mut hi = state.window.hi();
    let changed = ui
        .horizontal(|ui: &mut Ui| {
            let a = ui.add(egui::DragValue::new(&mut lo).speed(1.0).prefix("from "));
            let b = ui.add(egui::DragValue::new(&mut hi).speed(1.0).prefix("to "));
            a.changed() || b.changed()
        })
        .inner;
    if changed {
        state.set_window(lo, hi);
    }
    ui.checkbox(&mut state.show_sticks, "Show stick spectrum");
    ui.separator();

    stick_table(ui, state);
}

/// Collapsible table of the extracted lines, sorted as they appear on the
/// plot, with a button copying them as JSON.
fn stick_table(ui: &mut Ui, state: &AppState) {
    let Some(spectrum) = &state.spectrum else {
        return;
    };
    let dialect = state.dialect;
    let unit = dialect.position_unit();
    let mut lines = spectrum.lines().to_vec();
    sort_for_display(&mut lines, Orientation::for_dialect(dialect));

    let header_text = format!("Stick lines  ({})", lines.len());
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("stick_table")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Copy as JSON").clicked() {
                match serde_json::to_string_pretty(spectrum) {
                    Ok(json) => ui.ctx().copy_text(json),
                    Err(e) => log::error!("Failed to serialise sticks: {e}"),
                }
            }

            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(300.0)
                .column(Column::auto().at_least(90.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong(format!("{} ({unit})", dialect.position_label()));
                    });
                    header.col(|ui| {
                        ui.strong(dialect.intensity_label());
                    });
                })
                .body(|mut body| {
                    for line in &lines {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(format!("{:.2}", line.position()));
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.4}", line.intensity()));
                            });
                        });
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(report) = &state.report {
            let name = report
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(name);
        }

        if let Some(msg) = &state.info_message {
            ui.separator();
            ui.label(msg);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Gaussian output")
        .add_filter("Gaussian output", &["log", "out"])
        .add_filter("Text", &["txt"])
        .pick_file();

    if let Some(path) = file {
        match stick_spectra::data::loader::load_report(&path) {
            Ok(report) => {
                log::info!(
                    "Loaded {} ({} bytes, suggested dialect {:?})",
                    report.path.display(),
                    report.text.len(),
                    report.suggested
                );
                state.set_report(report);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
