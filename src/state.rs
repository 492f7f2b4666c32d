use stick_spectra::data::filter::DisplayWindow;
use stick_spectra::data::loader::LoadedReport;
use stick_spectra::data::{
    broaden, extract_report, BroadeningConfig, Curve, Dialect, StickSpectrum,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded report (None until the user opens a file).
    pub report: Option<LoadedReport>,

    /// Dialect used to read the report.
    pub dialect: Dialect,

    /// Sticks from the last successful extraction.
    pub spectrum: Option<StickSpectrum>,

    /// Broadening parameters bound to the sliders.
    pub config: BroadeningConfig,

    /// Visible position range.
    pub window: DisplayWindow,

    /// Broadened curve for the current spectrum and config (cached).
    pub curve: Option<Curve>,

    /// Overlay the discrete lines on the curve.
    pub show_sticks: bool,

    /// Error message shown in the UI.
    pub status_message: Option<String>,

    /// Extraction summary shown in the UI.
    pub info_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let dialect = Dialect::Vibrational;
        Self {
            report: None,
            dialect,
            spectrum: None,
            config: BroadeningConfig::for_dialect(dialect),
            window: DisplayWindow::default_for(dialect, &StickSpectrum::default()),
            curve: None,
            show_sticks: true,
            status_message: None,
            info_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded report and extract it with the suggested
    /// dialect (or the current one if nothing was recognised).
    pub fn set_report(&mut self, report: LoadedReport) {
        let dialect = report.suggested.unwrap_or(self.dialect);
        self.report = Some(report);
        self.switch_dialect(dialect);
    }

    /// Change dialect: reset the broadening defaults and re-read the report.
    pub fn switch_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
        self.config = BroadeningConfig::for_dialect(dialect);
        self.reextract();
    }

    /// Run extraction on the loaded report, then broaden.
    pub fn reextract(&mut self) {
        self.spectrum = None;
        self.curve = None;
        self.status_message = None;
        self.info_message = None;

        let Some(report) = &self.report else {
            return;
        };

        let noun = self.dialect.transition_noun();
        match extract_report(&report.text, self.dialect) {
            Ok(result) => {
                if !result.skipped.is_empty() {
                    log::debug!("Skipped malformed anchor lines {:?}", result.skipped);
                }
                if result.spectrum.is_empty() {
                    let msg = if result.anchors_without_data() {
                        format!("Found {} anchor lines but no readable {noun}.", result.anchors)
                    } else {
                        format!("No {noun} found in the file.")
                    };
                    log::warn!("{msg}");
                    self.status_message = Some(msg);
                    return;
                }

                log::info!(
                    "Extracted {} {noun} from {}",
                    result.spectrum.len(),
                    report.path.display()
                );
                self.info_message = Some(format!("Extracted {} {noun}.", result.spectrum.len()));
                self.window = DisplayWindow::default_for(self.dialect, &result.spectrum);
                self.spectrum = Some(result.spectrum);
                self.rebroaden();
            }
            Err(e) => {
                log::error!("Extraction failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Recompute the curve after a config change.
    pub fn rebroaden(&mut self) {
        let Some(spectrum) = &self.spectrum else {
            return;
        };
        match broaden(spectrum, &self.config) {
            Ok(curve) => {
                self.curve = Some(curve);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Broadening failed: {e}");
                self.curve = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Set the display window; invalid bounds leave the old window in place.
    pub fn set_window(&mut self, lo: f64, hi: f64) {
        match DisplayWindow::new(lo, hi) {
            Ok(window) => {
                self.window = window;
                self.status_message = None;
            }
            Err(e) => self.status_message = Some(format!("Error: {e}")),
        }
    }
}
