use thiserror::Error;

/// Failures of the extraction / broadening core.
///
/// Every variant carries enough context for the caller to build a message;
/// the core itself never prints or logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectrumError {
    /// The input is not usable as report text at all.
    #[error("unreadable report at byte {offset}: {reason}")]
    Parse { offset: usize, reason: String },

    /// Broadening was asked for on a spectrum with no stick lines.
    #[error("spectrum has no stick lines to broaden")]
    EmptySpectrum,

    /// A broadening parameter or display window is out of range.
    #[error("invalid {field} = {value}: {reason}")]
    Config {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A vibrational anchor line whose companion intensity line is missing
    /// or does not line up with it. `line` is 1-based.
    #[error("malformed anchor at line {line}: {reason}")]
    MalformedAnchor { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SpectrumError>;

impl SpectrumError {
    pub(crate) fn config(field: &'static str, value: f64, reason: &'static str) -> Self {
        SpectrumError::Config {
            field,
            value,
            reason,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SpectrumError::MalformedAnchor {
            line,
            reason: reason.into(),
        }
    }
}
