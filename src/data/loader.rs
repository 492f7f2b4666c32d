use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::dialect::Dialect;
use super::error::SpectrumError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// A report file read into memory, plus the dialect its contents suggest.
#[derive(Debug, Clone)]
pub struct LoadedReport {
    pub path: PathBuf,
    pub text: String,
    /// `None` when neither dialect's anchor occurs in the text.
    pub suggested: Option<Dialect>,
}

/// Read a `.log` / `.out` report from disk.
///
/// Any extension is accepted; what matters is that the bytes decode as text.
pub fn load_report(path: &Path) -> Result<LoadedReport> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading report {}", path.display()))?;
    let text = decode_report(&bytes)
        .with_context(|| format!("decoding report {}", path.display()))?;
    let suggested = Dialect::detect(&text);

    Ok(LoadedReport {
        path: path.to_path_buf(),
        text,
        suggested,
    })
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Turn raw report bytes into text.
///
/// Invalid UTF-8 or an embedded NUL byte (a binary file such as a `.chk`)
/// is a [`SpectrumError::Parse`] at the offending byte offset. A leading
/// UTF-8 byte-order mark is dropped.
pub fn decode_report(bytes: &[u8]) -> std::result::Result<String, SpectrumError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(SpectrumError::Parse {
            offset,
            reason: "NUL byte, not a text report".to_string(),
        });
    }

    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| SpectrumError::Parse {
            offset: e.valid_up_to(),
            reason: "invalid UTF-8".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_strips_bom() {
        let text = decode_report(b"\xEF\xBB\xBF Frequencies --  1.0").unwrap();
        assert_eq!(text, " Frequencies --  1.0");
    }

    #[test]
    fn decode_rejects_binary() {
        let err = decode_report(b"abc\0def").unwrap_err();
        assert_eq!(
            err,
            SpectrumError::Parse {
                offset: 3,
                reason: "NUL byte, not a text report".to_string()
            }
        );
    }

    #[test]
    fn decode_rejects_invalid_utf8_at_offset() {
        let err = decode_report(b"ok\xFF").unwrap_err();
        assert!(matches!(err, SpectrumError::Parse { offset: 2, .. }));
    }

    #[test]
    fn load_report_suggests_dialect() {
        let path = std::env::temp_dir().join(format!("stick_spectra_{}.log", std::process::id()));
        std::fs::write(
            &path,
            " Excited State   1:  Singlet-A  4.12 eV  300.7 nm  f=0.1234\n",
        )
        .unwrap();
        let report = load_report(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(report.suggested, Some(Dialect::Electronic));
    }

    #[test]
    fn load_report_missing_file_has_context() {
        let err = load_report(Path::new("/definitely/not/here.log")).unwrap_err();
        assert!(format!("{err:#}").contains("reading report"));
    }
}
