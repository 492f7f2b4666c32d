use super::dialect::{Dialect, DialectRules, IntensitySource, MalformedPolicy};
use super::error::{Result, SpectrumError};
use super::model::{StickLine, StickSpectrum};

// ---------------------------------------------------------------------------
// Extraction result
// ---------------------------------------------------------------------------

/// Outcome of one scan over a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractReport {
    pub spectrum: StickSpectrum,
    /// Number of lines that matched the dialect's anchor.
    pub anchors: usize,
    /// 1-based line numbers of anchors dropped under [`MalformedPolicy::Skip`].
    pub skipped: Vec<usize>,
}

impl ExtractReport {
    /// Anchors were present but none of them produced a stick line.
    pub fn anchors_without_data(&self) -> bool {
        self.anchors > 0 && self.spectrum.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Extract the stick spectrum of `dialect` from report text.
///
/// A document without any anchor yields an empty spectrum, not an error.
pub fn extract(text: &str, dialect: Dialect) -> Result<StickSpectrum> {
    extract_report(text, dialect).map(|report| report.spectrum)
}

/// Like [`extract`], but also reports how many anchors were seen and which
/// ones were skipped.
pub fn extract_report(text: &str, dialect: Dialect) -> Result<ExtractReport> {
    scan(text, &dialect.rules())
}

// ---------------------------------------------------------------------------
// Generic line-scanning engine
// ---------------------------------------------------------------------------

fn scan(text: &str, rules: &DialectRules) -> Result<ExtractReport> {
    let lines: Vec<&str> = text.lines().collect();
    let mut sticks = Vec::new();
    let mut anchors = 0;
    let mut skipped = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !rules.matches_anchor(line) {
            continue;
        }
        anchors += 1;

        match read_anchor(rules, &lines, idx) {
            Ok(found) => sticks.extend(found),
            Err(reason) => match rules.on_malformed {
                MalformedPolicy::Abort => return Err(SpectrumError::malformed(idx + 1, reason)),
                MalformedPolicy::Skip => skipped.push(idx + 1),
            },
        }
    }

    Ok(ExtractReport {
        spectrum: StickSpectrum::new(sticks),
        anchors,
        skipped,
    })
}

/// Read every stick line reported by the anchor at `lines[idx]`.
fn read_anchor(
    rules: &DialectRules,
    lines: &[&str],
    idx: usize,
) -> std::result::Result<Vec<StickLine>, String> {
    let tokens: Vec<&str> = lines[idx].split_whitespace().collect();

    let positions = rules.position.extract(&tokens)?;
    if positions.is_empty() {
        return Err("anchor line reports no values".to_string());
    }

    let intensities = match &rules.intensity {
        IntensitySource::SameLine(field) => field.extract(&tokens)?,
        IntensitySource::Companion {
            offset,
            label,
            field,
        } => {
            let companion = lines
                .get(idx + offset)
                .ok_or_else(|| format!("'{label}' line expected {offset} lines below is missing"))?;
            if !companion.contains(label) {
                return Err(format!(
                    "line {} does not carry '{label}'",
                    idx + offset + 1
                ));
            }
            let companion_tokens: Vec<&str> = companion.split_whitespace().collect();
            field.extract(&companion_tokens)?
        }
    };

    if positions.len() != intensities.len() {
        return Err(format!(
            "{} positions but {} intensities",
            positions.len(),
            intensities.len()
        ));
    }

    positions
        .into_iter()
        .zip(intensities)
        .map(|(p, i)| {
            StickLine::new(p, i).ok_or_else(|| format!("invalid transition ({p}, {i})"))
        })
        .collect()
}
