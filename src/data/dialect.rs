use std::fmt;

// ---------------------------------------------------------------------------
// Dialect – which report convention a document follows
// ---------------------------------------------------------------------------

/// The two supported report conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `Frequencies --` blocks with an `IR Inten --` line two lines below.
    Vibrational,
    /// `Excited State ... nm f=...` lines from a TD-DFT run.
    Electronic,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Vibrational, Dialect::Electronic];

    /// The scan rules for this dialect.
    pub fn rules(self) -> DialectRules {
        match self {
            Dialect::Vibrational => DialectRules {
                anchors: &["Frequencies --"],
                position: FieldRule::Tail { skip: 2 },
                intensity: IntensitySource::Companion {
                    offset: 2,
                    label: "IR Inten",
                    field: FieldRule::Tail { skip: 3 },
                },
                on_malformed: MalformedPolicy::Abort,
            },
            Dialect::Electronic => DialectRules {
                anchors: &["Excited State", "f="],
                position: FieldRule::At {
                    index: 6,
                    unit: Some("nm"),
                },
                intensity: IntensitySource::SameLine(FieldRule::Prefixed("f=")),
                on_malformed: MalformedPolicy::Skip,
            },
        }
    }

    /// Suggest the dialect with the most anchor lines in `text`, if any.
    /// Ties go to [`Dialect::Vibrational`].
    pub fn detect(text: &str) -> Option<Dialect> {
        let count = |d: Dialect| {
            let rules = d.rules();
            text.lines().filter(|l| rules.matches_anchor(l)).count()
        };
        let vib = count(Dialect::Vibrational);
        let elec = count(Dialect::Electronic);
        match (vib, elec) {
            (0, 0) => None,
            (v, e) if v >= e => Some(Dialect::Vibrational),
            _ => Some(Dialect::Electronic),
        }
    }

    pub fn position_unit(self) -> &'static str {
        match self {
            Dialect::Vibrational => "cm⁻¹",
            Dialect::Electronic => "nm",
        }
    }

    pub fn position_label(self) -> &'static str {
        match self {
            Dialect::Vibrational => "Wavenumber",
            Dialect::Electronic => "Wavelength",
        }
    }

    pub fn intensity_label(self) -> &'static str {
        match self {
            Dialect::Vibrational => "IR intensity",
            Dialect::Electronic => "Oscillator strength",
        }
    }

    /// Plural noun for one stick line of this dialect.
    pub fn transition_noun(self) -> &'static str {
        match self {
            Dialect::Vibrational => "vibrational modes",
            Dialect::Electronic => "excited states",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Vibrational => write!(f, "IR (vibrational)"),
            Dialect::Electronic => write!(f, "UV-Vis (electronic)"),
        }
    }
}

// ---------------------------------------------------------------------------
// DialectRules – data consumed by the generic scan engine
// ---------------------------------------------------------------------------

/// Everything the line scanner needs to know about one dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectRules {
    /// Substrings that must all occur on a line for it to be an anchor.
    pub anchors: &'static [&'static str],
    /// Where the positions come from on the anchor line.
    pub position: FieldRule,
    /// Where the intensities come from.
    pub intensity: IntensitySource,
    /// What to do with an anchor that cannot be read.
    pub on_malformed: MalformedPolicy,
}

impl DialectRules {
    pub fn matches_anchor(&self, line: &str) -> bool {
        self.anchors.iter().all(|a| line.contains(a))
    }
}

/// How to pull numbers out of a whitespace-tokenized line.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Every token after the first `skip` is a value.
    Tail { skip: usize },
    /// One value at `index`, optionally followed by a unit token.
    At {
        index: usize,
        unit: Option<&'static str>,
    },
    /// The first token carrying this prefix; the prefix is sliced off.
    Prefixed(&'static str),
}

impl FieldRule {
    /// Parse the values this rule selects. The error is a human-readable
    /// reason, turned into a structured error by the caller.
    pub fn extract(&self, tokens: &[&str]) -> std::result::Result<Vec<f64>, String> {
        match self {
            FieldRule::Tail { skip } => tokens
                .iter()
                .skip(*skip)
                .map(|tok| parse_number(tok))
                .collect(),
            FieldRule::At { index, unit } => {
                let tok = tokens
                    .get(*index)
                    .ok_or_else(|| format!("no field at token {index}"))?;
                if let Some(unit) = unit {
                    if tokens.get(index + 1) != Some(unit) {
                        return Err(format!("expected '{unit}' after token {index}"));
                    }
                }
                parse_number(tok).map(|v| vec![v])
            }
            FieldRule::Prefixed(prefix) => {
                let tok = tokens
                    .iter()
                    .find(|t| t.starts_with(prefix))
                    .ok_or_else(|| format!("no '{prefix}' token"))?;
                parse_number(&tok[prefix.len()..]).map(|v| vec![v])
            }
        }
    }
}

fn parse_number(tok: &str) -> std::result::Result<f64, String> {
    tok.parse::<f64>()
        .map_err(|_| format!("'{tok}' is not a number"))
}

/// Source of the intensity values for an anchor.
#[derive(Debug, Clone, PartialEq)]
pub enum IntensitySource {
    /// Read from the anchor line itself.
    SameLine(FieldRule),
    /// Read from the line `offset` lines below the anchor, which must
    /// contain `label`.
    Companion {
        offset: usize,
        label: &'static str,
        field: FieldRule,
    },
}

/// Reaction to an anchor line that cannot be turned into stick lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the whole extraction with a `MalformedAnchor` error.
    ///
    /// The vibrational dialect uses this, and it expects `IR Inten` exactly
    /// two lines below each `Frequencies --` line. Stock Gaussian 09/16
    /// frequency output (with `Frc consts --` at that offset) and
    /// `freq=hpmodes` output are rejected with "does not carry 'IR Inten'".
    Abort,
    /// Drop this anchor's contribution and carry on.
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn tail_rule_skips_label_tokens() {
        let rule = FieldRule::Tail { skip: 2 };
        let got = rule.extract(&tokens("Frequencies --  10.5  20.0  30.25")).unwrap();
        assert_eq!(got, vec![10.5, 20.0, 30.25]);
    }

    #[test]
    fn at_rule_checks_unit() {
        let rule = FieldRule::At {
            index: 1,
            unit: Some("nm"),
        };
        assert_eq!(rule.extract(&tokens("x 250.0 nm")).unwrap(), vec![250.0]);
        assert!(rule.extract(&tokens("x 250.0 eV")).is_err());
        assert!(rule.extract(&tokens("x")).is_err());
    }

    #[test]
    fn prefixed_rule_slices_prefix() {
        let rule = FieldRule::Prefixed("f=");
        assert_eq!(rule.extract(&tokens("a b f=0.0421 c")).unwrap(), vec![0.0421]);
        assert!(rule.extract(&tokens("a b f= 0.0421")).is_err());
        assert!(rule.extract(&tokens("a b")).is_err());
    }

    #[test]
    fn electronic_anchor_needs_both_markers() {
        let rules = Dialect::Electronic.rules();
        assert!(rules.matches_anchor(" Excited State   2:  Singlet-A  5.0 eV  248.0 nm  f=0.01"));
        assert!(!rules.matches_anchor(" Excited State   2:  Singlet-A  5.0 eV  248.0 nm"));
        assert!(!rules.matches_anchor(" f=0.01"));
    }

    #[test]
    fn detect_prefers_dialect_with_more_anchors() {
        assert_eq!(Dialect::detect("nothing here"), None);
        assert_eq!(
            Dialect::detect(" Frequencies --  100.0\n"),
            Some(Dialect::Vibrational)
        );
        let td = " Excited State 1: A 4.0 eV 310.0 nm f=0.1\n Excited State 2: A 4.5 eV 275.5 nm f=0.2\n";
        assert_eq!(Dialect::detect(td), Some(Dialect::Electronic));
    }
}
