use stick_spectra::data::{extract, extract_report, Dialect, SpectrumError};

fn pairs(text: &str, dialect: Dialect) -> Vec<(f64, f64)> {
    extract(text, dialect)
        .unwrap()
        .lines()
        .iter()
        .map(|l| (l.position(), l.intensity()))
        .collect()
}

#[test]
fn vibrational_two_mode_block() {
    let doc = " Frequencies --   100.0   200.0\n Red. masses --   1.1   2.2\n IR Inten   --   5.0   10.0\n";
    assert_eq!(pairs(doc, Dialect::Vibrational), vec![(100.0, 5.0), (200.0, 10.0)]);
}

#[test]
fn electronic_excited_state_line() {
    let doc = " Excited State   1:   Singlet-A   4.12 eV   300.7 nm  f=0.1234\n";
    assert_eq!(pairs(doc, Dialect::Electronic), vec![(300.7, 0.1234)]);
}

#[test]
fn no_anchors_is_empty_not_error() {
    for dialect in Dialect::ALL {
        let report = extract_report("SCF Done:  E(RB3LYP) =  -76.4\n", dialect).unwrap();
        assert!(report.spectrum.is_empty());
        assert_eq!(report.anchors, 0);
    }
}

#[test]
fn empty_document_is_empty_spectrum() {
    assert!(extract("", Dialect::Vibrational).unwrap().is_empty());
    assert!(extract("", Dialect::Electronic).unwrap().is_empty());
}

#[test]
fn dialects_ignore_each_others_anchors() {
    let doc = "\
 Frequencies --   100.0
 Red. masses --   1.0
 IR Inten   --   5.0
 Excited State   1:   Singlet-A   4.12 eV   300.7 nm  f=0.1234
";
    assert_eq!(pairs(doc, Dialect::Vibrational), vec![(100.0, 5.0)]);
    assert_eq!(pairs(doc, Dialect::Electronic), vec![(300.7, 0.1234)]);
}

#[test]
fn vibrational_anchor_at_end_of_file_is_malformed() {
    let doc = " Frequencies --   100.0\n Red. masses --   1.0\n";
    match extract(doc, Dialect::Vibrational) {
        Err(SpectrumError::MalformedAnchor { line, reason }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("missing"), "{reason}");
        }
        other => panic!("expected MalformedAnchor, got {other:?}"),
    }
}
