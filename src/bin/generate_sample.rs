//! Writes two small synthetic reports, `sample_freq.log` (vibrational) and
//! `sample_td.log` (electronic), for trying the viewer without a real job.
//!
//! Usage: `cargo run --bin generate_sample [output-dir]`

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// eV·nm
const HC_EV_NM: f64 = 1239.841_984;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * u
    }
}

/// Frequency blocks of up to three modes, `IR Inten` two lines below each
/// `Frequencies` line.
fn vibrational_report(rng: &mut SimpleRng) -> String {
    let centres = [
        420.0, 610.0, 780.0, 1050.0, 1180.0, 1320.0, 1460.0, 1610.0, 1720.0, 2950.0, 3050.0,
        3420.0,
    ];
    let modes: Vec<(f64, f64)> = centres
        .iter()
        .map(|&c| (c + rng.uniform(-15.0, 15.0), rng.uniform(0.0, 150.0)))
        .collect();

    let mut out = String::new();
    out.push_str(" Harmonic frequencies (cm**-1), IR intensities (KM/Mole)\n");
    for (block_no, block) in modes.chunks(3).enumerate() {
        let first = block_no * 3 + 1;
        let mut index_line = String::new();
        let mut freq_line = String::from(" Frequencies --");
        let mut mass_line = String::from(" Red. masses --");
        let mut inten_line = String::from(" IR Inten    --");
        for (k, &(freq, inten)) in block.iter().enumerate() {
            let _ = write!(index_line, "{:>23}", first + k);
            let _ = write!(freq_line, "{freq:>23.4}");
            let _ = write!(mass_line, "{:>23.4}", rng.uniform(1.0, 12.0));
            let _ = write!(inten_line, "{inten:>23.4}");
        }
        for line in [index_line, freq_line, mass_line, inten_line] {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// TD-DFT excitation summary lines.
fn electronic_report(rng: &mut SimpleRng) -> String {
    let mut out = String::from(" Excitation energies and oscillator strengths:\n\n");
    let mut nm = 420.0;
    for state in 1..=10 {
        nm -= rng.uniform(10.0, 30.0);
        let ev = HC_EV_NM / nm;
        let f = if state % 4 == 0 { 0.0 } else { rng.uniform(0.0, 0.8) };
        let _ = writeln!(
            out,
            " Excited State {state:>3}:      Singlet-A    {ev:>8.4} eV  {nm:>7.2} nm  f={f:.4}  <S**2>=0.000"
        );
    }
    out
}

fn write_report(dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let freq = write_report(&dir, "sample_freq.log", &vibrational_report(&mut rng))?;
    let td = write_report(&dir, "sample_td.log", &electronic_report(&mut rng))?;

    println!("Wrote {} and {}", freq.display(), td.display());
    Ok(())
}
