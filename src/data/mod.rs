/// Data layer: core types, extraction, broadening and windowing.
///
/// Architecture:
/// ```text
///  .log / .out report text
///        │
///        ▼
///   ┌──────────┐
///   │ extract  │  dialect rules + line scan → StickSpectrum
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ broaden  │  Gaussian lobes summed on a grid → Curve
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  display window → visible sticks / curve slice
///   └──────────┘
/// ```

pub mod broaden;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod filter;
pub mod loader;
pub mod model;

pub use broaden::broaden;
pub use dialect::Dialect;
pub use error::{Result, SpectrumError};
pub use extract::{extract, extract_report, ExtractReport};
pub use model::{BroadeningConfig, Curve, StickLine, StickSpectrum};
