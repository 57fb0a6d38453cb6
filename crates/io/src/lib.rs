//! # quartercast-io
//!
//! Turn an uploaded subscriber table into a validated, time-ordered
//! [`CanonicalSeries`], or generate a deterministic synthetic one when no
//! table is supplied.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CSV bytes / file"] -->|"read_csv()"| B["RawTable"]
//!     B -->|"validate_schema()"| C["RawRecord[]"]
//!     C -->|"normalize_period()"| D["NormalizedPeriod[]"]
//!     D -->|"validate_periods()"| E["dates"]
//!     C -->|"validate_counts()"| F["values"]
//!     E --> G["CanonicalSeries"]
//!     F --> G
//!     H["SyntheticConfig"] -->|"generate()"| G
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use quartercast_io::{load_csv, SyntheticSeriesGenerator};
//!
//! let series = load_csv(b"Time period,Subscribers\nQ1 2019,1000\nQ2 2019,1100\n")?;
//! assert_eq!(series.len(), 2);
//!
//! let demo = SyntheticSeriesGenerator::default().generate()?; // 44 quarter ends
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | Raw table and required column names |
//! | `reader` | CSV decoding |
//! | `validate` | Schema, date and numeric checks |
//! | `series` | Canonical series type |
//! | `loader` | End-to-end table loading |
//! | `synthetic` | Seeded demo series |
//! | `error` | Error types |

mod error;
mod loader;
mod reader;
mod record;
mod series;
mod synthetic;
mod validate;

pub use error::IoError;
pub use loader::{load, load_csv, load_csv_file};
pub use reader::{read_csv, read_csv_bytes, read_csv_file};
pub use record::{ColumnIndex, PERIOD_COLUMN, RawRecord, RawTable, SUBSCRIBERS_COLUMN};
pub use series::{CanonicalSeries, SeriesPoint, SeriesSummary};
pub use synthetic::{SyntheticConfig, SyntheticSeriesGenerator};
pub use validate::{MAX_EXAMPLES, coerce_count, validate_counts, validate_periods, validate_schema};
