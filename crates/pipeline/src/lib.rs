//! # quartercast-pipeline
//!
//! One explicit function from a forecast request to display-ready output.
//! No state survives between calls.
//!
//! ```mermaid
//! graph LR
//!     A["PipelineRequest"] -->|"load_series()"| B["CanonicalSeries"]
//!     B -->|"ForecastEngine::fit()"| C["engine"]
//!     C -->|"predict(horizon)"| D["Forecast"]
//!     D -->|"present()"| E["ForecastWindow"]
//!     B --> F["PipelineOutput"]
//!     D --> F
//!     E --> F
//! ```
//!
//! Failures surface as [`PipelineError`]; [`PipelineError::kind`] maps each
//! onto the categories shown to users.

mod error;
mod request;
mod run;

pub use error::{ErrorKind, PipelineError};
pub use request::{PipelineOutput, PipelineRequest, SeriesSource};
pub use run::{load_series, run_pipeline};
