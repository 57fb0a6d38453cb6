//! # quartercast-forecast
//!
//! Fit a trend/seasonality model to a quarterly subscriber series, predict
//! forward with uncertainty bounds, and cut the display window.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["CanonicalSeries"] -->|"engine.fit()"| B["ForecastEngine&lt;M&gt;"]
//!     B -->|"predict(horizon)"| C["Forecast (history + future)"]
//!     B -->|"components(&forecast)"| D["ComponentRow[]"]
//!     C -->|"present(rows, horizon)"| E["ForecastWindow"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use quartercast_forecast::{AdditiveModel, ForecastEngine, present};
//!
//! let mut engine = ForecastEngine::new(AdditiveModel::default());
//! engine.fit(&series)?;
//! let forecast = engine.predict(8)?;
//! let window = present(forecast.rows(), 8);
//! ```
//!
//! ## Model Glossary
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | k, m | base growth rate and offset of the trend |
//! | δ_j | rate change at changepoint s_j |
//! | a_i, b_i | yearly Fourier coefficients |
//! | σ | residual noise standard deviation |
//! | λ | mean absolute δ, scale of simulated future rate changes |

mod additive;
mod config;
mod engine;
mod error;
mod model;
mod window;

pub(crate) mod linalg;

pub use additive::{AdditiveModel, FitSummary};
pub use config::{AdditiveConfig, YearlySeasonality};
pub use engine::{ComponentRow, Forecast, ForecastEngine, ForecastRow, MIN_TRAINING_POINTS};
pub use error::ForecastError;
pub use model::{Decomposition, ForecastModel, Prediction};
pub use window::{ForecastWindow, WindowRow, present};
