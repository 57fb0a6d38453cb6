//! # quartercast-calendar
//!
//! Quarter-end date arithmetic and period label normalization.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["label: &str"] -->|"normalize_period()"| B["NormalizedPeriod"]
//!     B -->|"Valid(date)"| C["NaiveDate"]
//!     D["Quarter (1..=4)"] -->|"quarter_end(year, q)"| C
//!     C -->|"next_quarter_end()"| C
//!     C -->|"quarter_ends_after(last, n)"| E["future timeline"]
//!     C -->|"quarter_end_range(start, end)"| F["quarterly range"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use quartercast_calendar::{normalize_period, quarter_ends_after};
//!
//! let date = normalize_period("Q1 2019").date().unwrap(); // 2019-03-31
//! let future = quarter_ends_after(date, 4)?;             // 2019-06-30 .. 2020-03-31
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `quarter` | Quarter newtype and month/quarter end dates |
//! | `normalize` | Period label parsing into dates |
//! | `sequence` | Quarter-end sequence generation |
//! | `error` | Error types |

mod error;
mod normalize;
mod quarter;
mod sequence;

pub use error::CalendarError;
pub use normalize::{NormalizedPeriod, normalize_period};
pub use quarter::{Quarter, containing_quarter_end, is_quarter_end, month_end, quarter_end};
pub use sequence::{next_quarter_end, quarter_end_range, quarter_ends_after};
