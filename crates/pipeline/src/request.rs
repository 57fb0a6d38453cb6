//! Pipeline inputs and outputs.

use quartercast_forecast::{ComponentRow, Forecast, ForecastWindow};
use quartercast_io::{CanonicalSeries, SeriesSummary, SyntheticConfig};
use serde::Serialize;

/// Where the subscriber series comes from.
#[derive(Debug, Clone)]
pub enum SeriesSource<'a> {
    /// CSV bytes with a header row, e.g. an uploaded file.
    Csv(&'a [u8]),
    /// The deterministic demo series.
    Synthetic(SyntheticConfig),
}

/// One forecast request.
#[derive(Debug, Clone)]
pub struct PipelineRequest<'a> {
    /// Series source.
    pub source: SeriesSource<'a>,
    /// Number of future quarters to forecast.
    pub horizon: usize,
    /// Whether to compute the trend/seasonal decomposition.
    pub show_components: bool,
}

impl<'a> PipelineRequest<'a> {
    /// Request for an uploaded CSV.
    pub fn csv(bytes: &'a [u8], horizon: usize) -> Self {
        Self {
            source: SeriesSource::Csv(bytes),
            horizon,
            show_components: false,
        }
    }

    /// Request for the demo series with the default settings.
    pub fn synthetic(horizon: usize) -> Self {
        Self {
            source: SeriesSource::Synthetic(SyntheticConfig::default()),
            horizon,
            show_components: false,
        }
    }

    /// Sets whether components are computed.
    pub fn with_components(mut self, show: bool) -> Self {
        self.show_components = show;
        self
    }
}

/// Everything a caller needs to render the forecast.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// The validated input series.
    pub series: CanonicalSeries,
    /// First date, latest date, latest value.
    pub summary: SeriesSummary,
    /// History plus future predictions.
    pub forecast: Forecast,
    /// The last `horizon` forecast rows.
    pub window: ForecastWindow,
    /// Trend/seasonal split, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentRow>>,
}
