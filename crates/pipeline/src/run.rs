//! The request-scoped load → fit → predict → present chain.

use quartercast_forecast::{ForecastEngine, ForecastModel, present};
use quartercast_io::{CanonicalSeries, SyntheticSeriesGenerator, load_csv};
use tracing::info;

use crate::error::PipelineError;
use crate::request::{PipelineOutput, PipelineRequest, SeriesSource};

/// Builds the canonical series for `source`.
///
/// # Errors
///
/// Returns [`PipelineError::Load`] for any loading or generation failure.
pub fn load_series(source: &SeriesSource<'_>) -> Result<CanonicalSeries, PipelineError> {
    let series = match source {
        SeriesSource::Csv(bytes) => load_csv(bytes)?,
        SeriesSource::Synthetic(config) => {
            SyntheticSeriesGenerator::new(config.clone())?.generate()?
        }
    };
    Ok(series)
}

/// Runs one forecast request end to end.
///
/// The engine takes ownership of `model`; nothing is shared between calls.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidHorizon`] for a zero horizon before any
/// work is done, otherwise the first load or forecast failure. There is no
/// partial output.
#[tracing::instrument(skip_all, fields(horizon = request.horizon, components = request.show_components))]
pub fn run_pipeline<M: ForecastModel>(
    request: &PipelineRequest<'_>,
    model: M,
) -> Result<PipelineOutput, PipelineError> {
    if request.horizon == 0 {
        return Err(PipelineError::InvalidHorizon {
            horizon: request.horizon,
        });
    }

    let series = load_series(&request.source)?;
    info!(n_points = series.len(), "series ready");

    let mut engine = ForecastEngine::new(model);
    engine.fit(&series)?;
    let forecast = engine.predict(request.horizon)?;
    let window = present(forecast.rows(), request.horizon);
    let components = if request.show_components {
        Some(engine.components(&forecast)?)
    } else {
        None
    };

    Ok(PipelineOutput {
        summary: series.summary(),
        series,
        forecast,
        window,
        components,
    })
}
