//! Forecast command: load or synthesize a series, forecast it, report.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use quartercast_forecast::AdditiveModel;
use quartercast_pipeline::{PipelineRequest, SeriesSource, run_pipeline};

use crate::cli::ForecastArgs;
use crate::config::QuartercastConfig;
use crate::convert;
use crate::output;

/// Run the forecast pipeline and print the results.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    // 1. Resolve settings: CLI flags override the config file.
    let config = QuartercastConfig::load(args.config.as_deref())?;
    let horizon = convert::resolve_horizon(&config.forecast, args.horizon)?;
    let show_components = args
        .components_flag()
        .unwrap_or(config.forecast.show_components);
    let model_cfg = convert::build_additive_config(&config.forecast)?;
    let model = AdditiveModel::new(model_cfg).context("invalid forecast configuration")?;

    // 2. Read the upload, or fall back to the demo series.
    let bytes = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading subscriber table");
            Some(
                std::fs::read(path)
                    .with_context(|| format!("failed to read input: {}", path.display()))?,
            )
        }
        None => None,
    };
    let (source, source_label) = match &bytes {
        Some(b) => (SeriesSource::Csv(b), "upload"),
        None => {
            let synthetic =
                convert::build_synthetic_config(&config.synthetic, config.seed, args.seed)?;
            let (start, end) = synthetic.range();
            println!(
                "No input file given. Using an example quarterly dataset ({}-{}).\n",
                start.format("%Y"),
                end.format("%Y")
            );
            (SeriesSource::Synthetic(synthetic), "synthetic")
        }
    };

    // 3. Run the pipeline.
    let request = PipelineRequest {
        source,
        horizon,
        show_components,
    };
    let result = run_pipeline(&request, model)
        .map_err(|e| {
            let kind = e.kind();
            anyhow::Error::new(e).context(kind.label())
        })?;
    info!(
        n_points = result.series.len(),
        n_rows = result.forecast.len(),
        "forecast complete"
    );

    // 4. Report.
    print!("{}", output::render_summary(&result.summary));
    println!();
    println!("Forecast ({horizon} quarters)");
    print!("{}", output::render_window(&result.window));
    if let Some(components) = &result.components {
        println!();
        println!("Trend & Seasonality");
        print!("{}", output::render_components(components));
    }

    if let Some(path) = &args.output {
        output::write_report(path, source_label, horizon, &result)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
