//! Sample command: write the synthetic demo series as CSV.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use quartercast_io::SyntheticSeriesGenerator;

use crate::cli::SampleArgs;
use crate::config::QuartercastConfig;
use crate::convert;
use crate::output;

/// Generate the demo series and write it to a file or stdout.
pub fn run(args: SampleArgs) -> Result<()> {
    let _cmd = info_span!("sample").entered();

    let config = QuartercastConfig::load(args.config.as_deref())?;
    let synthetic = convert::build_synthetic_config(&config.synthetic, config.seed, args.seed)?;
    let series = SyntheticSeriesGenerator::new(synthetic)
        .and_then(|g| g.generate())
        .context("failed to generate synthetic series")?;
    info!(n_points = series.len(), "synthetic series generated");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output: {}", path.display()))?;
            output::write_series_csv(BufWriter::new(file), &series)?;
            info!(path = %path.display(), "sample written");
        }
        None => output::write_series_csv(std::io::stdout().lock(), &series)?,
    }
    Ok(())
}
