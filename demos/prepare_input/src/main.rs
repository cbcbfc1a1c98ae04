use anyhow::{Context, Result};
use clap::Parser;
use quantline_artifact::Artifact;
use quantline_core::{run_pipeline, PipelineConfig, SampleSet};
use quantline_fit::LeastSquaresFitter;
use quantline_math::unscale;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output artifact file
    #[arg(long, default_value = "input.json")]
    output: PathBuf,

    /// Fixed-point scale factor
    #[arg(long, default_value_t = 1000)]
    scale: i64,

    /// Buffer fraction numerator
    #[arg(long, default_value_t = 5)]
    buffer_num: i64,

    /// Buffer fraction denominator
    #[arg(long, default_value_t = 100)]
    buffer_den: i64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Reference evidence: roughly y = 4x + 5 with manual noise.
    let xs: Vec<i64> = (1..=10).collect();
    let ys = [9.2, 12.8, 17.1, 21.5, 24.8, 29.1, 32.7, 37.2, 41.0, 45.3];

    let samples = SampleSet::from_columns(&xs, &ys).context("build sample set")?;
    let config = PipelineConfig {
        scale_factor: args.scale,
        buffer_num: args.buffer_num,
        buffer_den: args.buffer_den,
    };

    let run = run_pipeline(&LeastSquaresFitter, &samples, &config).context("run pipeline")?;

    println!(
        "Fit (scaled {}x): m={} c={}",
        args.scale, run.model.slope, run.model.intercept
    );
    println!("Point | Real Y (sc) | Pred Y (sc) | Diff | Sq Error");
    for (i, record) in run.records.iter().enumerate() {
        println!(
            " {:4} | {:11} | {:11} | {:4} | {}",
            xs[i], run.ys[i], record.predicted, record.residual, record.squared
        );
    }

    let scale_sq = args
        .scale
        .checked_mul(args.scale)
        .context("scale factor squared overflows i64")?;
    println!(
        "Total SSE: {} (unscaled: {:.6})",
        run.sse,
        unscale(run.sse, scale_sq)
    );
    println!(
        "Threshold: {} (SSE + {}/{})",
        run.threshold, args.buffer_num, args.buffer_den
    );

    Artifact::from_run(&run)
        .write_to(&args.output)
        .with_context(|| format!("write artifact to {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
