//! A short exploratory session on a small data set
//!
//! Run with: cargo run --example notebook_walkthrough
//! Set `RUST_LOG=debug` to see what each step is doing.

use anyhow::Result;
use explore_stats::prelude::*;
use polars::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Reaction times (ms) of the same eight people under three conditions
    let df = df![
        "quiet" => [312.0, 298.0, 305.0, 330.0, 290.0, 318.0, 301.0, 296.0],
        "music" => [325.0, 310.0, 320.0, 341.0, 300.0, 333.0, 309.0, 480.0],
        "noise" => [350.0, 332.0, 341.0, 362.0, 329.0, 355.0, 338.0, 335.0],
    ]?;
    println!("{df}\n");

    let rounded = df![
        "score" => [3i64, 4, 4, 5, 3, 4, 2, 5, 4, 4, 3, 5],
    ]?;
    let table = rounded.frequency_table("score", FrequencyMode::RawValues)?;
    println!("Frequency table of scores\n{table}\n");

    let fences = df.iqr_fences("music", 1.5)?;
    let trimmed = df.trim_outliers("music", 1.5)?;
    info!(lower = fences.lower, upper = fences.upper, "music fences");
    println!(
        "music: kept {} of {} values inside [{:.1}, {:.1}]\n",
        trimmed.len(),
        df.height(),
        fences.lower,
        fences.upper
    );

    let columns = df.numeric_columns()?;
    let mut analyst = Analyst::stdout(AnalysisConfig::default())?;
    analyst.shapiro_levene(&columns)?;
    println!();
    analyst.friedman(&columns)?;
    println!();
    analyst.kruskal(&columns)?;
    println!();
    analyst.ttest_rel(&columns[..2])?;
    println!();
    analyst.wilcoxon(&columns[..2])?;

    let options = ChartOptions::default().with_title("Reaction time with music");
    let path = std::env::temp_dir().join("notebook_walkthrough.svg");
    let svg = df.plot_hist_box("music", &options)?;
    std::fs::write(&path, svg)?;
    println!("\nChart written to {}", path.display());

    Ok(())
}
