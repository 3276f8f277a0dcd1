// Command-line front end
//
// Usage: cargo run --features cli --bin calculate_emissions -- [inputs.json] [--format json|markdown]
// Reads ActivityInputs JSON from the given file, or stdin when no path is given.

use anyhow::{bail, Context, Result};
use site_emissions::{
    calculate_total_emissions, has_any_input_value, ActivityInputs, BreakdownGenerator, JsonFormatter,
    MarkdownFormatter,
};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Json,
    Markdown,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => bail!("unknown output format '{}' (expected json or markdown)", other),
        }
    }
}

struct Args {
    input: Option<PathBuf>,
    format: OutputFormat,
}

fn parse_args() -> Result<Args> {
    // Environment default, overridden by --format
    let mut format = match std::env::var("EMISSIONS_OUTPUT_FORMAT") {
        Ok(value) => OutputFormat::parse(&value).context("invalid EMISSIONS_OUTPUT_FORMAT")?,
        Err(_) => OutputFormat::Markdown,
    };
    let mut input = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                let value = args.next().context("--format requires a value")?;
                format = OutputFormat::parse(&value)?;
            }
            other if other.starts_with("--format=") => {
                format = OutputFormat::parse(&other["--format=".len()..])?;
            }
            other if input.is_none() => input = Some(PathBuf::from(other)),
            other => bail!("unexpected argument '{}'", other),
        }
    }

    Ok(Args { input, format })
}

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "site_emissions=info,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;

    let inputs = match &args.input {
        Some(path) => {
            tracing::info!("Loading inputs from {}", path.display());
            ActivityInputs::load(path)?
        }
        None => {
            tracing::info!("Reading inputs from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read inputs from stdin")?;
            ActivityInputs::from_json(&buf)?
        }
    };

    if !has_any_input_value(&inputs) {
        println!("No results: select an industry and enter at least one activity value.");
        return Ok(());
    }

    let result = calculate_total_emissions(&inputs);
    tracing::info!(
        "Total emissions: {:.2} tCO2e (location-based), {:.2} tCO2e (market-based)",
        result.totals.total.location,
        result.totals.total.market
    );

    let explanation = BreakdownGenerator::generate(&inputs, &result);
    let output = match args.format {
        OutputFormat::Json => JsonFormatter::format_report(&result, &explanation)?,
        OutputFormat::Markdown => MarkdownFormatter::format(&explanation),
    };
    println!("{}", output);

    Ok(())
}
