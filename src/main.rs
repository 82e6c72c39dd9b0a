use clap::Parser;
use geo_processor::utils::error::{ErrorSeverity, GeoError};
use geo_processor::utils::{logger, validation::Validate};
use geo_processor::{
    build_checked_processor, parse_non_empty, CliConfig, InputSource, OutputFormat,
    ProcessedPoints,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting geo-processor CLI");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> Result<(), GeoError> {
    let config = cli.resolve()?;
    config.validate()?;
    let format = config.output_format()?;

    let source = InputSource::from_args(cli.input.as_deref(), cli.sample.as_deref())?;
    tracing::info!("📁 Reading coordinates from {}", source.describe());
    let text = source.read_text()?;

    let points = parse_non_empty(&text)?;
    tracing::info!("Parsed {} points", points.len());

    let processor = build_checked_processor(&config).await?;
    let result = processor.process(&points).await?;
    tracing::info!("✅ Processed {} points", points.len());

    match format {
        OutputFormat::Json => {
            let json = if config.output.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
        }
        OutputFormat::Text => print_summary(&result, points.len()),
    }

    Ok(())
}

fn print_summary(result: &ProcessedPoints, count: usize) {
    println!("Points:   {}", count);
    println!(
        "Centroid: {:.6}, {:.6}",
        result.centroid.lat, result.centroid.lng
    );
    println!(
        "Bounds:   N {:.6}  S {:.6}  E {:.6}  W {:.6}",
        result.bounds.north, result.bounds.south, result.bounds.east, result.bounds.west
    );
}
