use clap::Parser;
use gi_sheet_estimator::app::render::render_text;
use gi_sheet_estimator::core::ConfigProvider;
use gi_sheet_estimator::utils::error::ErrorSeverity;
use gi_sheet_estimator::utils::{logger, validation::Validate};
use gi_sheet_estimator::{CliConfig, EstimatorEngine, LocalStorage, ReportPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gi-sheet estimator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let policy = config.zero_sheet_policy();
    let precision = config.precision();

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = EstimatorEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            print!("{}", render_text(&outcome.report, policy, precision));
            println!();
            println!("📁 Report saved to: {}", outcome.output_path);
        }
        Err(e) => {
            tracing::error!(
                "Estimation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

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

    Ok(())
}
