use clap::Parser;
use gi_sheet_estimator::app::render::render_text;
use gi_sheet_estimator::config::toml_config::TomlConfig;
use gi_sheet_estimator::core::ConfigProvider;
use gi_sheet_estimator::utils::error::ErrorSeverity;
use gi_sheet_estimator::utils::{logger, validation::Validate};
use gi_sheet_estimator::{evaluate, EstimatorEngine, LocalStorage, ReportPipeline, ZeroSheetPolicy};

#[derive(Parser)]
#[command(name = "toml-estimate")]
#[command(about = "GI sheet estimator driven by a TOML shop configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "duct.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,

    /// Override the visualize setting from config
    #[arg(long)]
    visualize: Option<bool>,

    /// Override duct length from config (m)
    #[arg(long)]
    length: Option<f64>,

    /// Override zero-sheet handling from config
    #[arg(long, value_enum)]
    zero_sheets: Option<ZeroSheetPolicy>,

    /// Dry run - print the estimate without writing report files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    apply_overrides(&mut config, &args);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    let policy = config.zero_sheet_policy();
    let precision = config.precision();

    if args.dry_run {
        tracing::info!("Dry run, no report files will be written");
        let report = evaluate(config.dimensions(), config.visualize())?;
        print!("{}", render_text(&report, policy, precision));
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
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

fn apply_overrides(config: &mut TomlConfig, args: &Args) {
    if let Some(visualize) = args.visualize {
        config.display.get_or_insert_with(Default::default).visualize = Some(visualize);
        tracing::info!("Visualize overridden to: {}", visualize);
    }

    if let Some(length) = args.length {
        config.duct.length = length;
        tracing::info!("Duct length overridden to: {} m", length);
    }

    if let Some(policy) = args.zero_sheets {
        config.display.get_or_insert_with(Default::default).zero_sheets = Some(policy);
    }
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    let dims = config.dimensions();
    println!("📋 Configuration Summary:");
    println!(
        "  Duct: {:.2} m x {:.2} m, length {:.2} m",
        dims.width, dims.depth, dims.length
    );
    println!("  Visualize: {}", config.visualize());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));

    if let Some(archive) = config.archive_name() {
        println!("  Archive: {}", archive);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
