use clap::Parser;
use workout_tracker::utils::{logger, validation::Validate};
use workout_tracker::{render_reports, CliConfig, PackagesConfig, WorkoutTracker};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting workout-tracker");
    tracing::debug!("CLI config: {:?}", config);

    // 載入感測器資料
    let packages = match &config.packages {
        Some(path) => {
            tracing::info!("📁 Loading packages from: {}", path);
            match PackagesConfig::from_file(path) {
                Ok(packages) => packages,
                Err(e) => {
                    tracing::error!("❌ Failed to load packages file '{}': {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => {
            tracing::info!("No packages file given, using built-in sample packages");
            PackagesConfig::samples()
        }
    };

    if let Err(e) = packages.validate() {
        tracing::error!("❌ Packages validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let report = WorkoutTracker::new().run(&packages.packages);

    print!("{}", render_reports(&report.messages, config.format)?);

    for failure in &report.failures {
        tracing::error!(
            "❌ Package #{} ({}) failed: {} (Category: {:?})",
            failure.index,
            failure.workout_type,
            failure.error,
            failure.error.category()
        );
        eprintln!(
            "❌ Package #{}: {}",
            failure.index,
            failure.error.user_friendly_message()
        );
        eprintln!("💡 {}", failure.error.recovery_suggestion());
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
