use clap::Parser;
use greeter::utils::{logger, validation::Validate};
use greeter::{greet, CliConfig, GreeterError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌 (stderr)
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        let exit_code = e.exit_code();
        if exit_code == 0 {
            tracing::debug!("Output closed early: {}", e);
            return;
        }

        tracing::error!(
            "❌ Greeter failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), GreeterError> {
    config.validate()?;
    let name = config.resolve_name()?;
    greet(&name)?;
    tracing::debug!("✅ Greeting written");
    Ok(())
}
