use anyhow::Context;
use clap::Parser;
use small_roster::cli::Menu;
use small_roster::utils::error::{ErrorSeverity, RosterError};
use small_roster::utils::logger;
use small_roster::{AppConfig, CliArgs, Roster};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = AppConfig::resolve(&args).context("failed to load configuration")?;

    if config.json_logs() {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting small-roster");
    tracing::debug!("Resolved config: {:?}", config);

    let mut roster = match Roster::open(config.storage()) {
        Ok(roster) => roster,
        Err(e) => fail(e),
    };
    tracing::info!("Using data file {}", config.data_file.display());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = Menu::new(&mut roster, stdin.lock(), stdout.lock()).run();

    if let Err(e) = result {
        fail(e);
    }

    Ok(())
}

fn fail(e: RosterError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn exit_code(e: &RosterError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
