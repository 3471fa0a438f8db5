use anyhow::Context;
use clap::Parser;
use guessing_game::utils::logger;
use guessing_game::{CliConfig, ConsoleInput, ConsoleOutput, GameSession, SessionOutcome};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // One generator for the whole process.
    let engine = settings.engine().context("failed to set up the game")?;
    tracing::info!(
        "Starting game: {} attempts, range {}..={}",
        settings.max_attempts,
        engine.range().start(),
        engine.range().end()
    );

    let mut session = GameSession::new(engine, settings.max_attempts);
    let mut input = ConsoleInput::new(io::stdin().lock());
    let mut output = ConsoleOutput::new(io::stdout().lock());

    let outcome = session
        .run(&mut input, &mut output)
        .context("game session failed")?;

    match outcome {
        SessionOutcome::Won { attempts } => tracing::info!("Session won in {} attempts", attempts),
        SessionOutcome::Lost { target } => tracing::info!("Session lost, target was {}", target),
        SessionOutcome::Abandoned => tracing::warn!("Session abandoned"),
    }

    Ok(())
}
