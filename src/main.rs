// src/main.rs
use clap::Parser;
use env_logger::Env;
use log::{debug, warn};

use vanishing_ideal::algorithms::{execute, VanishingCommand};
use vanishing_ideal::cli::Cli;
use vanishing_ideal::config::{OutputFormat, VanishingConfig};
use vanishing_ideal::core::operation_counter::OperationCounter;
use vanishing_ideal::core::report::{format_text, CommandReport};

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => VanishingConfig::load_from_file(path),
        None => VanishingConfig::load(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (VanishingConfig::default(), Some(e)),
    };
    cli.apply(&mut config);

    // Initialize the logger
    let env = Env::default()
        .filter_or("VANISHING_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("VANISHING_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Some(e) = load_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }
    debug!("Configuration: {:?}", config);

    let (command, argument) = cli.command.invocation();
    if let Err(message) = run(&config, command, argument.as_deref()) {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}

fn run(config: &VanishingConfig, command: VanishingCommand, argument: Option<&str>) -> Result<(), String> {
    let ring = config.ring()?;
    let mut counter = if config.instrumentation { OperationCounter::new() } else { OperationCounter::disabled() };

    let result = execute(command, &ring, argument, &mut counter)?;

    match config.output_format {
        OutputFormat::Text => println!("{}", format_text(&result)),
        OutputFormat::Json => println!("{}", CommandReport::new(command.name(), ring, &result, &counter).to_json()?),
    }
    counter.report();
    Ok(())
}
