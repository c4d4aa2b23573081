use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;

use bbs_bridge::AppError;
use bbs_bridge::app;
use bbs_bridge::commands::Cli;
use bbs_bridge::commands::Commands;
use bbs_bridge::telemetry::init_tracing;
use bbs_bridge_daemon::BridgeConfig;

fn main() {
    // Before parsing so `.env` values can satisfy clap's `env` fallbacks.
    let env_file = dotenvy::dotenv();

    if let Err(e) = run(env_file) {
        eprintln!("Error: {}", e);
        if let Some(suggestion) = e.suggestion() {
            eprintln!("Suggestion: {}", suggestion);
        }
        std::process::exit(e.exit_code());
    }
}

fn run(env_file: dotenvy::Result<PathBuf>) -> Result<(), AppError> {
    let cli = Cli::parse();
    let _telemetry = init_tracing("warn");
    app::report_env_file(&env_file);

    match cli.subcommand() {
        Commands::Serve => {
            let mut config = BridgeConfig::from_env();
            if let Some(endpoint) = cli.endpoint {
                config = config.with_endpoint(endpoint);
            }
            if let Some(origin) = cli.origin {
                config = config.with_origin(origin);
            }
            app::serve(config)
        }
        Commands::Tools => app::print_tools(&mut std::io::stdout().lock()),
        Commands::Inspect { file, summary, raw } => {
            app::inspect(&file, raw, summary, &mut std::io::stdout().lock())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "bbs-bridge", &mut std::io::stdout());
            Ok(())
        }
    }
}
