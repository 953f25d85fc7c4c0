//! MendIt CLI entry point.
//!
//! Binary name: `mendit`
//!
//! Parses CLI arguments, sets up tracing, resolves the data directory and
//! dispatches to the command handlers.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{ArchiveCommand, Cli, Commands, LiveCommand, QuizCommand};
use mendit_observe::{TracingOptions, init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tracing_options = TracingOptions {
        json: cli.log_json,
        otel: cli.otel,
        ..TracingOptions::from_verbosity(cli.verbose, cli.quiet)
    };
    if let Err(e) = init_tracing(&tracing_options) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mendit", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;
    let result = run(&state, cli).await;

    shutdown_tracing();
    result
}

async fn run(state: &AppState, cli: Cli) -> anyhow::Result<()> {
    let (json, quiet) = (cli.json, cli.quiet);

    match cli.command {
        Commands::Mediate(args) => {
            cli::mediate::run(state, args, json, quiet).await?;
        }

        Commands::Live { action } => match action {
            LiveCommand::Create {
                name,
                relationship,
                tone,
            } => {
                cli::live::create(state, name, relationship, tone, json, quiet).await?;
            }
            LiveCommand::Join { code, name } => {
                cli::live::join(state, code, name, json, quiet).await?;
            }
        },

        Commands::Archive { action } => match action {
            ArchiveCommand::List { search, filter } => {
                cli::archive::list(state, search, &filter, json).await?;
            }
            ArchiveCommand::Show { id } => {
                cli::archive::show(state, &id, json).await?;
            }
            ArchiveCommand::Stats => {
                cli::archive::stats(state, json).await?;
            }
            ArchiveCommand::Clear { force } => {
                cli::archive::clear(state, force, json).await?;
            }
        },

        Commands::Quiz { action } => match action {
            QuizCommand::Take { answers } => {
                cli::quiz::take(state, answers, json).await?;
            }
            QuizCommand::Show => {
                cli::quiz::show(state, json).await?;
            }
            QuizCommand::Reset => {
                cli::quiz::reset(state, json).await?;
            }
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
