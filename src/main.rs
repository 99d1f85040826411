//! ansi-highlight - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ansi_highlight::cli::{Cli, Commands, ConfigCommands, GlobalArgs};

fn init_tracing(global: &GlobalArgs) {
    let default_level = if global.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.global);
    let global = &cli.global;

    match cli.command {
        Commands::Spans { file, json } => commands::spans::handle(global, &file, json),
        Commands::Strip { file } => commands::strip::handle(global, &file),
        Commands::Decorations { file, pretty } => {
            commands::decorations::handle(global, &file, pretty)
        }
        Commands::Splice {
            file,
            start,
            count,
            lines,
            json,
        } => commands::splice::handle(global, &file, start, count, &lines, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(global),
            ConfigCommands::Path => commands::config::handle_path(global),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
