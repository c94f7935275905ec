//! CLI entry point for recipe-catalog
//!
//! Provides a command-line interface for browsing the ingredient catalog
//! and running an interactive recipe session.

use clap::{Parser, Subcommand};
use colored::*;
use log::info;
use recipe_catalog::config::Settings;
use recipe_catalog::ui::{Controller, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive recipe session (default)
    Shell,

    /// Print the ingredient catalog
    Ingredients {
        /// Number of columns (overrides settings)
        #[arg(long)]
        columns: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&settings)?,
        Commands::Ingredients { columns } => {
            if let Some(columns) = columns {
                settings.ingredient_columns = columns.max(1);
            }
            list_ingredients(&settings);
        }
    }

    Ok(())
}

/// Run the interactive session on stdin/stdout
fn run_shell(settings: &Settings) -> anyhow::Result<()> {
    let controller = Controller::new(settings);
    info!("Starting session with {} ingredients", controller.ingredients().len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&controller, stdin.lock(), stdout.lock(), settings.confirm_destructive)
        .run()
        .map_err(|e| anyhow::anyhow!("Session ended unexpectedly: {}", e))?;

    println!("{}", "Goodbye!".dimmed());
    Ok(())
}

/// Print the ingredient catalog in columns
fn list_ingredients(settings: &Settings) {
    let controller = Controller::new(settings);
    let grid = controller.ingredient_grid();

    println!("{}", "Ingredients:\n".bold());

    for row in &grid {
        let cells: Vec<String> = row.iter().map(|name| format!("{:<24}", name)).collect();
        println!("  {}", cells.join("").trim_end().green());
    }

    println!(
        "\n{} Total: {} ingredients",
        "✓".green(),
        controller.ingredients().len()
    );
}
