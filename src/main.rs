// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! graph-visual CLI - map weighted graphs to renderer-ready chart payloads

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use graph_visual::types::Theme;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "graph-visual")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRAPH_VISUAL_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a graph and print the backend payload
    Render {
        /// Graph JSON file (stdin if omitted or `-`)
        input: Option<std::path::PathBuf>,

        /// Backend: force (echarts) or node-link (antv)
        #[arg(short, long)]
        graph_type: Option<String>,

        /// Theme: light or dark
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Container style as a JSON object
        #[arg(long)]
        style: Option<String>,

        /// Include theme toggle and legend state
        #[arg(long)]
        view: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Print the color legend
    Legend {
        /// Theme: light or dark
        #[arg(short, long)]
        theme: Option<Theme>,
    },

    /// Show size, bucket and color for every node
    Inspect {
        /// Graph JSON file (stdin if omitted or `-`)
        input: Option<std::path::PathBuf>,

        /// Theme: light or dark
        #[arg(short, long)]
        theme: Option<Theme>,
    },

    /// Show effective configuration
    Config {
        /// Configuration key (omit to show all)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = graph_visual::config::load(cli.config.as_deref()).context("Failed to load settings")?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => settings.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Render { input, graph_type, theme, style, view, output } => commands::render::run(
            commands::render::RenderArgs { input, graph_type, theme, style, view, output },
            &settings,
        ),
        Commands::Legend { theme } => commands::legend::run(theme, cli.json, cli.no_color, &settings),
        Commands::Inspect { input, theme } => commands::inspect::run(input, theme, cli.json, &settings),
        Commands::Config { key } => commands::config::run(key.as_deref(), &settings),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
