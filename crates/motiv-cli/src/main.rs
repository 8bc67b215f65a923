mod cmd_categories;
mod cmd_parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "motiv",
    version,
    about = "Turn free-form daily reflections into structured activities"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse reflection text into activities
    Parse {
        /// Text to parse (reads stdin when omitted)
        text: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Planner config YAML (defaults apply to missing keys)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List categories, keywords and subcategories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stderr keeps --json output on stdout clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("MOTIV_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.cmd {
        Command::Parse { text, json, config } => {
            cmd_parse::execute(text.as_deref(), json, config.as_deref())
        }
        Command::Categories { json } => cmd_categories::execute(json),
    }
}
