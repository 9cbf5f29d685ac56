//! Pickleball scorekeeper CLI
//!
//! Replays a rally sequence or a JSON request and prints the scoreboard.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use pb_core::{GameTarget, MatchConfig, MatchRules, PlayersMode, TeamRoster};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pb_cli")]
#[command(about = "Keep score for a pickleball game", long_about = None)]
struct Cli {
    /// Settings JSON file (falls back to PB_SETTINGS_PATH)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log every accepted and refused operation
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Start a game and replay rallies
    Play {
        /// "singles" or "doubles" (defaults to the settings)
        #[arg(long)]
        mode: Option<String>,

        /// 11, 15 or 21 (defaults to the settings)
        #[arg(long)]
        target: Option<u16>,

        /// Team 1 names, e.g. "Ana,Ben"
        #[arg(long)]
        team1: String,

        /// Team 2 names, e.g. "Cy,Di"
        #[arg(long)]
        team2: String,

        /// Rally winners in order: 1, 2, p (pause/resume), r (reset)
        #[arg(long, default_value = "")]
        rallies: String,

        /// Print the full response as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Run a JSON request file
    Json {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output response JSON file path (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let settings = pb_cli::load_settings(cli.settings.as_deref())?;

    match cli.command {
        Commands::Play { mode, target, team1, team2, rallies, json } => {
            let players_mode = match mode {
                Some(mode) => PlayersMode::parse(&mode)?,
                None => settings.default_rules.players_mode,
            };
            let target = match target {
                Some(points) => GameTarget::try_from(points)?,
                None => settings.default_rules.target,
            };
            let config = MatchConfig {
                rules: MatchRules::new(players_mode, target),
                team1: TeamRoster::parse(&team1)?,
                team2: TeamRoster::parse(&team2)?,
            };

            let rallies = pb_cli::parse_rallies(&rallies)?;
            let response = pb_cli::play(config, &rallies, &settings)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for refused in &response.refusals {
                    eprintln!("⚠️  {}", pb_cli::refusal_line(refused));
                }
                print!("{}", response.scoreboard);
            }
        }

        Commands::Json { r#in, out } => {
            let response = pb_cli::run_request_file(&r#in, &settings)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, response)?;
                    println!("📄 Response saved to: {}", path.display());
                }
                None => println!("{response}"),
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pb_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
