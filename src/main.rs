use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

use fightcamp::error::ErrorSeverity;
use fightcamp::export::{json, text};
use fightcamp::logging::init_logging;
use fightcamp::{
    compute_all_metrics, compute_all_metrics_now, compute_fight_week_plan, AppConfig,
    FightCampError, ImportManager, LogLevel, OutputFormat, ProjectionInput, Sex,
};

/// FightCamp - Weight Cut & Recovery CLI
///
/// Projects a fight-week weight cut day by day and scores training
/// recovery from logged sessions.
#[derive(Parser)]
#[command(name = "fightcamp")]
#[command(version)]
#[command(about = "Fight-week weight cut planner and recovery tracker", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a fight-week weight cut
    Plan {
        /// Current body weight in kg
        #[arg(long)]
        current_kg: f64,

        /// Weigh-in target in kg
        #[arg(long)]
        target_kg: f64,

        /// Days until weigh-in (default from config)
        #[arg(short, long)]
        days: Option<u32>,

        /// male or female (default from config)
        #[arg(long)]
        sex: Option<Sex>,

        /// Output format: table or json
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Write the JSON plan to a file as well
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score recovery from a session log
    Recovery {
        /// Session file (JSON array or CSV)
        #[arg(short = 'i', long)]
        file: PathBuf,

        /// Evaluate as of this date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        today: Option<NaiveDate>,

        /// Field delimiter for CSV session files
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,

        /// Output format: table or json
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Write the JSON metrics to a file as well
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure application settings
    Config {
        /// List all configuration options
        #[arg(short, long)]
        list: bool,

        /// Set a configuration value (KEY=VALUE)
        #[arg(short, long)]
        set: Option<String>,

        /// Get a configuration value
        #[arg(short, long)]
        get: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<FightCampError>() {
                Some(cause) => {
                    match cause.severity() {
                        ErrorSeverity::Warning => warn!(error = %cause, "Command rejected"),
                        ErrorSeverity::Error => error!(error = %cause, "Command failed"),
                    }
                    eprintln!("{} {}", "error:".red().bold(), cause.user_message());
                }
                None => eprintln!("{} {:#}", "error:".red().bold(), err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);
    let mut config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config file: {}", config_path.display()))?;

    let mut log_config = config.logging.clone();
    log_config.level = LogLevel::from_verbosity(log_config.level, cli.verbose);
    init_logging(&log_config).context("Failed to initialize logging")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Plan {
            current_kg,
            target_kg,
            days,
            sex,
            format,
            output,
        } => {
            let input = ProjectionInput {
                current_weight_kg: current_kg,
                target_weight_kg: target_kg,
                days_until_weigh_in: days.unwrap_or(config.athlete.weigh_in_days),
                sex: sex.unwrap_or(config.athlete.sex),
            };
            input.validate()?;

            info!(
                current_kg,
                target_kg,
                days = input.days_until_weigh_in,
                sex = %input.sex,
                "Projecting fight week"
            );
            let result = compute_fight_week_plan(&input);

            if let Some(path) = &output {
                json::export_json(&result, path)
                    .with_context(|| format!("Failed to write plan to {}", path.display()))?;
                info!(path = %path.display(), "Plan written");
            }

            match format.unwrap_or(config.output.format) {
                OutputFormat::Json => println!("{}", json::to_json_blob(&result)?),
                OutputFormat::Table => println!(
                    "{}",
                    text::render_plan(&result, config.athlete.name.as_deref(), config.output.color)
                ),
            }
        }

        Commands::Recovery {
            file,
            today,
            delimiter,
            format,
            output,
        } => {
            if !delimiter.is_ascii() {
                bail!("CSV delimiter must be a single ASCII character, got '{}'", delimiter);
            }
            let sessions = ImportManager::with_csv_delimiter(delimiter as u8)
                .import_file(&file)
                .with_context(|| format!("Failed to import sessions from {}", file.display()))?;

            let metrics = match today {
                Some(date) => compute_all_metrics(&sessions, date),
                None => compute_all_metrics_now(&sessions),
            };

            if let Some(path) = &output {
                json::export_json(&metrics, path)
                    .with_context(|| format!("Failed to write metrics to {}", path.display()))?;
                info!(path = %path.display(), "Metrics written");
            }

            match format.unwrap_or(config.output.format) {
                OutputFormat::Json => println!("{}", json::to_json_blob(&metrics)?),
                OutputFormat::Table => {
                    println!("{}", text::render_metrics(&metrics, config.output.color))
                }
            }
        }

        Commands::Config { list, set, get } => {
            if let Some(key_value) = set {
                let Some((key, value)) = key_value.split_once('=') else {
                    bail!("Expected KEY=VALUE, got '{}'", key_value);
                };
                config.set(key.trim(), value.trim())?;
                config
                    .save_to_file(&config_path)
                    .with_context(|| format!("Failed to save {}", config_path.display()))?;
                println!("{} {} = {}", "✓".green(), key.trim(), value.trim());
            } else if let Some(key) = get {
                println!("{}", config.get(&key)?);
            } else if list {
                println!("{}", config_path.display().to_string().dimmed());
                for (key, value) in config.entries() {
                    println!("{:<24} {}", key.bold(), value);
                }
            } else {
                bail!("Nothing to do: pass --list, --get KEY or --set KEY=VALUE");
            }
        }
    }

    Ok(())
}
