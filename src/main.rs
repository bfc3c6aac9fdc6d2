mod cli_messages;
mod config;
mod consts;
mod content;
mod events;
mod jitter;
mod logging;
mod router;
mod scheduler;
mod session;
mod ui;
mod views;

use crate::config::{Config, get_config_path};
use crate::router::SectionId;
use crate::session::{
    HeadlessOptions, SessionOptions, run_headless_mode, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the deck
    Start {
        /// Section to open on, e.g. `monitoring`. See `sections`.
        #[arg(long, value_name = "SECTION")]
        section: Option<String>,

        /// Seed for the live metric jitter, for reproducible runs
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Run without the terminal UI, printing live metrics on every tick
        #[arg(long = "headless", action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Stop after this many ticks (headless only)
        #[arg(long, value_name = "TICKS", requires = "headless")]
        ticks: Option<u64>,

        /// Print one JSON object per tick (headless only)
        #[arg(long, action = clap::ArgAction::SetTrue, requires = "headless")]
        json: bool,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// List the deck's sections
    Sections,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Delete the configuration file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            section,
            seed,
            headless,
            ticks,
            json,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path).map_err(|e| {
                print_cmd_error!("Failed to load config", e.to_string().as_str());
                e
            })?;
            let options = SessionOptions {
                section,
                seed,
                with_background,
            };
            let session = setup_session(config, options)?;
            if headless {
                run_headless_mode(session, HeadlessOptions { ticks, json }).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Sections => {
            for id in SectionId::iter() {
                println!("{}  {:<14} {}", id.ordinal(), id.as_ref(), id.title());
            }
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigCommand::Init { force } => {
                if config_path.exists() && !force {
                    print_cmd_warn!(
                        "Config exists",
                        "{} (use --force to overwrite)",
                        config_path.display()
                    );
                    return Ok(());
                }
                Config::default().save(&config_path)?;
                print_cmd_success!("Config written", "{}", config_path.display());
                Ok(())
            }
            ConfigCommand::Show => {
                let config = Config::load_or_default(&config_path)?;
                if !config_path.exists() {
                    print_cmd_info!("No config file", "showing defaults");
                }
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigCommand::Reset => {
                Config::clear(&config_path)?;
                print_cmd_success!("Config reset", "{}", config_path.display());
                Ok(())
            }
        },
    }
}
