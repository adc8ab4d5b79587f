//! Cartwheel CLI - Dev tooling for the storefront state layer.
//!
//! # Usage
//!
//! ```bash
//! # Run a scripted shopping session against the cart store
//! cw-cli demo
//!
//! # Read or change the persisted theme flag
//! cw-cli theme get
//! cw-cli theme set dark
//! cw-cli theme toggle
//!
//! # Run the profile validation rules over sample values
//! cw-cli profile validate -f first_name -v "Ada"
//! ```
//!
//! # Commands
//!
//! - `demo` - Scripted cart session: add, update, ship, check out
//! - `theme` - Get/set/toggle the durable dark-mode flag
//! - `profile validate` - Run a field value through the advisory rules

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cw-cli")]
#[command(author, version, about = "Cartwheel CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted shopping session
    Demo,
    /// Read or change the persisted theme flag
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Profile tooling
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current scheme
    Get,
    /// Set the scheme (`light` or `dark`)
    Set {
        /// Target scheme
        scheme: String,
    },
    /// Flip the scheme
    Toggle,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Validate a field value against the advisory rules
    Validate {
        /// Field name (`first_name`, `email`, `zip`, ...)
        #[arg(short, long)]
        field: String,

        /// Value to validate
        #[arg(short, long)]
        value: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present, then initialize tracing
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Demo => commands::demo::run().await?,
        Commands::Theme { action } => match action {
            ThemeAction::Get => commands::theme::get()?,
            ThemeAction::Set { scheme } => commands::theme::set(&scheme)?,
            ThemeAction::Toggle => commands::theme::toggle()?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Validate { field, value } => {
                commands::profile::validate(&field, &value)?;
            }
        },
    }
    Ok(())
}
