use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use gatehouse_infrastructure::GatehousePaths;

mod commands;
mod logging;
mod terminal;

use commands::context::AppContext;

#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(about = "Gatehouse - session-aware client for a JSON backend", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/gatehouse/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding config and environment
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Log debug output to the console
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Clear the persisted session
    Logout,
    /// Show the logged-in identity
    Whoami,
    /// GET a backend path
    Get {
        path: String,
        /// Application error message to accept silently (repeatable)
        #[arg(long = "allow-error")]
        allow_errors: Vec<String>,
    },
    /// POST a JSON body to a backend path
    Post { path: String, body: String },
    /// PUT a JSON body to a backend path
    Put { path: String, body: String },
    /// DELETE a backend path after confirmation
    Delete {
        path: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logs_dir = GatehousePaths::default().logs_dir().ok();
    let _log_guard = logging::init(logs_dir.as_deref(), cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("[CLI] {:#}", e);
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let mut ctx = AppContext::build(cli.config, cli.backend_url, assume_yes)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&mut ctx, email, password).await
        }
        Commands::Logout => commands::session::logout(&mut ctx),
        Commands::Whoami => commands::session::whoami(&mut ctx),
        Commands::Get { path, allow_errors } => {
            commands::request::get(&mut ctx, &path, allow_errors).await
        }
        Commands::Post { path, body } => commands::request::post(&mut ctx, &path, &body).await,
        Commands::Put { path, body } => commands::request::put(&mut ctx, &path, &body).await,
        Commands::Delete { path, .. } => commands::request::delete(&mut ctx, &path).await,
    }
}
