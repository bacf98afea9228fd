//! Vectorworx: desktop and command-line front-end for the QA service
//!
//! Usage:
//!   vectorworx                         - Open the desktop window
//!   vectorworx login [-u USER]         - Log in and print the access token
//!   vectorworx ask "QUESTION" -s mock  - Log in, ask, and print the answer

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vectorworx::backend::{BackendClient, Credentials, Retriever};
use vectorworx::config::Config;
use vectorworx::ui::login_form::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use vectorworx::{app, commands};

#[derive(Parser, Debug)]
#[command(name = "vectorworx")]
#[command(about = "Ask questions against the Vectorworx retrieval service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file path (default: ./vectorworx.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides config and VECTORWORX_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the desktop window (default)
    Gui,

    /// Log in and print the access token
    Login {
        #[arg(short, long, default_value = DEFAULT_USERNAME)]
        username: String,
        #[arg(short, long, default_value = DEFAULT_PASSWORD)]
        password: String,
    },

    /// Log in, ask one question and print the answer with its sources
    Ask {
        /// The question to ask
        question: String,
        /// Retriever to consult (mock, chroma, faiss); repeat for several
        #[arg(short, long = "source")]
        sources: Vec<Retriever>,
        #[arg(short, long, default_value = DEFAULT_USERNAME)]
        username: String,
        #[arg(short, long, default_value = DEFAULT_PASSWORD)]
        password: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(cli.config.as_deref(), cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => match app::run(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Window error: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Login { username, password } => {
            let backend = BackendClient::new(&config.api_url);
            let credentials = Credentials::new(username, password);
            block_on(async {
                let token = commands::login(&backend, &credentials).await?;
                println!("{}", token.as_str());
                Ok::<(), commands::CommandError>(())
            })
        }
        Command::Ask {
            question,
            sources,
            username,
            password,
        } => {
            let backend = BackendClient::new(&config.api_url);
            let credentials = Credentials::new(username, password);
            block_on(async {
                let output = commands::ask(&backend, &credentials, &question, &sources).await?;
                print!("{}", output);
                Ok::<(), commands::CommandError>(())
            })
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn block_on<F>(future: F) -> ExitCode
where
    F: std::future::Future<Output = Result<(), commands::CommandError>>,
{
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(future) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
