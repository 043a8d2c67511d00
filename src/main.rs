use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldline::catalog::ContentCatalog;
use fieldline::error::ConfigError;
use fieldline::gateway::Gateway;
use fieldline::{api, menu};

#[derive(Parser)]
#[command(name = "fieldline")]
#[command(about = "Short-code menu and SMS gateway for feature phones")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// JSON content catalog to serve instead of the builtin one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Print the menu tree
    Menu,
    /// Simulate one short-code request (e.g. `dial 1*1`)
    Dial {
        /// Selector path, empty for the first request
        #[arg(default_value = "")]
        text: String,
    },
    /// Simulate one inbound message
    Sms { text: String },
    /// Validate the menu and catalog, then exit
    Check {
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

/// Initialize tracing with output to stderr (for CLI commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "fieldline=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Offline commands print their result on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_gateway(catalog: Option<&Path>) -> Result<Gateway, ConfigError> {
    let catalog = match catalog {
        Some(path) => ContentCatalog::from_json_file(path)?,
        None => ContentCatalog::builtin()?,
    };
    Gateway::with_catalog(catalog)
}

async fn serve(host: &str, port: u16, catalog: Option<&Path>) -> anyhow::Result<()> {
    tracing::info!("Starting FieldLine gateway on port {}", port);

    // Consistency failures stop here, before the listener is bound
    let gateway = load_gateway(catalog)?;
    let app = api::create_router(gateway);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("FieldLine gateway listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            catalog,
        }) => {
            serve(&host, port, catalog.as_deref()).await?;
        }
        Some(Commands::Menu) => {
            let gateway = load_gateway(None)?;
            print!("{}", menu::render_tree(gateway.menu()));
        }
        Some(Commands::Dial { text }) => {
            let gateway = load_gateway(None)?;
            println!("{}", gateway.dial(&text));
        }
        Some(Commands::Sms { text }) => {
            let gateway = load_gateway(None)?;
            println!("{}", gateway.reply(&text));
        }
        Some(Commands::Check { catalog }) => {
            let gateway = load_gateway(catalog.as_deref())?;
            println!(
                "OK: {} menu nodes, {} intent rules, {} catalog entries",
                gateway.menu().nodes().count(),
                gateway.router().rules().len(),
                gateway.catalog().entries().count()
            );
        }
        None => {
            serve("127.0.0.1", 3000, None).await?;
        }
    }

    Ok(())
}
