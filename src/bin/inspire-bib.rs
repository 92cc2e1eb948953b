//! Server binary for inspire-bib.
//!
//! Usage: inspire-bib serve --port 8000
//!        inspire-bib generate <SPREADSHEET_ID>

use clap::{Parser, Subcommand};
use inspire_bib::{BibClient, Config};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inspire-bib", about = "Google Sheets to BibTeX via INSPIRE-HEP", version)]
struct Cli {
    /// Enable debug logging (same as DEBUG=1)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Per-request timeout for outbound calls, in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve `GET {BASE_URL}<spreadsheet id>.csv` over HTTP
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short = 'P', long, default_value = "8000")]
        port: u16,
    },
    /// Print the BibTeX document for one spreadsheet
    Generate {
        /// Google Sheets spreadsheet id
        spreadsheet_id: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    config.debug |= cli.debug;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let client = BibClient::new().with_timeout(Duration::from_secs(cli.timeout));

    let result = match cli.command {
        Some(Commands::Generate { spreadsheet_id }) => client
            .generate_bibtex(&spreadsheet_id)
            .await
            .map(|document| println!("{}", document)),
        Some(Commands::Serve { host, port }) => {
            let addr = format!("{}:{}", host, port);
            inspire_bib::server::run_server(&config, client, &addr).await
        }
        None => inspire_bib::server::run_server(&config, client, "0.0.0.0:8000").await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
