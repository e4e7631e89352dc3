//! geonames CLI - GeoNames dump streaming and web-service lookups.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::dump::Dataset;

#[derive(Parser)]
#[command(name = "geonames")]
#[command(about = "Stream GeoNames dumps and query the GeoNames web services", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Override the dump or web-service host
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream a dump dataset to stdout as NDJSON
    Dump {
        #[command(subcommand)]
        dataset: Dataset,

        /// Directory for the staged download
        #[arg(long)]
        temp_dir: Option<PathBuf>,
    },

    /// Search toponyms by name
    Search {
        /// Search text
        query: String,

        /// Restrict to ISO alpha-2 country codes (repeatable)
        #[arg(short, long)]
        country: Vec<String>,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        max_rows: u32,

        /// Language of returned names
        #[arg(short, long)]
        lang: Option<String>,

        #[command(flatten)]
        account: Account,
    },

    /// Show the full record of a toponym
    Get {
        /// GeoName identifier
        geoname_id: u64,

        /// Language of returned names
        #[arg(short, long)]
        lang: Option<String>,

        #[command(flatten)]
        account: Account,
    },

    /// Show the timezone at a point
    Timezone {
        #[command(flatten)]
        point: Point,

        /// Date for sunrise and sunset (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        #[command(flatten)]
        account: Account,
    },

    /// Show the country at a point
    CountryCode {
        #[command(flatten)]
        point: Point,

        /// Language of the country name
        #[arg(short, long)]
        lang: Option<String>,

        #[command(flatten)]
        account: Account,
    },
}

/// Web-service account.
#[derive(clap::Args)]
struct Account {
    /// GeoNames account name
    #[arg(short, long, env = "GEONAMES_USERNAME")]
    username: String,
}

/// A WGS84 point, with a search buffer.
#[derive(clap::Args)]
struct Point {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Buffer in kilometers
    #[arg(short, long)]
    radius: Option<f64>,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let base_url = cli.base_url.as_deref();
    match cli.command {
        Commands::Dump { dataset, temp_dir } => {
            commands::dump::dump(&cancel, dataset, base_url, temp_dir, cli.quiet).await
        }
        Commands::Search {
            query,
            country,
            max_rows,
            lang,
            account,
        } => {
            let client = commands::web::client(&account.username, base_url)?;
            commands::web::search(&client, &cancel, query, country, max_rows, lang).await
        }
        Commands::Get {
            geoname_id,
            lang,
            account,
        } => {
            let client = commands::web::client(&account.username, base_url)?;
            commands::web::get(&client, &cancel, geoname_id, lang).await
        }
        Commands::Timezone {
            point,
            date,
            account,
        } => {
            let client = commands::web::client(&account.username, base_url)?;
            commands::web::timezone(&client, &cancel, point.lat, point.lng, point.radius, date)
                .await
        }
        Commands::CountryCode {
            point,
            lang,
            account,
        } => {
            let client = commands::web::client(&account.username, base_url)?;
            commands::web::country_code(&client, &cancel, point.lat, point.lng, point.radius, lang)
                .await
        }
    }
}
