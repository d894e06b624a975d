use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Use the library instead of redeclaring modules
use petclinic_rest::{config::Config, database::Database, web::WebServer};

#[derive(Parser)]
#[command(name = "petclinic-rest")]
#[command(version)]
#[command(about = "Veterinary clinic REST backend speaking protobuf and JSON")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Database URL (overrides config file)
    #[arg(short = 'd', long, value_name = "URL")]
    database_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    /// Load the sample clinic data after migrating
    #[arg(long)]
    seed_sample_data: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("petclinic_rest={},tower_http=trace", cli.log_level)
    } else {
        format!("petclinic_rest={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load(&cli.config)?;

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database.url = database_url;
    }
    if cli.seed_sample_data {
        config.database.seed_sample_data = true;
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    info!("Starting petclinic-rest v{}", env!("CARGO_PKG_VERSION"));
    info!("Using database: {}", config.database.url);

    let database = Database::new(&config.database).await?;
    database.migrate().await?;
    info!("Database connection established and migrations applied");

    if config.database.seed_sample_data {
        database.seed_sample_data().await?;
    }

    let web_server = WebServer::new(config.clone(), database)?;
    info!(
        "Serving {} on {}:{} (default format: {})",
        config.web.base_path,
        web_server.host(),
        web_server.port(),
        config.web.default_format
    );

    web_server.serve().await?;

    Ok(())
}
