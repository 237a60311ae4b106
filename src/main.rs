use clap::{Parser, ValueEnum, builder::styling};
use eyre::Result;
use kibtools::{Auth, Cluster, S3Config};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::time::Duration;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// kibtools: save Kibana dashboards, visualizations and searches to disk or S3, and load them back
#[derive(Parser)]
#[command(name = "kibtools", version, styles = STYLES)]
struct Cli {
    /// Directory to save objects to, or load them from
    #[arg(short, long, env = "KIBTOOLS_DIRECTORY")]
    directory: PathBuf,

    /// Save objects from the cluster, or load them into it
    #[arg(short, long, value_enum)]
    action: Action,

    /// Also upload the saved tree to S3, or download it from S3 before loading
    #[arg(long)]
    s3: bool,

    /// Elasticsearch host
    #[arg(long, env = "KIBTOOLS_CLUSTER_IP", default_value = "localhost")]
    cluster_ip: String,

    /// Elasticsearch port
    #[arg(long, env = "KIBTOOLS_CLUSTER_PORT", default_value_t = 9200)]
    cluster_port: u16,

    /// Index holding the saved objects
    #[arg(long, env = "KIBTOOLS_CLUSTER_INDEX", default_value = ".kibana")]
    cluster_index: String,

    /// Username for basic auth
    #[arg(long, env = "KIBTOOLS_CLUSTER_USERNAME")]
    cluster_username: Option<String>,

    /// Password for basic auth
    #[arg(long, env = "KIBTOOLS_CLUSTER_PASSWORD", hide_env_values = true)]
    cluster_password: Option<String>,

    /// API key, takes precedence over username and password
    #[arg(long, env = "KIBTOOLS_CLUSTER_APIKEY", hide_env_values = true)]
    cluster_apikey: Option<String>,

    /// Bucket the archive is stored in
    #[arg(long, env = "KIBTOOLS_S3_BUCKET", default_value = "dashboard")]
    s3_bucket: String,

    /// S3 endpoint host
    #[arg(long, env = "KIBTOOLS_S3_HOST", default_value = "s3.amazonaws.com")]
    s3_host: String,

    /// S3 endpoint schema
    #[arg(long, env = "KIBTOOLS_S3_SCHEMA", default_value = "https", value_parser = ["http", "https"])]
    s3_schema: String,

    /// Timeout in seconds for each HTTP request
    #[arg(
        long,
        env = "KIBTOOLS_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// More verbose logging
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Action {
    Save,
    Load,
}

impl Cli {
    fn cluster(&self) -> Cluster {
        Cluster {
            host: self.cluster_ip.clone(),
            port: self.cluster_port,
            index: self.cluster_index.clone(),
            timeout: Duration::from_secs(self.timeout),
            auth: Auth::new(
                self.cluster_username.clone(),
                self.cluster_password.clone(),
                self.cluster_apikey.clone(),
            ),
        }
    }

    fn s3(&self) -> Option<S3Config> {
        self.s3.then(|| S3Config {
            bucket: self.s3_bucket.clone(),
            host: self.s3_host.clone(),
            schema: self.s3_schema.clone(),
            timeout: Duration::from_secs(self.timeout),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Variables from .env feed the flag defaults, so load it before parsing
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }
    let cli = Cli::parse();

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let cluster = cli.cluster();
    let s3 = cli.s3();
    log::info!(
        "{} {}:{} ({}){}",
        match cli.action {
            Action::Save => "Saving from",
            Action::Load => "Loading into",
        },
        cluster.host.cyan(),
        cluster.port.cyan(),
        cluster.auth,
        if s3.is_some() { " via S3" } else { "" }
    );

    match cli.action {
        Action::Save => kibtools::cli::save(&cli.directory, cluster, s3).await,
        Action::Load => kibtools::cli::load(&cli.directory, cluster, s3).await,
    }
}
