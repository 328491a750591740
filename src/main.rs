use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kube_release_version::config::{LOG_FILE_NAME, ResolverConfig, data_dir, log_path};
use kube_release_version::version::bucket::is_ci_version;
use kube_release_version::version::fallback::{client_version, derive_fallback};
use kube_release_version::version::fetchers::HttpFetcher;
use kube_release_version::version::image_tag::sanitize_for_image_tag;
use kube_release_version::version::pattern::VersionPatterns;
use kube_release_version::version::resolver::VersionResolver;

#[derive(Parser)]
#[command(name = "kube-release-version")]
#[command(version, about = "Resolve Kubernetes release labels into versions")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root URL of the release bucket
    #[arg(long, global = true)]
    bucket_url: Option<String>,

    /// Timeout for each metadata fetch in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs as JSON to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a version or label (stable, latest-1, ci/latest-1.10)
    Resolve {
        request: String,
        /// Client version used when the release server has no file for a label
        #[arg(long)]
        client_version: Option<String>,
    },
    /// Resolve a request and print it as an image tag
    Image {
        request: String,
        #[arg(long)]
        client_version: Option<String>,
    },
    /// Print whether a request targets a CI bucket
    IsCi { request: String },
    /// Convert a version into a valid image tag
    ImageTag { version: String },
    /// Derive the offline fallback version from a client version
    Fallback { client_version: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log_file)?;

    let mut config = match &cli.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };
    if let Some(bucket_url) = cli.bucket_url {
        config.bucket_url = bucket_url;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.fetch_timeout_ms = timeout_ms;
    }

    match cli.command {
        Command::Resolve {
            request,
            client_version: client,
        } => {
            let version = resolve(config, client, &request)?;
            println!("{}", version);
        }
        Command::Image {
            request,
            client_version: client,
        } => {
            let version = resolve(config, client, &request)?;
            println!("{}", sanitize_for_image_tag(&version));
        }
        Command::IsCi { request } => {
            println!("{}", is_ci_version(&VersionPatterns::new(), &request));
        }
        Command::ImageTag { version } => {
            println!("{}", sanitize_for_image_tag(&version));
        }
        Command::Fallback { client_version } => {
            println!("{}", derive_fallback(&client_version)?);
        }
    }

    Ok(())
}

fn resolve(
    config: ResolverConfig,
    client: Option<String>,
    request: &str,
) -> anyhow::Result<String> {
    let fetcher = HttpFetcher::new()?;
    let resolver = VersionResolver::new(fetcher, config, client.unwrap_or_else(client_version));

    let version = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(resolver.resolve(request))?;
    Ok(version)
}

fn init_tracing(verbose: bool, log_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if log_file {
        let dir = data_dir();
        std::fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(writer))
            .with(filter)
            .init();
        tracing::debug!("logging to {}", log_path().display());
        return Ok(Some(guard));
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(None)
}
