//! # UNS
//!
//! Command-line front end for the UNS resolution engine

mod bootstrap;
mod di;

use anyhow::Context;
use clap::{Parser, Subcommand};
use di::{ResolverServices, UseCases};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uns_application::ports::ResolutionCache;
use uns_domain::{CliOverrides, NetworkRecord};
use uns_infrastructure::Ed25519RecordSigner;
use uns_jobs::{CacheEvictionJob, JobRunner};

#[derive(Parser)]
#[command(name = "uns")]
#[command(version)]
#[command(about = "Resolve utopia.<network>//<path> addresses to URLs")]
struct Cli {
    /// Path to configuration file (defaults to ./uns.toml when present)
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    /// JSON records file served by a static registry queried first
    #[arg(short = 'r', long, global = true)]
    records: Option<PathBuf>,

    /// Cache TTL in seconds
    #[arg(long, global = true)]
    cache_ttl: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one or more addresses
    Resolve {
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Print a JSON object per address instead of the bare URL
        #[arg(long)]
        metadata: bool,

        /// Include the decomposed address and resolution details (implies --metadata)
        #[arg(long)]
        extra: bool,
    },
    /// List the networks every registry knows about
    Networks,
    /// Sign a record and register it for this session
    Register {
        record: PathBuf,

        /// PKCS#8 Ed25519 key file
        #[arg(short, long)]
        key: PathBuf,

        /// Addresses to resolve after registering
        #[arg(long = "then-resolve")]
        then_resolve: Vec<String>,
    },
    /// Sign a record and replace an already registered one for this session
    Update {
        record: PathBuf,

        #[arg(short, long)]
        key: PathBuf,

        #[arg(long = "then-resolve")]
        then_resolve: Vec<String>,
    },
    /// Generate a PKCS#8 Ed25519 signing key
    Keygen { out: PathBuf },
    /// Resolve addresses from a batch file and print resolver statistics
    Stats {
        /// File with one address per line; `#` starts a comment
        #[arg(short, long)]
        batch: Option<PathBuf>,

        /// Number of passes over the batch
        #[arg(long, default_value_t = 1)]
        passes: u32,

        /// Empty the cache between passes
        #[arg(long)]
        clear_between: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        cache_ttl_secs: cli.cache_ttl,
        records_file: cli.records.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let services = ResolverServices::new(&config)?;
    let use_cases = UseCases::new(&config, &services);

    let shutdown = CancellationToken::new();
    if let Some(cache) = &services.cache {
        JobRunner::new()
            .with_cache_eviction(
                CacheEvictionJob::new(Arc::clone(cache) as Arc<dyn ResolutionCache>)
                    .with_interval(config.cache.sweep_interval())
                    .with_cancellation(shutdown.clone()),
            )
            .start()
            .await;
    }

    let result = run(cli.command, &use_cases, &shutdown).await;
    shutdown.cancel();
    result
}

async fn run(
    command: Command,
    use_cases: &UseCases,
    shutdown: &CancellationToken,
) -> anyhow::Result<()> {
    match command {
        Command::Resolve {
            addresses,
            metadata,
            extra,
        } => resolve_all(use_cases, &addresses, metadata || extra, extra, shutdown).await,

        Command::Networks => {
            for (registry, networks) in use_cases.list_networks.execute().await {
                println!("{registry}:");
                for network in networks {
                    println!("  utopia.{network}");
                }
            }
            Ok(())
        }

        Command::Register {
            record,
            key,
            then_resolve,
        } => {
            let register = use_cases
                .register_network
                .as_ref()
                .context("no static registry configured to register into")?;
            let record = signed_record(&record, &key)?;
            let network = record.network.clone();
            register.execute(record).await?;
            println!("registered utopia.{network}");
            resolve_all(use_cases, &then_resolve, false, false, shutdown).await
        }

        Command::Update {
            record,
            key,
            then_resolve,
        } => {
            let update = use_cases
                .update_network
                .as_ref()
                .context("no static registry configured to update")?;
            let record = signed_record(&record, &key)?;
            let network = record.network.clone();
            update.execute(record).await?;
            println!("updated utopia.{network}");
            resolve_all(use_cases, &then_resolve, false, false, shutdown).await
        }

        Command::Keygen { out } => {
            let pkcs8 = Ed25519RecordSigner::generate_pkcs8()?;
            let signer = Ed25519RecordSigner::from_pkcs8(&pkcs8)?;
            std::fs::write(&out, &pkcs8)
                .with_context(|| format!("cannot write key to {}", out.display()))?;
            info!(path = %out.display(), "Signing key written");
            println!("{}", signer.public_key_base64());
            Ok(())
        }

        Command::Stats {
            batch,
            passes,
            clear_between,
        } => {
            let addresses = match batch {
                Some(path) => read_batch(&path)?,
                None => Vec::new(),
            };

            for pass in 0..passes {
                if pass > 0 && clear_between {
                    let removed = use_cases.clear_cache.execute();
                    info!(removed, "Cache cleared between passes");
                }
                for address in &addresses {
                    if let Err(e) = use_cases.resolve.execute_cancellable(address, shutdown).await {
                        error!(address = %address, error = %e, "Batch resolution failed");
                    }
                }
            }

            let stats = use_cases.get_stats.execute();
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
    }
}

/// Resolve every address, printing one line per result.
///
/// Fails after printing everything if any address could not be resolved.
async fn resolve_all(
    use_cases: &UseCases,
    addresses: &[String],
    metadata: bool,
    extra: bool,
    shutdown: &CancellationToken,
) -> anyhow::Result<()> {
    let mut failures = 0usize;

    for address in addresses {
        let printed: anyhow::Result<String> = if metadata {
            match use_cases.resolve.execute_with_metadata(address, extra).await {
                Ok(meta) => serde_json::to_string(&meta).map_err(anyhow::Error::from),
                Err(e) => Err(e.into()),
            }
        } else {
            use_cases
                .resolve
                .execute_cancellable(address, shutdown)
                .await
                .map_err(anyhow::Error::from)
        };

        match printed {
            Ok(line) => println!("{line}"),
            Err(e) => {
                failures += 1;
                eprintln!("{address}: {e}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} addresses failed to resolve", addresses.len());
    }
    Ok(())
}

fn signed_record(record_path: &Path, key_path: &Path) -> anyhow::Result<NetworkRecord> {
    let content = std::fs::read(record_path)
        .with_context(|| format!("cannot read record {}", record_path.display()))?;
    let mut record: NetworkRecord = serde_json::from_slice(&content)
        .with_context(|| format!("cannot parse record {}", record_path.display()))?;

    let pkcs8 = std::fs::read(key_path)
        .with_context(|| format!("cannot read key {}", key_path.display()))?;
    let signer = Ed25519RecordSigner::from_pkcs8(&pkcs8)?;
    signer.sign(&mut record);

    Ok(record)
}

fn read_batch(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read batch file {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
