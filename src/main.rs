use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use store_update_check::config::{CheckConfig, HostEnvironment, data_dir, db_path, log_path};
use store_update_check::prompt::link::SystemLinkOpener;
use store_update_check::prompt::terminal::TerminalPresenter;
use store_update_check::update::{CheckOutcome, UpdateChecker};
use store_update_check::version::preferences::{PreferenceStore, SqlitePreferences};
use store_update_check::version::registries::AppStoreLookup;

#[derive(Parser)]
#[command(name = "store-update-check")]
#[command(version, about = "Check the storefront for a newer app version")]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    check: CheckArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct CheckArgs {
    /// Application identifier to look up
    #[arg(long)]
    bundle_id: Option<String>,

    /// Version currently installed
    #[arg(long)]
    installed_version: Option<String>,

    /// Storefront page opened on "Update"
    #[arg(long)]
    store_url: Option<String>,

    /// Storefront country code
    #[arg(long)]
    country: Option<String>,

    /// Base URL of the lookup API
    #[arg(long)]
    lookup_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the version the user last chose to skip
    Skipped,
}

fn init_logging(log_path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .context("log path has no file name")?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(guard)
}

fn load_config(path: Option<&Path>, args: &CheckArgs) -> anyhow::Result<CheckConfig> {
    let mut config = match path {
        Some(path) => CheckConfig::from_file(path)?,
        None => CheckConfig::default(),
    };

    if let Some(lookup_url) = &args.lookup_url {
        config.lookup_base_url = lookup_url.clone();
    }
    if args.country.is_some() {
        config.country = args.country.clone();
    }
    if args.store_url.is_some() {
        config.store_url = args.store_url.clone();
    }

    Ok(config)
}

async fn run_check(config: CheckConfig, host: HostEnvironment) -> anyhow::Result<()> {
    let preferences = Arc::new(SqlitePreferences::new(&db_path())?);
    let lookup = AppStoreLookup::new(config.lookup_base_url).with_country(config.country);

    let checker = UpdateChecker::new(
        host,
        Arc::new(lookup),
        preferences,
        Arc::new(TerminalPresenter),
        Arc::new(SystemLinkOpener),
    )
    .with_store_url(config.store_url);

    let root = TerminalPresenter::root_screen();
    let outcome = checker.check_and_prompt(root.as_ref()).await;
    info!("Update check finished: {:?}", outcome);

    match outcome {
        CheckOutcome::UpToDate { version } => println!("Version {} is up to date", version),
        CheckOutcome::NoScreen { version } => println!("Version {} is available", version),
        _ => {}
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {:?}", data_dir))?;
    let _guard = init_logging(&log_path())?;

    match cli.command {
        Some(Command::Skipped) => {
            let preferences = SqlitePreferences::new(&db_path())?;
            println!("{}", preferences.skipped_version()?);
            Ok(())
        }
        None => {
            let config = load_config(cli.config.as_deref(), &cli.check)?;
            let host = HostEnvironment::new(cli.check.bundle_id, cli.check.installed_version)?;

            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(run_check(config, host))
        }
    }
}
