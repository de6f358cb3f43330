use clap::Parser;
use rl_core::config::loader::default_config_path;
use rl_core::engine::LinearPipeline;
use rl_core::launcher::{launch, LaunchOptions};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Run the linear image pipeline described by `data.json`.
#[derive(Parser, Debug)]
#[command(name = "reline", version, about)]
struct Cli {
    /// Pipeline configuration. Defaults to `data.json` next to this executable.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Forward strings naming existing paths unchanged instead of
    /// canonicalizing them.
    #[arg(long)]
    no_normalize: bool,

    /// Build and validate the pipeline without running it.
    #[arg(long)]
    check: bool,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let options = LaunchOptions::new(config_path)
        .with_normalize(!cli.no_normalize)
        .with_run(!cli.check);
    info!(
        config = %options.config_path.display(),
        normalize = options.normalize,
        "Launching pipeline"
    );

    launch::<LinearPipeline>(&options)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
