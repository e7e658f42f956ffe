use std::io;

use eyre::Result;

use mindease_app::{config, runner};
use mindease_storage::file::FileStore;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = config::load_or_init()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let store_path = config.effective_store_path();
    tracing::debug!(path = %store_path.display(), "using local store");

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    runner::run(&mut input, &mut out, FileStore::new(store_path))
}
