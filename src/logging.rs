use tracing_subscriber::EnvFilter;

/// `RUST_LOG` takes precedence; otherwise verbosity picks the level.
pub fn init(verbose: u8, quiet: bool) {
    let default_level = default_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(err) = installed {
        tracing::debug!("keeping existing log subscriber: {err}");
    }
}

pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
