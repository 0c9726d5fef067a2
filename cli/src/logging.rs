use tracing_subscriber::EnvFilter;

/// Environment variable read for a log filter, e.g. `FILMS_LOG=film_graphql=debug`
pub const LOG_ENV: &str = "FILMS_LOG";

/// Install the stderr subscriber.
///
/// `FILMS_LOG` wins when set; otherwise `--verbose` selects debug and the
/// default is warnings only.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "film_graphql=debug,films=debug" } else { "warn" })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();
}
