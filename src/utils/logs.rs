use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub fn setup_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log collectors render ANSI color codes as noise.
        .with_ansi(false)
        // the collector stamps ingestion time.
        .without_time()
        .json()
        .finish()
        .try_init()
}
