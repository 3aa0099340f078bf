/// Tracing initialization for hosts that do not bring their own subscriber
///
/// The library itself only emits events through `tracing` macros; installing
/// a subscriber is the host's job. This helper sets up a console subscriber
/// with env-filter support for quick integration and for running examples.
///
/// Filtering via RUST_LOG, e.g. `RUST_LOG=battlefx=debug`.
pub fn init() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    // A host may already have installed a global subscriber; that is fine.
    if result.is_err() {
        tracing::debug!("Global tracing subscriber already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_idempotent() {
        super::init();
        super::init();
    }
}
