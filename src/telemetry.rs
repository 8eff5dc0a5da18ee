use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber. `RUST_LOG` wins over `verbose`.
///
/// Fails if a global subscriber is already set.
pub fn init_logger(verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "booking_pricing=debug"
    } else {
        "booking_pricing=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        assert!(init_logger(true).is_ok());
        assert!(init_logger(false).is_err());
    }
}
