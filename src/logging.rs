// src/logging.rs

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber. Safe to call more than once.
///
/// Levels come from `SAMPLER_LOG` (e.g. `SAMPLER_LOG=apartment_sampler=debug`),
/// falling back to `apartment_sampler=info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SAMPLER_LOG")
            .unwrap_or_else(|_| EnvFilter::new("apartment_sampler=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .init();
    });
}
