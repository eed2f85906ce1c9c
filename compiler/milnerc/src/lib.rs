//! Demonstration driver for the milner type checker.
//!
//! Builds the sample programs, infers each one against the standard
//! environment in a fresh pool, and reports the type or the error.

pub mod config;
pub mod report;
pub mod samples;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing (idempotent).
///
/// With `tree` set, installs a hierarchical layer that shows the analyser's
/// spans nested the way the expression is. Otherwise output is enabled only
/// when `RUST_LOG` is set, for example `RUST_LOG=milner_types=trace`.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if tree {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("milner_types=trace"));
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
