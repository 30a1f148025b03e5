//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber.
//!
//! - Level filtering comes from `RUST_LOG` and defaults to `info`.
//! - Module paths are hidden (`with_target(false)`); actor logs carry an
//!   `entity_type` field instead.
//! - `LOG_FORMAT=json` switches from the compact human format to one JSON object
//!   per line, including the current span.
//!
//! ```bash
//! RUST_LOG=info cargo run                   # creations, stock moves, shutdown
//! RUST_LOG=debug cargo run                  # full payloads, sequence waits
//! LOG_FORMAT=json RUST_LOG=info cargo run   # machine-readable
//! ```
//!
//! With `RUST_LOG=info` a product creation looks like:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO create_product: Created entity_type="Product" id=119998 size=1
//! INFO decrement_stock: Action ok entity_type="Product" id=119998
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}
