//! Tracing subscriber setup for the embedding emulator process.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the host's decision. `init` is a convenience for hosts that want the
//! stock setup: stderr output, `RUST_LOG` respected, `redfin=info` default.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the default subscriber. Safe to call more than once (later calls
/// are no-ops), so tests and embedding hosts cannot trip over each other.
pub fn init() {
    let filter = EnvFilter::from_default_env()
        .add_directive("redfin=info".parse().expect("valid log directive"));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(layer).try_init();
}
