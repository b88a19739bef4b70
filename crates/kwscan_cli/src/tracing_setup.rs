//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Filter used by `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "kwscan=debug";

/// Initialize tracing for diagnostic output on stderr.
///
/// Does nothing unless `RUST_LOG` is set or `verbose` is true. Set
/// `KWSCAN_LOG_TREE=1` for indented, hierarchical output instead of flat
/// lines. Safe to call multiple times.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new(VERBOSE_FILTER)
        } else {
            return;
        };

        if std::env::var_os("KWSCAN_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
