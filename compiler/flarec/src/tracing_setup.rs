//! Logging setup.
//!
//! Nothing is installed unless `RUST_LOG` is set. Output is an indented
//! span tree on stderr, so it never mixes with tree dumps on stdout.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let tree_layer = tracing_tree::HierarchicalLayer::default()
        .with_indent_amount(2)
        .with_indent_lines(true)
        .with_targets(true);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tree_layer)
        .init();
}
