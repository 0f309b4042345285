//! Opt-in diagnostic output for the lexer.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static SUBSCRIBER: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and only the first call has any
/// effect. `RUST_LOG=tmdl_lexer=trace` shows every token and indentation
/// change; `debug` shows one summary line per [`tokenize`](crate::tokenize).
pub fn init_tracing() {
    SUBSCRIBER.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        // Another subscriber may already be global (e.g. in a host binary).
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(EnvFilter::from_default_env())
            .try_init();
    });
}
