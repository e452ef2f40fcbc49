//! Shared test helpers.

use std::sync::{Mutex, MutexGuard, Once, PoisonError};

/// Reference encoders built directly from the RISC-V manual's field tables.
pub mod reference;

static TRACING: Once = Once::new();
static DIAG_LOCK: Mutex<()> = Mutex::new(());

/// Installs a `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Serializes access to the process-wide current-instruction slot.
pub fn diag_lock() -> MutexGuard<'static, ()> {
    DIAG_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
