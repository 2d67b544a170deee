//! Process-wide channel for decode warnings.

use lazy_static::lazy_static;
use std::sync::RwLock;

type WarningHandler = Box<dyn Fn(&str) + Send + Sync>;

lazy_static! {
    static ref WARNING_HANDLERS: RwLock<Vec<WarningHandler>> = RwLock::new(Vec::new());
}

/// Registers a handler invoked with every warning raised while decoding a
/// graph into an ontology.
///
/// Handlers are process-wide and are never unregistered. They must be
/// thread-safe if callers introduce concurrency.
pub fn register_warning_handler(handler: impl Fn(&str) + Send + Sync + 'static) {
    if let Ok(mut handlers) = WARNING_HANDLERS.write() {
        handlers.push(Box::new(handler));
    }
}

/// Dispatches a warning to `tracing` and to the registered handlers.
pub(crate) fn warn(message: impl AsRef<str>) {
    let message = message.as_ref();
    tracing::warn!("{message}");
    if let Ok(handlers) = WARNING_HANDLERS.read() {
        for handler in handlers.iter() {
            handler(message);
        }
    }
}
