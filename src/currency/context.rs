use std::sync::{Arc, RwLock};

use super::display_service::CurrencyDisplayServiceTrait;

/// Process-wide provider slot for the currency display service.
///
/// Price-rendering components read the service through an installed
/// context rather than owning it; tests install independent services on
/// independent contexts.
pub struct CurrencyContext {
    service: RwLock<Option<Arc<dyn CurrencyDisplayServiceTrait>>>,
}

/// The context consumed by storefront components.
pub static CURRENCY_CONTEXT: CurrencyContext = CurrencyContext::new();

impl CurrencyContext {
    pub const fn new() -> Self {
        CurrencyContext {
            service: RwLock::new(None),
        }
    }

    /// Publishes a service to all consumers of this context.
    pub fn install(&self, service: Arc<dyn CurrencyDisplayServiceTrait>) {
        let mut slot = match self.service.write() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(service);
    }

    /// Returns the installed service.
    ///
    /// Consuming the context without an installed provider is a programming
    /// error, not a recoverable condition, and panics immediately rather
    /// than handing back a default.
    pub fn current(&self) -> Arc<dyn CurrencyDisplayServiceTrait> {
        let slot = match self.service.read() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        match slot.as_ref() {
            Some(service) => Arc::clone(service),
            None => panic!("currency display service consumed outside an active CurrencyContext"),
        }
    }
}

impl Default for CurrencyContext {
    fn default() -> Self {
        CurrencyContext::new()
    }
}
