//! Lazily resolved symbol handles, cached per operation
//!
//! Symbol lookup on the host is reflective and slow. Each adapter resolves a
//! symbol the first time an operation needs it and reuses the handle for the
//! rest of the process. The first caller for a key computes the handle; callers
//! racing with it block on the same `OnceCell` and observe the published value.
//! Lookup failures are cached as well, since the host cannot gain symbols later.

use crate::error::{NmsError, NmsResult};
use crate::host::{HostInternals, SymbolHandle};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, warn};

type Slot = Arc<OnceCell<NmsResult<SymbolHandle>>>;

/// Exactly-once cache of resolved host symbols, keyed by operation name
#[derive(Default)]
pub struct HandleCache {
    slots: DashMap<&'static str, Slot>,
}

impl HandleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `operation`, resolving `symbol` on first use.
    pub fn get_or_resolve(
        &self,
        host: &dyn HostInternals,
        operation: &'static str,
        symbol: &str,
    ) -> NmsResult<SymbolHandle> {
        // Clone the slot out so the map shard lock is released before resolving.
        let slot: Slot = Arc::clone(&self.slots.entry(operation).or_default());

        slot.get_or_init(|| match host.resolve_symbol(symbol) {
            Some(handle) => {
                debug!(operation, symbol, "Resolved host symbol");
                Ok(handle)
            }
            None => {
                warn!(operation, symbol, "Host symbol not found");
                Err(NmsError::missing_symbol(symbol))
            }
        })
        .clone()
    }

    /// Number of operations whose handle has been resolved (successfully or not)
    pub fn resolved_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    struct CountingHost {
        lookups: AtomicUsize,
        known: &'static str,
    }

    impl HostInternals for CountingHost {
        fn server_version(&self) -> String {
            "1.21.4-R0.1-SNAPSHOT".to_string()
        }

        fn resolve_symbol(&self, symbol: &str) -> Option<SymbolHandle> {
            let slot = self.lookups.fetch_add(1, Ordering::SeqCst) as u64;
            // Widen the window in which racing callers could double-resolve.
            thread::sleep(std::time::Duration::from_millis(5));
            (symbol == self.known).then(|| SymbolHandle::new(symbol, slot))
        }

        fn invoke(&self, handle: &SymbolHandle, _: &[Value]) -> Result<Value, HostError> {
            Err(HostError::UnknownHandle {
                symbol: handle.symbol().to_string(),
            })
        }
    }

    #[test]
    fn test_resolves_once_and_reuses_handle() {
        let host = CountingHost {
            lookups: AtomicUsize::new(0),
            known: "Entity#setDeltaMovement",
        };
        let cache = HandleCache::new();

        let first = cache
            .get_or_resolve(&host, "set_velocity", "Entity#setDeltaMovement")
            .unwrap();
        let second = cache
            .get_or_resolve(&host, "set_velocity", "Entity#setDeltaMovement")
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(host.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(cache.resolved_count(), 1);
    }

    #[test]
    fn test_missing_symbol_is_cached() {
        let host = CountingHost {
            lookups: AtomicUsize::new(0),
            known: "Entity#setDeltaMovement",
        };
        let cache = HandleCache::new();

        for _ in 0..3 {
            let err = cache
                .get_or_resolve(&host, "damage_entity", "Entity#hurt")
                .unwrap_err();
            assert_eq!(err, NmsError::missing_symbol("Entity#hurt"));
        }
        assert_eq!(host.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_use_resolves_exactly_once() {
        let host = Arc::new(CountingHost {
            lookups: AtomicUsize::new(0),
            known: "Entity#setDeltaMovement",
        });
        let cache = Arc::new(HandleCache::new());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let host = Arc::clone(&host);
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache
                        .get_or_resolve(host.as_ref(), "set_velocity", "Entity#setDeltaMovement")
                        .unwrap()
                })
            })
            .collect();

        let results: Vec<SymbolHandle> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(host.lookups.load(Ordering::SeqCst), 1);
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
