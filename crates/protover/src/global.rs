//! Process-wide entry points over the native support table.
//!
//! The canonical supported-protocols string is computed on first use and
//! cached until [`free_all`] releases it. After that, the next caller
//! computes it again.

use std::sync::{Arc, OnceLock, RwLock};

use crate::proto::Proto;
use crate::query;
use crate::support::SupportTable;

static NATIVE_TABLE: OnceLock<SupportTable> = OnceLock::new();

static SUPPORTED_PROTOCOLS: RwLock<Option<Arc<str>>> = RwLock::new(None);

/// The native support table, built once per process.
pub fn native_table() -> &'static SupportTable {
    NATIVE_TABLE.get_or_init(SupportTable::native)
}

/// Whether this build supports `version` of `proto`.
pub fn is_supported_here(proto: Proto, version: u32) -> bool {
    query::is_supported_here(native_table(), proto, version)
}

/// Canonical string of everything this build supports.
pub fn supported_protocols_string() -> Arc<str> {
    // The cached value is immutable, so a poisoned lock still guards a
    // consistent Option.
    if let Some(cached) = SUPPORTED_PROTOCOLS
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .as_ref()
    {
        return Arc::clone(cached);
    }

    let mut slot = SUPPORTED_PROTOCOLS
        .write()
        .unwrap_or_else(|e| e.into_inner());
    // Another thread may have filled it while we waited.
    if let Some(cached) = slot.as_ref() {
        return Arc::clone(cached);
    }

    tracing::debug!("Computing supported protocols string");
    let encoded: Arc<str> = native_table().to_protocol_set().encode().into();
    *slot = Some(Arc::clone(&encoded));
    encoded
}

/// Whether the peer list `list` advertises `version` of `proto`.
pub fn list_supports(list: &str, proto: Proto, version: u32) -> bool {
    query::list_supports(list, proto, version)
}

/// Check every version in `list` against this build's support table.
pub fn all_supported(list: &str) -> (bool, String) {
    query::all_supported(native_table(), list)
}

/// Release the cached supported-protocols string.
pub fn free_all() {
    let mut slot = SUPPORTED_PROTOCOLS
        .write()
        .unwrap_or_else(|e| e.into_inner());
    if slot.take().is_some() {
        tracing::debug!("Released supported protocols string");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_string_is_canonical_native() {
        let s = supported_protocols_string();
        assert_eq!(&*s, native_table().to_protocol_set().encode());
        assert!(protover_core::is_canonical(&s));
    }

    #[test]
    fn test_free_all_then_reinitialize() {
        let before = supported_protocols_string();
        free_all();
        free_all();
        let after = supported_protocols_string();
        assert_eq!(before, after);
    }

    #[test]
    fn test_concurrent_first_use() {
        let results: Vec<Arc<str>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(supported_protocols_string)).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for r in &results {
            assert_eq!(r, &results[0]);
        }
    }

    #[test]
    fn test_global_queries() {
        assert!(is_supported_here(Proto::Link, 4));
        assert!(!is_supported_here(Proto::Link, 5));
        assert!(list_supports(&supported_protocols_string(), Proto::Link, 4));
        assert_eq!(all_supported("Link=1-4"), (true, String::new()));
        assert_eq!(all_supported("Link=1-5"), (false, "Link=5".into()));
    }
}
