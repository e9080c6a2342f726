//! Support queries against the local table and against peer lists.
//!
//! Protocol lists handed to these functions come from the network. A list
//! that does not parse is never an error here: it simply supports nothing.

use protover_core::{parse_protocol_list, ProtocolSet};

use crate::proto::Proto;
use crate::support::SupportTable;

/// Whether the local table supports `version` of `proto`.
pub fn is_supported_here(table: &SupportTable, proto: Proto, version: u32) -> bool {
    table.supports(proto, version)
}

/// Whether the protocol list `list` advertises `version` of `proto`.
///
/// An unparseable list supports nothing.
pub fn list_supports(list: &str, proto: Proto, version: u32) -> bool {
    match parse_protocol_list(list) {
        Ok(set) => set.supports(proto.name(), version),
        Err(e) => {
            tracing::debug!("Rejected protocol list {:?}: {}", list, e);
            false
        }
    }
}

/// The part of `requested` that the local table does not support.
///
/// Unrecognized names are missing in full. The result is canonical and
/// holds no empty entries.
pub fn missing_protocols(table: &SupportTable, requested: &ProtocolSet) -> ProtocolSet {
    requested
        .entries()
        .map(|entry| match table.get_by_name(entry.name()) {
            Some(local) => entry.subtract(local.ranges()),
            None => entry.clone(),
        })
        .collect()
}

/// Check every version listed in `list` against the local table.
///
/// Returns `(true, "")` when everything is supported. Otherwise returns
/// `false` with the unsupported versions as a canonical protocol list. A
/// list that does not parse is reported as missing in its entirety.
pub fn all_supported(table: &SupportTable, list: &str) -> (bool, String) {
    let requested = match parse_protocol_list(list) {
        Ok(set) => set,
        Err(e) => {
            tracing::debug!("Unparseable protocol list {:?}: {}", list, e);
            return (false, list.to_owned());
        }
    };

    let missing = missing_protocols(table, &requested);
    if missing.is_empty() {
        (true, String::new())
    } else {
        (false, missing.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProtoverConfig;

    fn link_1_to_3() -> SupportTable {
        SupportTable::from_config(&ProtoverConfig {
            supported: "Link=1-3".into(),
        })
        .unwrap()
    }

    #[test]
    fn test_is_supported_here() {
        let table = SupportTable::native();
        assert!(is_supported_here(&table, Proto::Link, 1));
        assert!(!is_supported_here(&table, Proto::Link, 5));
        assert!(is_supported_here(&table, Proto::HSIntro, 4));
        assert!(!is_supported_here(&table, Proto::HSIntro, 1));
    }

    #[test]
    fn test_list_supports() {
        assert!(list_supports("Link=3-4 Cons=1", Proto::Cons, 1));
        assert!(list_supports("Link=3-4 Cons=1", Proto::Link, 4));
        assert!(!list_supports("Link=3-4 Cons=1", Proto::Link, 2));
        assert!(!list_supports("Link=3-4 Cons=1", Proto::Relay, 1));
        assert!(!list_supports("", Proto::Link, 1));
    }

    #[test]
    fn test_list_supports_malformed_is_false() {
        assert!(!list_supports("Link=3-4 Cons=", Proto::Link, 3));
        assert!(!list_supports("Link=4-3", Proto::Link, 3));
        assert!(!list_supports("garbage", Proto::Link, 1));
    }

    #[test]
    fn test_all_supported() {
        let table = link_1_to_3();
        assert_eq!(all_supported(&table, "Link=1"), (true, String::new()));
        assert_eq!(all_supported(&table, "Link=1,5"), (false, "Link=5".into()));
        assert_eq!(all_supported(&table, "Link=0-9"), (false, "Link=0,4-9".into()));
        assert_eq!(all_supported(&table, ""), (true, String::new()));
    }

    #[test]
    fn test_all_supported_unrecognized_names() {
        let table = SupportTable::native();
        assert_eq!(
            all_supported(&table, "Cons=1 Wombat=9"),
            (false, "Wombat=9".into())
        );
        assert_eq!(
            all_supported(&table, "Wombat=9 Cons=1-5 Aardvark=1"),
            (false, "Aardvark=1 Cons=3-5 Wombat=9".into())
        );
    }

    #[test]
    fn test_all_supported_recognized_but_unconfigured() {
        let table = link_1_to_3();
        assert_eq!(all_supported(&table, "Relay=1"), (false, "Relay=1".into()));
    }

    #[test]
    fn test_all_supported_malformed_reports_everything() {
        let table = SupportTable::native();
        assert_eq!(
            all_supported(&table, "Link=1 Cons=x"),
            (false, "Link=1 Cons=x".into())
        );
    }

    #[test]
    fn test_all_supported_per_version() {
        let table = SupportTable::native();
        for (list, ok) in [
            ("Cons=1", true),
            ("Cons=0", false),
            ("Cons=0-1", false),
            ("Cons=5", false),
            ("Cons=1-5", false),
            ("Cons=1,5", false),
            ("Cons=5,6", false),
            ("Cons=1,5,6", false),
            ("Cons=1,2", true),
            ("Cons=1-2", true),
            ("LinkAuth=1,3", true),
            ("LinkAuth=1-3", false),
        ] {
            assert_eq!(all_supported(&table, list).0, ok, "{}", list);
        }
    }

    #[test]
    fn test_missing_protocols_huge_range() {
        let table = SupportTable::native();
        let requested: ProtocolSet = "Link=0-4294967295".parse().unwrap();
        let missing = missing_protocols(&table, &requested);
        assert_eq!(missing.encode(), "Link=0,5-4294967295");
    }
}
