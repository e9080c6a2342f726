//! Network-wide protocol requirements and well-known version numbers.

/// Protocols recommended for clients.
pub const RECOMMENDED_CLIENT_PROTOCOLS: &str = "Cons=1-2 Desc=1-2 DirCache=1 HSDir=1 HSIntro=3 \
                                                HSRend=1 Link=4 LinkAuth=1 Microdesc=1-2 Relay=2";

/// Protocols a client must support to stay on the network.
pub const REQUIRED_CLIENT_PROTOCOLS: &str = "Cons=1-2 Desc=1-2 DirCache=1 HSDir=1 HSIntro=3 \
                                             HSRend=1 Link=4 LinkAuth=1 Microdesc=1-2 Relay=2";

/// Protocols a relay must support to stay on the network.
pub const REQUIRED_RELAY_PROTOCOLS: &str = "Cons=1 Desc=1 DirCache=1 HSDir=1 HSIntro=3 \
                                            HSRend=1 Link=3-4 LinkAuth=1 Microdesc=1 Relay=1-2";

/// HSDir version that adds v3 onion service descriptors.
pub const PROTOVER_HSDIR_V3: u32 = 2;

/// HSIntro version that adds v3 onion service introduction.
pub const PROTOVER_HS_INTRO_V3: u32 = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::Proto;
    use crate::query::all_supported;
    use crate::support::SupportTable;
    use protover_core::is_canonical;

    #[test]
    fn test_defaults_are_canonical() {
        for s in [
            RECOMMENDED_CLIENT_PROTOCOLS,
            REQUIRED_CLIENT_PROTOCOLS,
            REQUIRED_RELAY_PROTOCOLS,
        ] {
            assert!(is_canonical(s), "{}", s);
        }
    }

    #[test]
    fn test_native_table_meets_requirements() {
        let table = SupportTable::native();
        for s in [
            RECOMMENDED_CLIENT_PROTOCOLS,
            REQUIRED_CLIENT_PROTOCOLS,
            REQUIRED_RELAY_PROTOCOLS,
        ] {
            assert_eq!(all_supported(&table, s), (true, String::new()), "{}", s);
        }
    }

    #[test]
    fn test_v3_versions_supported_natively() {
        let table = SupportTable::native();
        assert!(table.supports(Proto::HSDir, PROTOVER_HSDIR_V3));
        assert!(table.supports(Proto::HSIntro, PROTOVER_HS_INTRO_V3));
    }
}
