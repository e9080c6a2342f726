//! Configuration for a protover instance.

use serde::{Deserialize, Serialize};

use crate::support::SupportTable;

/// Configuration for [`Protover`](crate::Protover).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtoverConfig {
    /// Locally supported protocol versions, as a canonical protocol list.
    /// Only recognized protocol names are allowed.
    pub supported: String,
}

impl Default for ProtoverConfig {
    fn default() -> Self {
        Self {
            supported: SupportTable::native().to_protocol_set().encode(),
        }
    }
}
