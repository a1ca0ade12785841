//! RPC protocol version reported by the simulator

use serde::{Deserialize, Serialize};

/// Protocol version announced by the server in `get_team_info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    #[default]
    V1_0 = 0,
    V1_1 = 1,
}

impl Version {
    /// Decode a version code, falling back to [`Version::V1_0`] for anything unrecognised.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Version::V1_1,
            _ => Version::V1_0,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Human readable label, e.g. `"V1.1"`.
    pub fn label(self) -> &'static str {
        match self {
            Version::V1_0 => "V1.0",
            Version::V1_1 => "V1.1",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
