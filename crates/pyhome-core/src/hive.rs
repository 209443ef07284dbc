// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Serialize;

/// Top level registry root a candidate key lives under.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Hive {
    LocalMachine,
    CurrentUser,
}

impl Hive {
    /// Short name used by `reg.exe` and friends, e.g. `HKLM`.
    pub fn short_name(&self) -> &'static str {
        match self {
            Hive::LocalMachine => "HKLM",
            Hive::CurrentUser => "HKCU",
        }
    }
}

impl std::fmt::Display for Hive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
