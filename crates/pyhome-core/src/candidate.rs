// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::hive::Hive;
use serde::Serialize;

pub const DEFAULT_PYTHON_VERSION: &str = "2.7";

/// A registry location that may hold a Python install path.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub hive: Hive,
    pub key_path: String,
}

impl Candidate {
    pub fn new(hive: Hive, key_path: impl Into<String>) -> Self {
        Candidate {
            hive,
            key_path: key_path.into(),
        }
    }

    /// The lookup chain for a `PythonCore` version tag, in priority order:
    /// 32-bit view of HKLM, native HKLM, then HKCU.
    pub fn for_version(version: &str) -> [Candidate; 3] {
        [
            Candidate::new(
                Hive::LocalMachine,
                format!("SOFTWARE\\Wow6432Node\\Python\\PythonCore\\{version}\\InstallPath"),
            ),
            Candidate::new(
                Hive::LocalMachine,
                format!("SOFTWARE\\Python\\PythonCore\\{version}\\InstallPath"),
            ),
            Candidate::new(
                Hive::CurrentUser,
                format!("SOFTWARE\\Python\\PythonCore\\{version}\\InstallPath"),
            ),
        ]
    }

    pub fn defaults() -> [Candidate; 3] {
        Candidate::for_version(DEFAULT_PYTHON_VERSION)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\\{}", self.hive, self.key_path)
    }
}
