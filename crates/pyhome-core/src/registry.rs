// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::hive::Hive;

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    /// The key (or its value) does not exist. Callers are expected to move on.
    #[error("{hive}\\{key_path} not found")]
    NotFound { hive: Hive, key_path: String },

    #[error("failed to read {hive}\\{key_path}: {source}")]
    Io {
        hive: Hive,
        key_path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    pub fn not_found(hive: Hive, key_path: &str) -> Self {
        RegistryError::NotFound {
            hive,
            key_path: key_path.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}

/// Read access to the registry.
/// Production code talks to the OS, tests substitute a fake.
pub trait Registry: Send + Sync {
    /// Reads the default (unnamed) string value of `key_path` under `hive`.
    fn query_value(&self, hive: Hive, key_path: &str) -> Result<String, RegistryError>;
}
