// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pyhome_core::{
    hive::Hive,
    registry::{Registry, RegistryError},
};
use std::{collections::HashMap, sync::Mutex};

/// In-memory registry, values keyed by hive and key path.
/// Keys listed in `denied` fail with a permission error.
#[allow(dead_code)]
#[derive(Default)]
pub struct TestRegistry {
    pub values: HashMap<(Hive, String), String>,
    pub denied: Vec<(Hive, String)>,
    pub calls: Mutex<usize>,
}

#[allow(dead_code)]
pub fn create_test_registry(values: &[(Hive, &str, &str)]) -> TestRegistry {
    TestRegistry {
        values: values
            .iter()
            .map(|(hive, key, value)| ((*hive, key.to_string()), value.to_string()))
            .collect(),
        ..Default::default()
    }
}

impl Registry for TestRegistry {
    fn query_value(&self, hive: Hive, key_path: &str) -> Result<String, RegistryError> {
        *self.calls.lock().unwrap() += 1;
        if self.denied.contains(&(hive, key_path.to_string())) {
            return Err(RegistryError::Io {
                hive,
                key_path: key_path.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        self.values
            .get(&(hive, key_path.to_string()))
            .cloned()
            .ok_or_else(|| RegistryError::not_found(hive, key_path))
    }
}
