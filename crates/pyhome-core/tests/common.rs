// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pyhome_core::{
    hive::Hive,
    registry::{Registry, RegistryError},
};
use std::{collections::HashMap, sync::Mutex};

#[allow(dead_code)]
pub enum FakeEntry {
    Value(String),
    AccessDenied,
}

/// In-memory registry that records every lookup made against it.
#[allow(dead_code)]
pub struct FakeRegistry {
    entries: HashMap<(Hive, String), FakeEntry>,
    pub calls: Mutex<Vec<(Hive, String)>>,
}

#[allow(dead_code)]
pub fn create_fake_registry(entries: Vec<(Hive, &str, FakeEntry)>) -> FakeRegistry {
    FakeRegistry {
        entries: entries
            .into_iter()
            .map(|(hive, key, entry)| ((hive, key.to_string()), entry))
            .collect(),
        calls: Mutex::new(vec![]),
    }
}

impl FakeRegistry {
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Registry for FakeRegistry {
    fn query_value(&self, hive: Hive, key_path: &str) -> Result<String, RegistryError> {
        self.calls
            .lock()
            .unwrap()
            .push((hive, key_path.to_string()));
        match self.entries.get(&(hive, key_path.to_string())) {
            Some(FakeEntry::Value(value)) => Ok(value.clone()),
            Some(FakeEntry::AccessDenied) => Err(RegistryError::Io {
                hive,
                key_path: key_path.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }),
            None => Err(RegistryError::not_found(hive, key_path)),
        }
    }
}

pub const WOW64_KEY: &str = "SOFTWARE\\Wow6432Node\\Python\\PythonCore\\2.7\\InstallPath";
pub const NATIVE_KEY: &str = "SOFTWARE\\Python\\PythonCore\\2.7\\InstallPath";
