// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::trace;
use pyhome_core::{
    hive::Hive,
    registry::{Registry, RegistryError},
};
use std::io::{self, ErrorKind};

/// `Registry` backed by the registry of the current machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsRegistry;

impl WindowsRegistry {
    pub fn new() -> WindowsRegistry {
        WindowsRegistry
    }
}

#[cfg(windows)]
impl Registry for WindowsRegistry {
    fn query_value(&self, hive: Hive, key_path: &str) -> Result<String, RegistryError> {
        use winreg::{
            enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE},
            RegKey,
        };

        let root = RegKey::predef(match hive {
            Hive::LocalMachine => HKEY_LOCAL_MACHINE,
            Hive::CurrentUser => HKEY_CURRENT_USER,
        });
        let key = root
            .open_subkey(key_path)
            .map_err(|err| open_error(hive, key_path, err))?;
        default_value(hive, key_path, key.get_value::<String, _>(""))
    }
}

#[cfg(unix)]
impl Registry for WindowsRegistry {
    fn query_value(&self, hive: Hive, key_path: &str) -> Result<String, RegistryError> {
        trace!("No registry on this platform, skipping {}\\{}", hive, key_path);
        Err(RegistryError::not_found(hive, key_path))
    }
}

/// Failure to open the key: a missing key is the only recoverable case.
#[cfg_attr(not(windows), allow(dead_code))]
fn open_error(hive: Hive, key_path: &str, err: io::Error) -> RegistryError {
    if err.kind() == ErrorKind::NotFound {
        RegistryError::not_found(hive, key_path)
    } else {
        RegistryError::Io {
            hive,
            key_path: key_path.to_string(),
            source: err,
        }
    }
}

/// Like RegQueryValue, an existing key without a default value reads as empty.
#[cfg_attr(not(windows), allow(dead_code))]
fn default_value(
    hive: Hive,
    key_path: &str,
    value: io::Result<String>,
) -> Result<String, RegistryError> {
    match value {
        Ok(value) => Ok(value),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            trace!("{}\\{} has no default value", hive, key_path);
            Ok(String::new())
        }
        Err(source) => Err(RegistryError::Io {
            hive,
            key_path: key_path.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "SOFTWARE\\Python\\PythonCore\\2.7\\InstallPath";

    #[test]
    fn missing_key_is_not_found() {
        let err = open_error(Hive::LocalMachine, KEY, io::Error::from(ErrorKind::NotFound));

        assert!(err.is_not_found());
        assert!(matches!(
            err,
            RegistryError::NotFound { hive: Hive::LocalMachine, ref key_path } if key_path == KEY
        ));
    }

    #[test]
    fn other_open_failures_are_io_errors() {
        let err = open_error(
            Hive::CurrentUser,
            KEY,
            io::Error::from(ErrorKind::PermissionDenied),
        );

        assert!(!err.is_not_found());
        match err {
            RegistryError::Io {
                hive,
                key_path,
                source,
            } => {
                assert_eq!(hive, Hive::CurrentUser);
                assert_eq!(key_path, KEY);
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            other => panic!("expected an io error, got {:?}", other),
        }
    }

    #[test]
    fn missing_default_value_reads_as_empty() {
        let value = default_value(
            Hive::LocalMachine,
            KEY,
            Err(io::Error::from(ErrorKind::NotFound)),
        );

        assert_eq!(value.unwrap(), "");
    }

    #[test]
    fn default_value_is_passed_through() {
        let value = default_value(Hive::LocalMachine, KEY, Ok("C:\\Python27\\".to_string()));

        assert_eq!(value.unwrap(), "C:\\Python27\\");
    }

    #[test]
    fn unreadable_default_value_is_an_io_error() {
        let err = default_value(
            Hive::LocalMachine,
            KEY,
            Err(io::Error::from(ErrorKind::PermissionDenied)),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Io { ref source, .. } if source.kind() == ErrorKind::PermissionDenied
        ));
    }

    #[cfg(unix)]
    #[test]
    fn every_key_is_missing_without_a_registry() {
        let err = WindowsRegistry::new()
            .query_value(Hive::LocalMachine, "SOFTWARE\\Python")
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[cfg(windows)]
    #[test]
    fn missing_key_is_reported_as_not_found() {
        let err = WindowsRegistry::new()
            .query_value(
                Hive::CurrentUser,
                "SOFTWARE\\pyhome-tests\\does-not-exist\\InstallPath",
            )
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
