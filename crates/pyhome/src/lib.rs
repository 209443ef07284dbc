// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{error, LevelFilter};
use pyhome_core::{
    registry::{Registry, RegistryError},
    reporter::Reporter,
    resolver::{probe, resolve, Resolution},
    Configuration,
};
use pyhome_reporter::{json, stdio};
use pyhome_windows_registry::WindowsRegistry;
use std::process::ExitCode;

#[derive(thiserror::Error, Debug)]
pub enum HomeError {
    #[error("No Python {version} install path found in the registry")]
    NotFound { version: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves the install path for the configured version and hands it to the reporter.
/// When nothing is found the reporter still gets a `None` before the error is returned.
pub fn report_home(
    registry: &dyn Registry,
    config: &Configuration,
    reporter: &dyn Reporter,
) -> Result<Resolution, HomeError> {
    match resolve(registry, &config.candidates())? {
        Some(resolution) => {
            reporter.report_home(Some(&resolution))?;
            Ok(resolution)
        }
        None => {
            reporter.report_home(None)?;
            Err(HomeError::NotFound {
                version: config.python_version.clone(),
            })
        }
    }
}

pub fn report_probes(
    registry: &dyn Registry,
    config: &Configuration,
    reporter: &dyn Reporter,
) -> std::io::Result<()> {
    for result in probe(registry, &config.candidates()) {
        reporter.report_probe(&result)?;
    }
    Ok(())
}

pub fn home_stdio(config: Configuration, as_json: bool, verbose: bool) -> ExitCode {
    initialize_logger(verbose);
    let registry = WindowsRegistry::new();
    let result = if as_json {
        report_home(&registry, &config, &json::create_reporter())
    } else {
        report_home(&registry, &config, &stdio::create_reporter())
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

pub fn probe_stdio(config: Configuration, as_json: bool, verbose: bool) -> ExitCode {
    initialize_logger(verbose);
    let registry = WindowsRegistry::new();
    let result = if as_json {
        report_probes(&registry, &config, &json::create_reporter())
    } else {
        report_probes(&registry, &config, &stdio::create_reporter())
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("failed to write output: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn initialize_logger(verbose: bool) {
    stdio::initialize_logger(if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    });
}
