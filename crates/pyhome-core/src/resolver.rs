// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{
    candidate::Candidate,
    registry::{Registry, RegistryError},
};
use log::trace;
use serde::Serialize;

/// The install path found in the registry and where it came from.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub home: String,
    #[serde(flatten)]
    pub candidate: Candidate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(String),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub candidate: Candidate,
    pub outcome: ProbeOutcome,
}

/// Returns the install path of the default Python version, trying each
/// default candidate in order.
pub fn resolve_python_home(registry: &dyn Registry) -> Result<Option<String>, RegistryError> {
    Ok(resolve(registry, &Candidate::defaults())?.map(|r| r.home))
}

/// Walks `candidates` in order and returns the first value that can be read.
/// Only a missing key moves on to the next candidate, any other error is returned as is.
pub fn resolve(
    registry: &dyn Registry,
    candidates: &[Candidate],
) -> Result<Option<Resolution>, RegistryError> {
    for candidate in candidates {
        trace!("Looking for Python install path in {}", candidate);
        match registry.query_value(candidate.hive, &candidate.key_path) {
            Ok(home) => {
                trace!("Found Python install path ({}) in {}", home, candidate);
                return Ok(Some(Resolution {
                    home,
                    candidate: candidate.clone(),
                }));
            }
            Err(err) if err.is_not_found() => {
                trace!("{}, trying next candidate", err);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(None)
}

/// Queries every candidate, without stopping at the first hit or error.
pub fn probe(registry: &dyn Registry, candidates: &[Candidate]) -> Vec<Probe> {
    candidates
        .iter()
        .map(|candidate| {
            let outcome = match registry.query_value(candidate.hive, &candidate.key_path) {
                Ok(value) => ProbeOutcome::Found(value),
                Err(err) if err.is_not_found() => ProbeOutcome::NotFound,
                Err(err) => ProbeOutcome::Failed(err.to_string()),
            };
            trace!("Probed {}: {:?}", candidate, outcome);
            Probe {
                candidate: candidate.clone(),
                outcome,
            }
        })
        .collect()
}
