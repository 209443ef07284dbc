// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use candidate::{Candidate, DEFAULT_PYTHON_VERSION};

pub mod candidate;
pub mod hive;
pub mod registry;
pub mod reporter;
pub mod resolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// `PythonCore` version tag to look up, e.g. `2.7`.
    pub python_version: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
        }
    }
}

impl Configuration {
    pub fn candidates(&self) -> [Candidate; 3] {
        Candidate::for_version(&self.python_version)
    }
}
