// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::resolver::{Probe, Resolution};

pub trait Reporter: Send + Sync {
    /// Reports the outcome of a lookup, `None` when no candidate resolved.
    fn report_home(&self, resolution: Option<&Resolution>) -> std::io::Result<()>;
    fn report_probe(&self, probe: &Probe) -> std::io::Result<()>;
}
