// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pyhome_core::{
    reporter::Reporter,
    resolver::{Probe, ProbeOutcome, Resolution},
};
use serde::Serialize;
use std::{
    io::{self, Stdout, Write},
    sync::Mutex,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeJson<'a> {
    hive: pyhome_core::hive::Hive,
    key_path: &'a str,
    value: Option<&'a str>,
    error: Option<&'a str>,
}

/// Reporter that prints JSON.
/// The install path is a single pretty document, probes are one object per line.
/// The install path is reported verbatim, trailing separator included.
pub struct JsonReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        JsonReporter {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line(&self, json: String) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", json)?;
        out.flush()
    }
}

impl<W: Write + Send> Reporter for JsonReporter<W> {
    fn report_home(&self, resolution: Option<&Resolution>) -> io::Result<()> {
        self.write_line(serde_json::to_string_pretty(&resolution)?)
    }

    fn report_probe(&self, probe: &Probe) -> io::Result<()> {
        let (value, error) = match &probe.outcome {
            ProbeOutcome::Found(value) => (Some(value.as_str()), None),
            ProbeOutcome::NotFound => (None, None),
            ProbeOutcome::Failed(message) => (None, Some(message.as_str())),
        };
        self.write_line(serde_json::to_string(&ProbeJson {
            hive: probe.candidate.hive,
            key_path: &probe.candidate.key_path,
            value,
            error,
        })?)
    }
}

pub fn create_reporter() -> JsonReporter<Stdout> {
    JsonReporter::new(io::stdout())
}
