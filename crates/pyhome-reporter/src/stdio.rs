// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use env_logger::Builder;
use log::LevelFilter;
use pyhome_core::{
    reporter::Reporter,
    resolver::{Probe, ProbeOutcome, Resolution},
};
use std::{
    io::{self, Stdout, Write},
    sync::Mutex,
};

/// Writes plain text, one line per report.
pub struct StdioReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> StdioReporter<W> {
    pub fn new(out: W) -> Self {
        StdioReporter {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

impl<W: Write + Send> Reporter for StdioReporter<W> {
    fn report_home(&self, resolution: Option<&Resolution>) -> io::Result<()> {
        match resolution {
            Some(resolution) => self.write_line(strip_last_char(&resolution.home)),
            // Nothing to print, the caller decides how to fail.
            None => Ok(()),
        }
    }

    fn report_probe(&self, probe: &Probe) -> io::Result<()> {
        let outcome = match &probe.outcome {
            ProbeOutcome::Found(value) => value.clone(),
            ProbeOutcome::NotFound => "not found".to_string(),
            ProbeOutcome::Failed(message) => format!("error: {}", message),
        };
        self.write_line(&format!("{} : {}", probe.candidate, outcome))
    }
}

pub fn create_reporter() -> StdioReporter<Stdout> {
    StdioReporter::new(io::stdout())
}

/// Drops the final character of an install path.
/// Installers record the path with a trailing separator, this is removed
/// unconditionally, whatever the last character is.
pub fn strip_last_char(value: &str) -> &str {
    match value.char_indices().next_back() {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

pub fn initialize_logger(log_level: LevelFilter) {
    Builder::new().filter(None, log_level).init();
}
