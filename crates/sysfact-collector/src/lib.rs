//! Host fact collection for the sysfact agent.
//!
//! Each [`FactCollector`] implementation gathers one fact as a string;
//! [`gather_record`] runs all five in wire order and folds them into a
//! [`SystemFactRecord`]. Gathering is all-or-nothing: any collector failure
//! aborts the whole run, so a partial record is never submitted.

pub mod os;
pub mod processes;
pub mod processor;
pub mod users;

use anyhow::{Context, Result};
use sysfact_common::types::SystemFactRecord;

/// A single-fact collector that runs on the agent host.
pub trait FactCollector {
    /// Returns the collector name (e.g., `"processor"`), used for error
    /// context and logging.
    fn name(&self) -> &str;

    /// Collects the current fact value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying system API or command fails.
    fn collect(&mut self) -> Result<String>;
}

fn run(collector: &mut dyn FactCollector) -> Result<String> {
    collector
        .collect()
        .with_context(|| format!("collector '{}' failed", collector.name()))
}

/// Gathers all five facts in wire order.
pub fn gather_record() -> Result<SystemFactRecord> {
    Ok(SystemFactRecord::from_values([
        run(&mut processor::ProcessorCollector::new())?,
        run(&mut processes::ProcessListCollector::new())?,
        run(&mut users::SessionUserCollector::new())?,
        run(&mut os::OsNameCollector)?,
        run(&mut os::OsVersionCollector)?,
    ]))
}
