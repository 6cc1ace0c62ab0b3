use crate::FactCollector;
use anyhow::Result;
use sysinfo::{ProcessesToUpdate, System};

/// Reports the names of all running processes as one comma-joined string.
///
/// Names are sorted so the fact value is stable across refreshes of the same
/// process set; duplicates (multiple instances of the same binary) are kept.
pub struct ProcessListCollector {
    system: System,
}

impl ProcessListCollector {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);
        Self { system }
    }
}

impl Default for ProcessListCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for ProcessListCollector {
    fn name(&self) -> &str {
        "running_processes"
    }

    fn collect(&mut self) -> Result<String> {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        let mut names: Vec<String> = self
            .system
            .processes()
            .values()
            .map(|process| process.name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names.join(","))
    }
}
