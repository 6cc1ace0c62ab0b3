use crate::FactCollector;
use anyhow::{bail, Result};
use sysinfo::System;

/// Reports the processor architecture identifier (e.g., `x86_64`).
pub struct ProcessorCollector;

impl ProcessorCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessorCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for ProcessorCollector {
    fn name(&self) -> &str {
        "processor"
    }

    fn collect(&mut self) -> Result<String> {
        let arch = System::cpu_arch();
        if arch.is_empty() {
            bail!("cpu architecture unavailable");
        }
        Ok(arch)
    }
}
