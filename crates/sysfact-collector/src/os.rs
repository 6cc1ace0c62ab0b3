use crate::FactCollector;
use anyhow::{Context, Result};
use sysinfo::System;

/// Reports the operating system family name (e.g., `linux`, `macos`).
pub struct OsNameCollector;

impl FactCollector for OsNameCollector {
    fn name(&self) -> &str {
        "os_name"
    }

    fn collect(&mut self) -> Result<String> {
        Ok(std::env::consts::OS.to_string())
    }
}

/// Reports the kernel/OS version string.
pub struct OsVersionCollector;

impl FactCollector for OsVersionCollector {
    fn name(&self) -> &str {
        "os_version"
    }

    fn collect(&mut self) -> Result<String> {
        System::kernel_version()
            .or_else(System::os_version)
            .context("OS version unavailable")
    }
}
