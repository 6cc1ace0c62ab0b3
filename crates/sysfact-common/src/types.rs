use serde::{Deserialize, Serialize};

/// Number of facts carried by one submission.
pub const FACT_COUNT: usize = 5;

/// Wire-level row labels, in submission order. Only the position of a row is
/// significant when decoding; the labels exist for human readers of the
/// persisted CSV files.
pub const FACT_LABELS: [&str; FACT_COUNT] = [
    "Processor",
    "Running Processes",
    "Users",
    "OS Name",
    "OS Version",
];

/// One host snapshot: the five facts an agent reports per submission.
///
/// `running_processes` and `users` are joined lists (comma- and
/// space-delimited respectively) but are treated as opaque strings once
/// inside the record. Field order matters: it is both the CSV row order and
/// the JSON key order of the persisted artifact.
///
/// # Examples
///
/// ```
/// use sysfact_common::types::SystemFactRecord;
///
/// let record = SystemFactRecord::from_values([
///     "x86_64".into(),
///     "init,bash,sshd".into(),
///     "alice bob".into(),
///     "linux".into(),
///     "5.15.0".into(),
/// ]);
/// assert_eq!(record.os_name.as_deref(), Some("linux"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFactRecord {
    pub processor: Option<String>,
    pub running_processes: Option<String>,
    pub users: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
}

impl SystemFactRecord {
    /// Builds a record from five values in wire order.
    pub fn from_values(values: [String; FACT_COUNT]) -> Self {
        let [processor, running_processes, users, os_name, os_version] = values;
        Self {
            processor: Some(processor),
            running_processes: Some(running_processes),
            users: Some(users),
            os_name: Some(os_name),
            os_version: Some(os_version),
        }
    }

    /// Returns `(label, value)` pairs in wire order. Unset fields map to
    /// `None` and encode as empty CSV values.
    pub fn fields(&self) -> [(&'static str, Option<&str>); FACT_COUNT] {
        [
            (FACT_LABELS[0], self.processor.as_deref()),
            (FACT_LABELS[1], self.running_processes.as_deref()),
            (FACT_LABELS[2], self.users.as_deref()),
            (FACT_LABELS[3], self.os_name.as_deref()),
            (FACT_LABELS[4], self.os_version.as_deref()),
        ]
    }
}
