use anyhow::{bail, Context, Result};
use sysfact_common::types::SystemFactRecord;
use sysfact_common::wire;

/// Submits encoded fact records to the collector.
///
/// A submission is all-or-nothing: encoding failures, transport failures and
/// non-success responses all abort the run, so the collector never sees a
/// partial record.
pub struct Submitter {
    client: reqwest::Client,
    endpoint: String,
}

impl Submitter {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/system-info", api_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit(&self, record: &SystemFactRecord) -> Result<()> {
        let body = wire::encode_record(record).context("failed to encode fact record")?;

        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/csv")
            .body(body)
            .send()
            .await
            .context("failed to reach collector")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("collector rejected submission with status {status}");
        }
        Ok(())
    }
}
