//! Publisher that prints messages instead of posting them.

use std::io::Write;

use myturn_publisher::{PublishError, Publisher};

pub(crate) struct DryRunPublisher;

impl Publisher for DryRunPublisher {
    async fn publish(&self, text: &str) -> Result<(), PublishError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "---\n{text}").map_err(|e| PublishError::Other(e.to_string()))
    }
}
