//! Audit sinks

use std::sync::Mutex;

use tracing::info;

use crate::domain::audit::{AuditRecord, AuditSink};

/// Writes audit records to the `audit` tracing target
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn log(&self, record: AuditRecord) {
        let meta = serde_json::to_string(record.meta()).unwrap_or_default();

        info!(
            target: "audit",
            action = %record.action(),
            status = %record.status(),
            created_at = %record.created_at().to_rfc3339(),
            meta = %meta,
            "Audit record"
        );
    }
}

/// Keeps audit records in memory, in the order they were logged
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn log(&self, record: AuditRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}
