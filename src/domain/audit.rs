//! Audit records for mutating operations

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// Outcome recorded on an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    #[default]
    Fail,
    Success,
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// One audit entry
///
/// Starts out as [`AuditStatus::Fail`]; callers flip it with [`success`]
/// only once the operation has completed.
///
/// [`success`]: AuditRecord::success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    action: String,
    status: AuditStatus,
    meta: BTreeMap<String, Value>,
    created_at: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            status: AuditStatus::Fail,
            meta: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach (or overwrite) a metadata entry
    ///
    /// Values that fail to serialize are stored as `null`.
    pub fn add_meta(&mut self, key: impl Into<String>, value: impl Serialize) {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.meta.insert(key.into(), value);
    }

    pub fn success(&mut self) {
        self.status = AuditStatus::Success;
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn status(&self) -> AuditStatus {
        self.status
    }

    pub fn meta(&self) -> &BTreeMap<String, Value> {
        &self.meta
    }

    pub fn get_meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Destination for audit records
#[cfg_attr(test, automock)]
pub trait AuditSink: Send + Sync {
    fn log(&self, record: AuditRecord);
}
