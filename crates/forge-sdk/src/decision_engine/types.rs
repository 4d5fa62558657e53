//! Result types for DecisionEngine

use forge_core::{CoreError, Decision};
use serde::Serialize;

/// Delivery status of the audit record for one decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuditStatus {
    Delivered,
    Failed { reason: String },
}

impl AuditStatus {
    pub fn is_delivered(&self) -> bool {
        matches!(self, AuditStatus::Delivered)
    }
}

/// A decision together with the fate of its audit record.
///
/// The decision is the same whether or not the record was delivered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReceipt {
    pub decision: Decision,
    pub audit: AuditStatus,
}

/// Per-item result of a batch run
#[derive(Debug, Clone, PartialEq)]
pub enum BatchItem {
    Decided(Decision),
    Rejected(CoreError),
}

impl BatchItem {
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            BatchItem::Decided(decision) => Some(decision),
            BatchItem::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CoreError> {
        match self {
            BatchItem::Decided(_) => None,
            BatchItem::Rejected(error) => Some(error),
        }
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, BatchItem::Decided(_))
    }
}

impl Serialize for BatchItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            BatchItem::Decided(decision) => map.serialize_entry("decision", decision)?,
            BatchItem::Rejected(error) => map.serialize_entry("error", &error.to_string())?,
        }
        map.end()
    }
}
