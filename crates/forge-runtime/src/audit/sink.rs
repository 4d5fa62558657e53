//! Audit sink implementations

use super::record::AuditRecord;
use crate::error::{Result, RuntimeError};
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;

/// Tracing target used by [`TracingAuditSink`]
pub const AUDIT_TARGET: &str = "forge::audit";

/// Receives one record per decision
pub trait AuditSink: Send + Sync {
    /// Emit a record. Failures are reported to the caller, never retried here.
    fn emit(&self, record: &AuditRecord) -> Result<()>;

    /// Name used in error reports
    fn name(&self) -> &str;
}

/// Writes each record as a JSON log line on the `forge::audit` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn emit(&self, record: &AuditRecord) -> Result<()> {
        let line = record.to_json()?;
        tracing::info!(
            target: AUDIT_TARGET,
            client = %record.client,
            outcome = %record.decision.outcome(),
            "{}",
            line
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

/// Keeps records in memory (tests, short-lived sessions)
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record received so far
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn emit(&self, record: &AuditRecord) -> Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Queues records on an unbounded channel so a background task can ship them
/// without blocking decisions
pub struct ChannelAuditSink {
    sender: mpsc::UnboundedSender<AuditRecord>,
}

impl ChannelAuditSink {
    /// Create a sink and the receiving end of its queue
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AuditRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl AuditSink for ChannelAuditSink {
    fn emit(&self, record: &AuditRecord) -> Result<()> {
        self.sender
            .send(record.clone())
            .map_err(|e| RuntimeError::AuditSink {
                sink: self.name().to_string(),
                reason: format!("Failed to queue audit record: {}", e),
            })
    }

    fn name(&self) -> &str {
        "channel"
    }
}
