//! Audit emission
//!
//! Every decision produces exactly one [`AuditRecord`], handed to an
//! [`AuditSink`]. What the sink does with it (log line, channel, pipeline) is the
//! sink's business.

mod record;
mod sink;

pub use record::AuditRecord;
pub use sink::{AuditSink, ChannelAuditSink, MemoryAuditSink, TracingAuditSink, AUDIT_TARGET};
