//! Traversal tracing.
//!
//! The walker reports every node it enters and leaves to a [`TraceSink`].
//! [`NoopTrace`] discards events, [`TracingSink`] forwards them to `tracing`,
//! and a `Vec<TraceEvent>` records them.

use crate::node::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePhase {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    pub phase: TracePhase,
    pub kind: NodeKind,
    /// Nesting depth; the root is 0.
    pub depth: usize,
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self.phase {
            TracePhase::Enter => "Entering",
            TracePhase::Leave => "Leaving",
        };
        write!(f, "{:width$}{} {}", "", verb, self.kind, width = self.depth * 2)
    }
}

pub trait TraceSink {
    fn event(&mut self, event: TraceEvent);
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn event(&mut self, _event: TraceEvent) {}
}

/// Forwards events to `tracing` at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn event(&mut self, event: TraceEvent) {
        match event.phase {
            TracePhase::Enter => {
                tracing::trace!(kind = %event.kind, depth = event.depth, "entering node")
            }
            TracePhase::Leave => {
                tracing::trace!(kind = %event.kind, depth = event.depth, "leaving node")
            }
        }
    }
}

impl TraceSink for Vec<TraceEvent> {
    fn event(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
