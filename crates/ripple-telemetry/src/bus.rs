//! Per-tick event queue.
//!
//! The engine queues events while it holds the solver mutably (inside the
//! accumulator's step closure, or while the mapper writes impulses), so
//! `emit` only needs `&self`. Once the tick or input call has finished it
//! calls `flush`, and sinks see that call's events in order. Nothing is
//! delivered between a step and the end of its tick.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Queue of pending simulation events plus the sinks they drain into.
pub struct EventBus {
    sender: mpsc::Sender<SimulationEvent>,
    receiver: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
}

impl EventBus {
    /// An empty, enabled bus with no sinks. Events queued with no sinks
    /// registered are discarded at the next flush.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Adds a sink. It receives events from the next flush on.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Turns queuing on or off. Events already queued are still delivered.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether `emit` currently queues events.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event for the next flush. Dropped while disabled.
    pub fn emit(&self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        // Receiver lives as long as the bus.
        let _ = self.sender.send(event);
    }

    /// Hands every queued event to each sink in queue order and returns
    /// the number of events drained. The engine calls this at the end of
    /// every tick and input call.
    pub fn flush(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            delivered += 1;
        }
        delivered
    }

    /// Final flush at the end of a run, then `finalize` on every sink.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("sinks", &self.sinks.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("enabled", &self.enabled)
            .finish()
    }
}
