//! Interaction telemetry events and sinks.
//!
//! Settled like and moderation actions are reported as structured events so
//! that the outcome of each interaction can be inspected without scraping
//! notification text.

use std::io;

use serde::{Deserialize, Serialize};

use crate::page::ReviewId;

/// Network action a telemetry event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Like toggle.
    Like,
    /// Approve or reject decision.
    Moderation,
}

/// A structured telemetry event emitted by the interaction layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The server confirmed a like toggle.
    LikeSynchronised {
        /// Review whose like state changed.
        review_id: ReviewId,
        /// Server-reported liked flag.
        liked: bool,
        /// Server-reported like count.
        like_count: u64,
    },
    /// The server accepted a moderation decision.
    ModerationApplied {
        /// Moderated review.
        review_id: ReviewId,
        /// Wire value of the resulting status.
        status: String,
    },
    /// A network action failed or was refused by the server.
    InteractionFailed {
        /// Review the action targeted.
        review_id: ReviewId,
        /// Action that failed.
        interaction: InteractionKind,
        /// Failure detail.
        reason: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Sinks for asserting on emitted events in tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink keeping every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns and clears the recorded events.
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}
