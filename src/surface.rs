//! Page, notifications and telemetry shared by the network controllers.

use std::fmt;
use std::sync::Arc;

use crate::notify::{NotificationCenter, NotificationKind};
use crate::page::PageHandle;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Everything a controller renders into.
#[derive(Clone)]
pub struct Surface {
    page: PageHandle,
    notifications: NotificationCenter,
    telemetry: Arc<dyn TelemetrySink>,
}

impl Surface {
    /// Bundles a page and a notification stack, dropping telemetry.
    #[must_use]
    pub fn new(page: PageHandle, notifications: NotificationCenter) -> Self {
        Self {
            page,
            notifications,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Shared page.
    #[must_use]
    pub const fn page(&self) -> &PageHandle {
        &self.page
    }

    /// Notification stack.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub(crate) fn notify_error(&self, message: &str) {
        self.notifications.notify(message, NotificationKind::Error);
    }

    pub(crate) fn record(&self, event: TelemetryEvent) {
        self.telemetry.record(event);
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Surface")
            .field("page", &self.page)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}
