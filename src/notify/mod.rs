//! Transient notification banners.
//!
//! [`NotificationCenter::notify`] is fire-and-forget: the banner is visible
//! as soon as the call returns, slides in, dwells, slides out and is removed
//! by timers on the tokio runtime. At most
//! [`NotificationSettings::max_visible`] banners are shown at once, each in
//! its own slot; further banners wait in a bounded FIFO and are promoted as
//! slots free up.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::schedule;

const BANNER_BASE_CLASS: &str = "fixed right-4 text-white px-4 py-2 rounded-lg shadow-lg z-50 \
                                 transform transition-all duration-300";

/// Severity of a notification, selecting its accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    Info,
}

impl NotificationKind {
    /// Background accent class.
    #[must_use]
    pub const fn accent_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500",
            Self::Error => "bg-red-500",
            Self::Warning => "bg-yellow-500",
            Self::Info => "bg-blue-500",
        }
    }

    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}

/// Identifier of one banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

/// Animation phase of a visible banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// Inserted off-screen, about to slide in.
    Entering,
    /// Fully on screen.
    Shown,
    /// Sliding out before removal.
    Leaving,
}

impl BannerPhase {
    /// CSS transform for the phase.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Entering | Self::Leaving => "translateX(100%)",
            Self::Shown => "translateX(0)",
        }
    }
}

/// Timings and limits of the notification stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Delay between insertion and the slide-in.
    pub enter_delay: Duration,
    /// Time from insertion until the slide-out starts.
    pub dwell: Duration,
    /// Duration of the slide-out before removal.
    pub exit_duration: Duration,
    /// Maximum number of banners on screen.
    pub max_visible: usize,
    /// Maximum number of banners waiting for a slot; the oldest is dropped.
    pub max_pending: usize,
    /// Distance of the first slot from the top of the viewport.
    pub top_offset_px: u32,
    /// Vertical distance between consecutive slots.
    pub slot_spacing_px: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(100),
            dwell: Duration::from_millis(3000),
            exit_duration: Duration::from_millis(300),
            max_visible: 5,
            max_pending: 20,
            top_offset_px: 16,
            slot_spacing_px: 56,
        }
    }
}

impl NotificationSettings {
    /// Total time a banner spends on screen.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.dwell.saturating_add(self.exit_duration)
    }
}

/// A visible banner as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    phase: BannerPhase,
    slot: usize,
    top_px: u32,
}

impl Notification {
    /// Banner identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Severity.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Animation phase.
    #[must_use]
    pub const fn phase(&self) -> BannerPhase {
        self.phase
    }

    /// Zero-based slot, counted from the top.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Distance from the top of the viewport.
    #[must_use]
    pub const fn top_px(&self) -> u32 {
        self.top_px
    }

    /// Full class attribute of the banner element.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{BANNER_BASE_CLASS} {}", self.kind.accent_class())
    }
}

#[derive(Debug)]
struct Banner {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    phase: BannerPhase,
}

#[derive(Debug, Default)]
struct Stack {
    next_id: u64,
    visible: Vec<Banner>,
    pending: VecDeque<Banner>,
}

/// Owner of every notification banner on the page.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    stack: Arc<Mutex<Stack>>,
    settings: NotificationSettings,
}

impl NotificationCenter {
    /// Creates an empty notification stack.
    #[must_use]
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            stack: Arc::default(),
            settings,
        }
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Shows `message` and schedules its removal.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let (id, shown) = {
            let mut stack = self.lock();
            let id = NotificationId(stack.next_id);
            stack.next_id = stack.next_id.saturating_add(1);
            let banner = Banner {
                id,
                message: message.into(),
                kind,
                phase: BannerPhase::Entering,
            };

            if stack.visible.len() < self.settings.max_visible {
                stack.visible.push(banner);
                (id, true)
            } else {
                stack.pending.push_back(banner);
                if stack.pending.len() > self.settings.max_pending
                    && let Some(dropped) = stack.pending.pop_front()
                {
                    tracing::debug!("dropping queued notification: {}", dropped.message);
                }
                (id, false)
            }
        };

        if shown {
            self.start_lifecycle(id);
        }
        id
    }

    /// Banners currently on screen, top slot first.
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        let stack = self.lock();
        let mut top_px = self.settings.top_offset_px;
        let mut rendered = Vec::with_capacity(stack.visible.len());
        for (slot, banner) in stack.visible.iter().enumerate() {
            rendered.push(Notification {
                id: banner.id,
                message: banner.message.clone(),
                kind: banner.kind,
                phase: banner.phase,
                slot,
                top_px,
            });
            top_px = top_px.saturating_add(self.settings.slot_spacing_px);
        }
        rendered
    }

    /// Number of banners waiting for a slot.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    /// Removes a banner immediately, promoting the next queued one.
    ///
    /// Returns `false` when the banner is no longer visible.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let promoted = {
            let mut stack = self.lock();
            let before = stack.visible.len();
            stack.visible.retain(|banner| banner.id != id);
            if stack.visible.len() == before {
                return false;
            }
            let next = stack.pending.pop_front();
            next.map(|banner| {
                let promoted_id = banner.id;
                stack.visible.push(banner);
                promoted_id
            })
        };

        if let Some(promoted_id) = promoted {
            self.start_lifecycle(promoted_id);
        }
        true
    }

    fn start_lifecycle(&self, id: NotificationId) {
        let entering = self.clone();
        let scheduled = schedule::after(self.settings.enter_delay, move || {
            entering.set_phase(id, BannerPhase::Shown);
        });
        if !scheduled {
            self.set_phase(id, BannerPhase::Shown);
            return;
        }

        let leaving = self.clone();
        schedule::after(self.settings.dwell, move || {
            leaving.set_phase(id, BannerPhase::Leaving);
        });

        let removing = self.clone();
        schedule::after(self.settings.lifetime(), move || {
            removing.dismiss(id);
        });
    }

    fn set_phase(&self, id: NotificationId, phase: BannerPhase) {
        let mut stack = self.lock();
        if let Some(banner) = stack.visible.iter_mut().find(|banner| banner.id == id) {
            banner.phase = phase;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Stack> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
