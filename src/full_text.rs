//! Read-more toggle for long review bodies.
//!
//! The expanded state of each review is tracked explicitly, keyed by review
//! identifier; the control label is derived from that state and never read
//! back.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::page::markup::{READ_LESS_LABEL, READ_MORE_LABEL};
use crate::page::{PageHandle, ReviewId};

/// How much of a review body is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDisplay {
    /// The server-rendered excerpt.
    #[default]
    Truncated,
    /// The whole body.
    Full,
}

impl TextDisplay {
    /// The opposite display.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Truncated => Self::Full,
            Self::Full => Self::Truncated,
        }
    }

    /// Label of the control while the body is displayed this way.
    #[must_use]
    pub const fn control_label(self) -> &'static str {
        match self {
            Self::Truncated => READ_MORE_LABEL,
            Self::Full => READ_LESS_LABEL,
        }
    }
}

/// Flips review bodies between their excerpt and full text.
#[derive(Debug, Clone)]
pub struct FullTextToggle {
    page: PageHandle,
    states: Arc<Mutex<BTreeMap<ReviewId, TextDisplay>>>,
}

impl FullTextToggle {
    /// Creates a toggle with every review truncated.
    #[must_use]
    pub fn new(page: PageHandle) -> Self {
        Self {
            page,
            states: Arc::default(),
        }
    }

    /// Flips the display of `review` and relabels its control.
    ///
    /// Returns the new display, or `None` when the page has no such card.
    /// Swapping the rendered body is left to the caller.
    pub fn toggle_full_text(&self, review: ReviewId) -> Option<TextDisplay> {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        let next = states.get(&review).copied().unwrap_or_default().toggled();
        let relabelled = self.page.update(|page| {
            let Some(card) = page.card_mut(review) else {
                return false;
            };
            card.set_full_text_label(next.control_label());
            true
        });
        if !relabelled {
            tracing::debug!("full text toggle skipped: no card for review {review}");
            return None;
        }
        states.insert(review, next);
        Some(next)
    }

    /// Current display of `review`.
    #[must_use]
    pub fn display(&self, review: ReviewId) -> TextDisplay {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&review)
            .copied()
            .unwrap_or_default()
    }
}
