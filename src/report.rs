//! Opening the report modal for a review.

use crate::page::markup::{HIDDEN_CLASS, REPORT_MODAL_ID};
use crate::page::{PageHandle, ReviewId};

/// Shows the report modal.
#[derive(Debug, Clone)]
pub struct ReportDialog {
    page: PageHandle,
}

impl ReportDialog {
    /// Creates a dialog opener over `page`.
    #[must_use]
    pub const fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Removes the `hidden` class from the report modal and records
    /// `review` on it.
    ///
    /// Returns `false` without touching the page when the page carries no
    /// report modal or no card for `review`.
    pub fn open(&self, review: ReviewId) -> bool {
        self.page.update(|page| {
            if page.card(review).is_none() {
                tracing::debug!("report skipped: no card for review {review}");
                return false;
            }
            let Some(modal) = page.report_modal_mut() else {
                tracing::debug!("report skipped: no #{REPORT_MODAL_ID} element");
                return false;
            };
            modal.show_for(review);
            tracing::debug!("removed .{HIDDEN_CLASS} from #{REPORT_MODAL_ID} for review {review}");
            true
        })
    }
}
