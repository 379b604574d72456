//! Per-review in-flight guards for network actions.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::page::ReviewId;

/// Why an action returned without contacting the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No interactive card exists for the review.
    MissingCard,
    /// A request for the same review is still awaiting its response.
    InFlight,
    /// The viewer dismissed the confirmation or the reason prompt.
    Cancelled,
    /// The rejection reason was empty.
    EmptyReason,
}

/// Set of reviews with a request awaiting its response.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<Mutex<HashSet<ReviewId>>>);

impl InFlight {
    /// Marks `review` as in flight.
    ///
    /// Returns `None` when a request for `review` is already pending. The
    /// flag is cleared when the returned ticket is dropped.
    #[must_use]
    pub fn try_begin(&self, review: ReviewId) -> Option<InFlightTicket> {
        if !self.lock().insert(review) {
            return None;
        }
        Some(InFlightTicket {
            reviews: self.clone(),
            review,
        })
    }

    /// Whether a request for `review` is pending.
    #[must_use]
    pub fn contains(&self, review: ReviewId) -> bool {
        self.lock().contains(&review)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<ReviewId>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the in-flight flag of one review when dropped.
#[derive(Debug)]
pub struct InFlightTicket {
    reviews: InFlight,
    review: ReviewId,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.reviews.lock().remove(&self.review);
    }
}
