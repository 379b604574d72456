//! Like toggling reconciled against the server.
//!
//! The toggle is not optimistic: the card only changes once the server has
//! reported the authoritative liked flag and count. While a request is in
//! flight the like control is disabled and further activations for the same
//! review are skipped.

use std::sync::Arc;
use std::time::Duration;

use crate::csrf::CsrfToken;
use crate::gateway::AvisGateway;
use crate::in_flight::{InFlight, SkipReason};
use crate::page::ReviewId;
use crate::schedule;
use crate::surface::Surface;
use crate::telemetry::{InteractionKind, TelemetryEvent};

/// Message shown when a like toggle fails.
pub const LIKE_FAILURE_MESSAGE: &str = "Erreur lors de l'action. Veuillez réessayer.";

/// How long the like control stays scaled up after a confirmed toggle.
pub const LIKE_EMPHASIS_DURATION: Duration = Duration::from_millis(200);

/// Result of a like activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The server confirmed the toggle and the card now shows its state.
    Applied {
        /// Server-reported liked flag.
        liked: bool,
        /// Server-reported like count.
        like_count: u64,
    },
    /// The server answered with `success: false`.
    Refused,
    /// The request or its response was unusable.
    Failed,
    /// Nothing was sent.
    Skipped(SkipReason),
}

/// Toggles likes and mirrors the server's answer on the card.
#[derive(Debug)]
pub struct LikeSynchronizer<G> {
    gateway: Arc<G>,
    surface: Surface,
    csrf: CsrfToken,
    in_flight: InFlight,
}

impl<G: AvisGateway> LikeSynchronizer<G> {
    /// Creates a synchroniser sending `csrf` with every request.
    #[must_use]
    pub fn new(gateway: Arc<G>, surface: Surface, csrf: CsrfToken) -> Self {
        Self {
            gateway,
            surface,
            csrf,
            in_flight: InFlight::default(),
        }
    }

    /// Whether a like request for `review` is awaiting its response.
    #[must_use]
    pub fn is_in_flight(&self, review: ReviewId) -> bool {
        self.in_flight.contains(review)
    }

    /// Toggles the viewer's like on `review`.
    pub async fn toggle_like(&self, review: ReviewId) -> LikeOutcome {
        if !self.surface.page().read(|page| page.is_interactive(review)) {
            tracing::debug!("like skipped: no card for review {review}");
            return LikeOutcome::Skipped(SkipReason::MissingCard);
        }
        let Some(_ticket) = self.in_flight.try_begin(review) else {
            tracing::debug!("like skipped: request for review {review} in flight");
            return LikeOutcome::Skipped(SkipReason::InFlight);
        };

        self.set_pending(review, true);
        let result = self.gateway.toggle_like(review, &self.csrf).await;
        self.set_pending(review, false);

        match result {
            Ok(reply) if reply.is_refusal() => self.refused(review, reply.message.as_deref()),
            Ok(reply) => match reply.like_state() {
                Some((liked, like_count)) => self.apply(review, liked, like_count),
                None => self.failed(review, "like response lacks liked or nombre_likes"),
            },
            Err(error) => match error.server_message() {
                Some(message) => self.refused(review, Some(message)),
                None => self.failed(review, &error.to_string()),
            },
        }
    }

    fn apply(&self, review: ReviewId, liked: bool, like_count: u64) -> LikeOutcome {
        let generation = self.surface.page().update(|page| {
            page.card_mut(review).map(|card| {
                card.apply_like(liked, like_count);
                card.emphasise_like()
            })
        });

        if let Some(generation) = generation {
            let handle = self.surface.page().clone();
            schedule::after(LIKE_EMPHASIS_DURATION, move || {
                handle.update(|page| {
                    if let Some(card) = page.card_mut(review) {
                        card.release_like_emphasis(generation);
                    }
                });
            });
        }

        self.surface.record(TelemetryEvent::LikeSynchronised {
            review_id: review,
            liked,
            like_count,
        });
        LikeOutcome::Applied { liked, like_count }
    }

    fn refused(&self, review: ReviewId, message: Option<&str>) -> LikeOutcome {
        let shown = message.unwrap_or(LIKE_FAILURE_MESSAGE);
        tracing::debug!("like refused for review {review}: {shown}");
        self.surface.notify_error(shown);
        self.record_failure(review, shown);
        LikeOutcome::Refused
    }

    fn failed(&self, review: ReviewId, detail: &str) -> LikeOutcome {
        tracing::error!("like request for review {review} failed: {detail}");
        self.surface.notify_error(LIKE_FAILURE_MESSAGE);
        self.record_failure(review, detail);
        LikeOutcome::Failed
    }

    fn record_failure(&self, review: ReviewId, reason: &str) {
        self.surface.record(TelemetryEvent::InteractionFailed {
            review_id: review,
            interaction: InteractionKind::Like,
            reason: reason.to_owned(),
        });
    }

    fn set_pending(&self, review: ReviewId, pending: bool) {
        self.surface.page().update(|page| {
            if let Some(card) = page.card_mut(review) {
                card.set_like_pending(pending);
            }
        });
    }
}

#[cfg(test)]
#[path = "like_tests.rs"]
mod tests;
