//! Quick approve and reject actions for moderators.
//!
//! Approval needs a confirmation and rejection needs a non-empty reason;
//! both are local preconditions checked before anything is sent. A decision
//! accepted by the server makes the card fade and slide out, and the card is
//! detached once the transition has run. Cards that are missing, leaving the
//! page or awaiting a previous decision never trigger a request.

use std::sync::Arc;
use std::time::Duration;

use crate::csrf::CsrfToken;
use crate::dialogs::Dialogs;
use crate::gateway::{AvisGateway, ModerationRequest, ModerationStatus};
use crate::in_flight::{InFlight, SkipReason};
use crate::notify::NotificationKind;
use crate::page::ReviewId;
use crate::schedule;
use crate::surface::Surface;
use crate::telemetry::{InteractionKind, TelemetryEvent};

/// Question asked before approving.
pub const APPROVE_QUESTION: &str = "Approuver cet avis ?";

/// Prompt asking for the rejection reason.
pub const REJECT_REASON_PROMPT: &str = "Raison du rejet :";

/// Message shown when a decision fails without a server explanation.
pub const MODERATION_FAILURE_MESSAGE: &str = "Erreur lors de la modération";

/// Duration of the card's exit transition.
pub const CARD_EXIT_DURATION: Duration = Duration::from_millis(300);

/// Result of a moderation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationOutcome {
    /// The server accepted the decision; the card is leaving the page.
    Applied(ModerationStatus),
    /// The server refused the decision.
    Refused {
        /// Message shown to the moderator.
        message: String,
    },
    /// The request or its response was unusable.
    Failed,
    /// Nothing was sent.
    Skipped(SkipReason),
}

/// Sends moderation decisions and retires moderated cards.
#[derive(Debug)]
pub struct ModerationDispatcher<G, D> {
    gateway: Arc<G>,
    dialogs: Arc<D>,
    surface: Surface,
    csrf: CsrfToken,
    in_flight: InFlight,
}

impl<G: AvisGateway, D: Dialogs> ModerationDispatcher<G, D> {
    /// Creates a dispatcher sending `csrf` with every request.
    #[must_use]
    pub fn new(gateway: Arc<G>, dialogs: Arc<D>, surface: Surface, csrf: CsrfToken) -> Self {
        Self {
            gateway,
            dialogs,
            surface,
            csrf,
            in_flight: InFlight::default(),
        }
    }

    /// Whether a decision for `review` is awaiting its response.
    #[must_use]
    pub fn is_in_flight(&self, review: ReviewId) -> bool {
        self.in_flight.contains(review)
    }

    /// Approves `review` once the moderator confirms.
    pub async fn approve(&self, review: ReviewId) -> ModerationOutcome {
        if let Some(reason) = self.precondition(review) {
            return ModerationOutcome::Skipped(reason);
        }
        if !self.dialogs.confirm(APPROVE_QUESTION) {
            tracing::debug!("approval of review {review} cancelled");
            return ModerationOutcome::Skipped(SkipReason::Cancelled);
        }
        self.dispatch(review, ModerationRequest::approve()).await
    }

    /// Rejects `review` with a reason asked from the moderator.
    pub async fn reject(&self, review: ReviewId) -> ModerationOutcome {
        if let Some(reason) = self.precondition(review) {
            return ModerationOutcome::Skipped(reason);
        }
        let Some(reason) = self.dialogs.prompt(REJECT_REASON_PROMPT) else {
            tracing::debug!("rejection of review {review} cancelled");
            return ModerationOutcome::Skipped(SkipReason::Cancelled);
        };
        self.reject_with_reason(review, &reason).await
    }

    /// Rejects `review` with `reason`; a blank reason sends nothing.
    pub async fn reject_with_reason(&self, review: ReviewId, reason: &str) -> ModerationOutcome {
        if reason.trim().is_empty() {
            tracing::debug!("rejection of review {review} has no reason");
            return ModerationOutcome::Skipped(SkipReason::EmptyReason);
        }
        self.dispatch(review, ModerationRequest::reject(reason)).await
    }

    fn precondition(&self, review: ReviewId) -> Option<SkipReason> {
        if !self.surface.page().read(|page| page.is_interactive(review)) {
            tracing::debug!("moderation skipped: no card for review {review}");
            return Some(SkipReason::MissingCard);
        }
        if self.in_flight.contains(review) {
            tracing::debug!("moderation skipped: decision for review {review} in flight");
            return Some(SkipReason::InFlight);
        }
        None
    }

    async fn dispatch(&self, review: ReviewId, request: ModerationRequest) -> ModerationOutcome {
        if let Some(reason) = self.precondition(review) {
            return ModerationOutcome::Skipped(reason);
        }
        let Some(_ticket) = self.in_flight.try_begin(review) else {
            return ModerationOutcome::Skipped(SkipReason::InFlight);
        };

        self.set_pending(review, true);
        let result = self.gateway.moderate(review, &request, &self.csrf).await;
        self.set_pending(review, false);

        match result {
            Ok(reply) if reply.success => self.applied(review, request.status),
            Ok(reply) => self.refused(review, reply.message.as_deref()),
            Err(error) => {
                if let Some(message) = error.server_message() {
                    return self.refused(review, Some(message));
                }
                tracing::error!("moderation request for review {review} failed: {error}");
                self.surface.notify_error(MODERATION_FAILURE_MESSAGE);
                self.record_failure(review, &error.to_string());
                ModerationOutcome::Failed
            }
        }
    }

    fn applied(&self, review: ReviewId, status: ModerationStatus) -> ModerationOutcome {
        self.surface.page().update(|page| {
            if let Some(card) = page.card_mut(review) {
                card.begin_exit();
            }
        });

        let handle = self.surface.page().clone();
        schedule::after(CARD_EXIT_DURATION, move || {
            handle.update(|page| {
                page.remove_card(review);
            });
        });

        self.surface.notifications().notify(
            format!("Avis {} avec succès", status.label()),
            NotificationKind::Success,
        );
        self.surface.record(TelemetryEvent::ModerationApplied {
            review_id: review,
            status: status.wire_value().to_owned(),
        });
        ModerationOutcome::Applied(status)
    }

    fn refused(&self, review: ReviewId, message: Option<&str>) -> ModerationOutcome {
        let shown = message.unwrap_or(MODERATION_FAILURE_MESSAGE).to_owned();
        tracing::debug!("moderation of review {review} refused: {shown}");
        self.surface.notify_error(&shown);
        self.record_failure(review, &shown);
        ModerationOutcome::Refused { message: shown }
    }

    fn record_failure(&self, review: ReviewId, reason: &str) {
        self.surface.record(TelemetryEvent::InteractionFailed {
            review_id: review,
            interaction: InteractionKind::Moderation,
            reason: reason.to_owned(),
        });
    }

    fn set_pending(&self, review: ReviewId, pending: bool) {
        self.surface.page().update(|page| {
            if let Some(card) = page.card_mut(review) {
                card.set_moderation_pending(pending);
            }
        });
    }
}
