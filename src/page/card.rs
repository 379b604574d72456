//! Review cards and their identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::markup::{LIKE_BUTTON_CLASS, LIKED_CLASS, NOT_LIKED_CLASS, READ_MORE_LABEL};
use crate::error::InteractionError;

/// Identifier of a review, stable for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(u64);

impl ReviewId {
    /// Wraps a positive review identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::InvalidReviewId`] when `value` is zero.
    pub fn new(value: u64) -> Result<Self, InteractionError> {
        if value == 0 {
            return Err(InteractionError::InvalidReviewId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for ReviewId {
    type Err = InteractionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input
            .trim()
            .parse::<u64>()
            .map_err(|_| InteractionError::InvalidReviewId(input.to_owned()))?;
        Self::new(value)
    }
}

/// Visual transition state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTransition {
    /// The card is displayed normally.
    #[default]
    Resting,
    /// The card is fading out and sliding left before being detached.
    Exiting,
}

impl CardTransition {
    /// CSS opacity of the card.
    #[must_use]
    pub const fn opacity(self) -> &'static str {
        match self {
            Self::Resting => "1",
            Self::Exiting => "0",
        }
    }

    /// CSS transform of the card.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Resting => "none",
            Self::Exiting => "translateX(-100%)",
        }
    }

    /// CSS transition declaration, present while the card is exiting.
    #[must_use]
    pub const fn transition(self) -> Option<&'static str> {
        match self {
            Self::Resting => None,
            Self::Exiting => Some("all 0.3s ease"),
        }
    }
}

/// Visual reflection of one review in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    id: ReviewId,
    like_count: u64,
    liked_by_viewer: bool,
    like_emphasised: bool,
    like_emphasis_generation: u64,
    like_pending: bool,
    moderation_pending: bool,
    full_text_label: String,
    transition: CardTransition,
}

impl ReviewCard {
    /// Creates a card with no likes and a truncated body.
    #[must_use]
    pub fn new(id: ReviewId) -> Self {
        Self {
            id,
            like_count: 0,
            liked_by_viewer: false,
            like_emphasised: false,
            like_emphasis_generation: 0,
            like_pending: false,
            moderation_pending: false,
            full_text_label: READ_MORE_LABEL.to_owned(),
            transition: CardTransition::Resting,
        }
    }

    /// Sets the like state rendered by the server.
    #[must_use]
    pub const fn with_likes(mut self, like_count: u64, liked_by_viewer: bool) -> Self {
        self.like_count = like_count;
        self.liked_by_viewer = liked_by_viewer;
        self
    }

    /// Review identifier.
    #[must_use]
    pub const fn id(&self) -> ReviewId {
        self.id
    }

    /// Like count currently displayed.
    #[must_use]
    pub const fn like_count(&self) -> u64 {
        self.like_count
    }

    /// Whether the liked indicator is active.
    #[must_use]
    pub const fn liked_by_viewer(&self) -> bool {
        self.liked_by_viewer
    }

    /// Accent class of the like control.
    #[must_use]
    pub const fn like_indicator_class(&self) -> &'static str {
        if self.liked_by_viewer {
            LIKED_CLASS
        } else {
            NOT_LIKED_CLASS
        }
    }

    /// Full class list of the like control, accent included.
    #[must_use]
    pub fn like_control_class(&self) -> String {
        format!("{LIKE_BUTTON_CLASS} {}", self.like_indicator_class())
    }

    /// Whether the like control is currently scaled up.
    #[must_use]
    pub const fn is_like_emphasised(&self) -> bool {
        self.like_emphasised
    }

    /// CSS transform of the like control.
    #[must_use]
    pub const fn like_transform(&self) -> &'static str {
        if self.like_emphasised {
            "scale(1.2)"
        } else {
            "scale(1)"
        }
    }

    /// Whether the like control is disabled by an in-flight request.
    #[must_use]
    pub const fn is_like_pending(&self) -> bool {
        self.like_pending
    }

    /// Whether the moderation controls are disabled by an in-flight request.
    #[must_use]
    pub const fn is_moderation_pending(&self) -> bool {
        self.moderation_pending
    }

    /// Label of the full-text control.
    #[must_use]
    pub fn full_text_label(&self) -> &str {
        self.full_text_label.as_str()
    }

    /// Current transition state.
    #[must_use]
    pub const fn transition(&self) -> CardTransition {
        self.transition
    }

    /// Whether the card has started its exit transition.
    #[must_use]
    pub const fn is_exiting(&self) -> bool {
        matches!(self.transition, CardTransition::Exiting)
    }

    pub(crate) const fn apply_like(&mut self, liked: bool, like_count: u64) {
        self.liked_by_viewer = liked;
        self.like_count = like_count;
    }

    /// Scales the like control up and returns the emphasis generation that
    /// may later release it.
    pub(crate) const fn emphasise_like(&mut self) -> u64 {
        self.like_emphasised = true;
        self.like_emphasis_generation = self.like_emphasis_generation.wrapping_add(1);
        self.like_emphasis_generation
    }

    /// Clears the emphasis unless a later confirmation renewed it.
    pub(crate) const fn release_like_emphasis(&mut self, generation: u64) {
        if self.like_emphasis_generation == generation {
            self.like_emphasised = false;
        }
    }

    pub(crate) const fn set_like_pending(&mut self, pending: bool) {
        self.like_pending = pending;
    }

    pub(crate) const fn set_moderation_pending(&mut self, pending: bool) {
        self.moderation_pending = pending;
    }

    pub(crate) fn set_full_text_label(&mut self, label: &str) {
        label.clone_into(&mut self.full_text_label);
    }

    pub(crate) const fn begin_exit(&mut self) {
        self.transition = CardTransition::Exiting;
    }
}
