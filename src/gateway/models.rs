//! Request and response bodies of the review endpoints.

use serde::{Deserialize, Serialize};

/// Body returned by the like endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LikeReply {
    /// Explicit outcome; absence means success.
    #[serde(default)]
    pub success: Option<bool>,
    /// Whether the viewer now likes the review.
    #[serde(default)]
    pub liked: Option<bool>,
    /// Authoritative like count.
    #[serde(default, rename = "nombre_likes")]
    pub like_count: Option<u64>,
    /// Explanation sent with a refusal.
    #[serde(default)]
    pub message: Option<String>,
}

impl LikeReply {
    /// Builds the reply of a confirmed toggle.
    #[must_use]
    pub const fn confirmed(liked: bool, like_count: u64) -> Self {
        Self {
            success: None,
            liked: Some(liked),
            like_count: Some(like_count),
            message: None,
        }
    }

    /// Whether the server explicitly refused the toggle.
    #[must_use]
    pub const fn is_refusal(&self) -> bool {
        matches!(self.success, Some(false))
    }

    /// Liked flag and count, when both were reported.
    #[must_use]
    pub const fn like_state(&self) -> Option<(bool, u64)> {
        match (self.liked, self.like_count) {
            (Some(liked), Some(like_count)) => Some((liked, like_count)),
            _ => None,
        }
    }
}

/// Moderation status sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModerationStatus {
    /// The review is published.
    #[serde(rename = "approuve")]
    Approved,
    /// The review is withdrawn.
    #[serde(rename = "rejete")]
    Rejected,
}

impl ModerationStatus {
    /// Value of the `statut_moderation` field.
    #[must_use]
    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::Approved => "approuve",
            Self::Rejected => "rejete",
        }
    }

    /// Past participle used in confirmation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "approuvé",
            Self::Rejected => "rejeté",
        }
    }
}

/// Body posted to the moderation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModerationRequest {
    /// Requested status.
    #[serde(rename = "statut_moderation")]
    pub status: ModerationStatus,
    /// Rejection reason; empty when approving.
    #[serde(rename = "raison_rejet")]
    pub reason: String,
}

impl ModerationRequest {
    /// Approval request.
    #[must_use]
    pub const fn approve() -> Self {
        Self {
            status: ModerationStatus::Approved,
            reason: String::new(),
        }
    }

    /// Rejection request carrying `reason`.
    #[must_use]
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            status: ModerationStatus::Rejected,
            reason: reason.into(),
        }
    }
}

/// Body returned by the moderation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModerationReply {
    /// Explicit outcome; absence means failure.
    #[serde(default)]
    pub success: bool,
    /// Explanation, used when the decision is refused.
    #[serde(default)]
    pub message: Option<String>,
}
