//! Gateways for the review endpoints.
//!
//! Controllers talk to the server through [`AvisGateway`] so tests can swap
//! in mocks; [`ReqwestAvisGateway`] performs the real HTTP requests.

mod client;
mod error_mapping;
pub mod models;

use async_trait::async_trait;

pub use client::{ReqwestAvisGateway, like_path, moderation_path};
pub use models::{LikeReply, ModerationReply, ModerationRequest, ModerationStatus};

use crate::csrf::CsrfToken;
use crate::error::InteractionError;
use crate::page::ReviewId;

/// Gateway for the state-changing review endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvisGateway: Send + Sync {
    /// Toggles the viewer's like on `review`.
    async fn toggle_like(
        &self,
        review: ReviewId,
        csrf: &CsrfToken,
    ) -> Result<LikeReply, InteractionError>;

    /// Sends a moderation decision for `review`.
    async fn moderate(
        &self,
        review: ReviewId,
        request: &ModerationRequest,
        csrf: &CsrfToken,
    ) -> Result<ModerationReply, InteractionError>;
}
