//! Client-side interaction layer for the avis review pages.
//!
//! The library models the server-rendered review page and drives every
//! interaction on it: liking reviews, quick moderation with confirmation and
//! exit transition, per-review menus, transient notifications, the read-more
//! toggle, growing text areas and the report modal. Server calls go through
//! the [`AvisGateway`] trait, implemented over reqwest by
//! [`ReqwestAvisGateway`].

pub mod autosize;
pub mod config;
pub mod csrf;
pub mod dialogs;
pub mod error;
pub mod full_text;
pub mod gateway;
mod in_flight;
pub mod interactions;
pub mod like;
pub mod menu;
pub mod moderation;
pub mod notify;
pub mod page;
pub mod report;
mod schedule;
pub mod surface;
pub mod telemetry;

pub use autosize::TextAreaAutosizer;
pub use config::{Action, AvisConfig};
pub use csrf::CsrfToken;
pub use dialogs::{Dialogs, TerminalDialogs};
pub use error::InteractionError;
pub use full_text::{FullTextToggle, TextDisplay};
pub use gateway::{
    AvisGateway, LikeReply, ModerationReply, ModerationRequest, ModerationStatus,
    ReqwestAvisGateway,
};
pub use in_flight::SkipReason;
pub use interactions::{AvisInteractions, InteractionSettings};
pub use like::{LikeOutcome, LikeSynchronizer};
pub use menu::{DocumentClick, MenuController};
pub use moderation::{ModerationDispatcher, ModerationOutcome};
pub use notify::{Notification, NotificationCenter, NotificationKind, NotificationSettings};
pub use page::{Page, PageHandle, ReviewCard, ReviewId, TextArea, TextAreaId};
pub use report::ReportDialog;
pub use surface::Surface;
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
