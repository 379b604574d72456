//! Page-level initialisation of every review interaction.
//!
//! [`AvisInteractions`] is built once per page: it reads the anti-forgery
//! token, attaches the text-area autosizer and hands out the controllers,
//! all of which share one page and one notification stack.

use std::sync::Arc;

use crate::autosize::TextAreaAutosizer;
use crate::csrf::CsrfToken;
use crate::dialogs::Dialogs;
use crate::full_text::FullTextToggle;
use crate::gateway::AvisGateway;
use crate::like::LikeSynchronizer;
use crate::menu::{DocumentClick, MenuController};
use crate::moderation::ModerationDispatcher;
use crate::notify::{NotificationCenter, NotificationId, NotificationKind, NotificationSettings};
use crate::page::{Page, PageHandle};
use crate::report::ReportDialog;
use crate::surface::Surface;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Settings applied when initialising a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionSettings {
    /// Timings and limits of the notification stack.
    pub notifications: NotificationSettings,
}

/// Every interaction controller for one page.
#[derive(Debug)]
pub struct AvisInteractions<G, D> {
    surface: Surface,
    menus: MenuController,
    likes: LikeSynchronizer<G>,
    moderation: ModerationDispatcher<G, D>,
    full_text: FullTextToggle,
    autosizer: TextAreaAutosizer,
    report: ReportDialog,
}

impl<G: AvisGateway, D: Dialogs> AvisInteractions<G, D> {
    /// Wires the controllers to `page`, discarding telemetry.
    #[must_use]
    pub fn initialise(page: Page, gateway: G, dialogs: D, settings: InteractionSettings) -> Self {
        Self::initialise_with_telemetry(
            page,
            gateway,
            dialogs,
            settings,
            Arc::new(NoopTelemetrySink),
        )
    }

    /// Wires the controllers to `page`, routing interaction events to
    /// `telemetry`.
    #[must_use]
    pub fn initialise_with_telemetry(
        page: Page,
        gateway: G,
        dialogs: D,
        settings: InteractionSettings,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        let surface = Surface::new(
            PageHandle::new(page),
            NotificationCenter::new(settings.notifications),
        )
        .with_telemetry(telemetry);
        Self::wire(surface, Arc::new(gateway), Arc::new(dialogs))
    }

    fn wire(surface: Surface, gateway: Arc<G>, dialogs: Arc<D>) -> Self {
        let page = surface.page().clone();
        let csrf = page.read(CsrfToken::from_page);
        if csrf.value().is_empty() {
            tracing::warn!("page carries no anti-forgery token; requests will be refused");
        }
        Self {
            menus: MenuController::new(page.clone()),
            likes: LikeSynchronizer::new(Arc::clone(&gateway), surface.clone(), csrf.clone()),
            moderation: ModerationDispatcher::new(gateway, dialogs, surface.clone(), csrf),
            full_text: FullTextToggle::new(page.clone()),
            autosizer: TextAreaAutosizer::attach(&page),
            report: ReportDialog::new(page),
            surface,
        }
    }

    /// Shared page.
    #[must_use]
    pub const fn page(&self) -> &PageHandle {
        self.surface.page()
    }

    /// Notification stack.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        self.surface.notifications()
    }

    /// Shows a notification.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.surface.notifications().notify(message, kind)
    }

    /// Document-wide click handler.
    pub fn on_document_click(&self, click: DocumentClick) {
        self.menus.handle_document_click(click);
    }

    /// Menu controller.
    #[must_use]
    pub const fn menus(&self) -> &MenuController {
        &self.menus
    }

    /// Like synchroniser.
    #[must_use]
    pub const fn likes(&self) -> &LikeSynchronizer<G> {
        &self.likes
    }

    /// Moderation dispatcher.
    #[must_use]
    pub const fn moderation(&self) -> &ModerationDispatcher<G, D> {
        &self.moderation
    }

    /// Full-text toggle.
    #[must_use]
    pub const fn full_text(&self) -> &FullTextToggle {
        &self.full_text
    }

    /// Text-area autosizer.
    #[must_use]
    pub const fn autosizer(&self) -> &TextAreaAutosizer {
        &self.autosizer
    }

    /// Report modal opener.
    #[must_use]
    pub const fn report(&self) -> &ReportDialog {
        &self.report
    }
}
