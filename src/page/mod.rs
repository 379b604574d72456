//! In-memory model of the server-rendered review page.
//!
//! The page holds everything the interaction layer reads or mutates: review
//! cards, their contextual menus, hidden form fields, free-text areas and the
//! report modal. The open menu is a single slot, so at most one menu can be
//! visible at any time. Controllers share the page through [`PageHandle`].

mod card;
pub mod markup;
mod text_area;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use card::{CardTransition, ReviewCard, ReviewId};
pub use text_area::{TextArea, TextAreaHeight, TextAreaId};

/// The modal used to report a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportModal {
    hidden: bool,
    review: Option<ReviewId>,
}

impl ReportModal {
    /// Whether the modal carries the `hidden` class.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Review recorded on the modal when it was last opened.
    #[must_use]
    pub const fn review(&self) -> Option<ReviewId> {
        self.review
    }

    pub(crate) const fn show_for(&mut self, review: ReviewId) {
        self.hidden = false;
        self.review = Some(review);
    }
}

/// Document state visible to the interaction layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    cards: BTreeMap<ReviewId, ReviewCard>,
    menus: BTreeSet<ReviewId>,
    open_menu: Option<ReviewId>,
    hidden_fields: BTreeMap<String, String>,
    text_areas: BTreeMap<TextAreaId, TextArea>,
    report_modal: Option<ReportModal>,
}

impl Page {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a review card.
    #[must_use]
    pub fn with_card(mut self, card: ReviewCard) -> Self {
        self.cards.insert(card.id(), card);
        self
    }

    /// Adds a review card together with its contextual menu.
    #[must_use]
    pub fn with_card_and_menu(self, card: ReviewCard) -> Self {
        let review = card.id();
        self.with_card(card).with_menu(review)
    }

    /// Adds a hidden contextual menu for `review`.
    #[must_use]
    pub fn with_menu(mut self, review: ReviewId) -> Self {
        self.menus.insert(review);
        self
    }

    /// Adds a hidden form field.
    #[must_use]
    pub fn with_hidden_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.hidden_fields.insert(name.into(), value.into());
        self
    }

    /// Adds a text area.
    #[must_use]
    pub fn with_text_area(mut self, area: TextArea) -> Self {
        self.insert_text_area(area);
        self
    }

    /// Adds the hidden report modal.
    #[must_use]
    pub const fn with_report_modal(mut self) -> Self {
        self.report_modal = Some(ReportModal {
            hidden: true,
            review: None,
        });
        self
    }

    /// Inserts a text area into an existing page.
    pub fn insert_text_area(&mut self, area: TextArea) {
        self.text_areas.insert(area.id().clone(), area);
    }

    /// Looks up a card.
    #[must_use]
    pub fn card(&self, review: ReviewId) -> Option<&ReviewCard> {
        self.cards.get(&review)
    }

    /// Iterates over the cards in identifier order.
    pub fn cards(&self) -> impl Iterator<Item = &ReviewCard> {
        self.cards.values()
    }

    /// Whether the card is present and not leaving the page.
    #[must_use]
    pub fn is_interactive(&self, review: ReviewId) -> bool {
        self.cards
            .get(&review)
            .is_some_and(|card| !card.is_exiting())
    }

    /// Whether `review` has a contextual menu.
    #[must_use]
    pub fn has_menu(&self, review: ReviewId) -> bool {
        self.menus.contains(&review)
    }

    /// Whether the menu of `review` is visible.
    #[must_use]
    pub fn is_menu_visible(&self, review: ReviewId) -> bool {
        self.open_menu == Some(review)
    }

    /// The currently visible menu, if any.
    #[must_use]
    pub const fn open_menu(&self) -> Option<ReviewId> {
        self.open_menu
    }

    /// Value of a hidden form field.
    #[must_use]
    pub fn hidden_field(&self, name: &str) -> Option<&str> {
        self.hidden_fields.get(name).map(String::as_str)
    }

    /// Looks up a text area.
    #[must_use]
    pub fn text_area(&self, id: &TextAreaId) -> Option<&TextArea> {
        self.text_areas.get(id)
    }

    /// Identifiers of every text area in the page.
    pub fn text_area_ids(&self) -> impl Iterator<Item = &TextAreaId> {
        self.text_areas.keys()
    }

    /// The report modal, when the page carries one.
    #[must_use]
    pub const fn report_modal(&self) -> Option<&ReportModal> {
        self.report_modal.as_ref()
    }

    pub(crate) fn card_mut(&mut self, review: ReviewId) -> Option<&mut ReviewCard> {
        self.cards.get_mut(&review)
    }

    pub(crate) fn set_open_menu(&mut self, review: Option<ReviewId>) {
        self.open_menu = review.filter(|candidate| self.menus.contains(candidate));
    }

    pub(crate) fn text_area_mut(&mut self, id: &TextAreaId) -> Option<&mut TextArea> {
        self.text_areas.get_mut(id)
    }

    pub(crate) const fn report_modal_mut(&mut self) -> Option<&mut ReportModal> {
        self.report_modal.as_mut()
    }

    /// Detaches a card and its menu.
    pub(crate) fn remove_card(&mut self, review: ReviewId) -> Option<ReviewCard> {
        self.menus.remove(&review);
        if self.open_menu == Some(review) {
            self.open_menu = None;
        }
        self.cards.remove(&review)
    }
}

/// Shared handle to the page.
///
/// Every controller and every delayed action mutates the same page through
/// a handle; the lock is never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct PageHandle(Arc<Mutex<Page>>);

impl PageHandle {
    /// Wraps a page.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self(Arc::new(Mutex::new(page)))
    }

    /// Runs `read` against the page.
    pub fn read<R>(&self, read: impl FnOnce(&Page) -> R) -> R {
        read(&self.lock())
    }

    /// Runs `update` against the page.
    pub fn update<R>(&self, update: impl FnOnce(&mut Page) -> R) -> R {
        update(&mut self.lock())
    }

    /// Returns a copy of the current page state.
    #[must_use]
    pub fn snapshot(&self) -> Page {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Page> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
