//! Identifier, attribute and class contract shared with the server templates.
//!
//! The review templates must emit these names verbatim; the interaction layer
//! locates cards, menus and hidden fields through them.

use super::ReviewId;

/// Attribute carried by every review card, holding the review identifier.
pub const REVIEW_ID_ATTRIBUTE: &str = "data-avis-id";

/// Prefix of the element identifier of a review's contextual menu.
pub const MENU_ID_PREFIX: &str = "avis-menu-";

/// Name of the hidden form field carrying the anti-forgery token.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Request header the server reads the anti-forgery token from.
pub const CSRF_HEADER_NAME: &str = "x-csrftoken";

/// Class of the like control inside a card.
pub const LIKE_BUTTON_CLASS: &str = "like-button";

/// Class of the like counter inside the like control.
pub const LIKE_COUNT_CLASS: &str = "like-count";

/// Accent applied to the like control when the viewer likes the review.
pub const LIKED_CLASS: &str = "text-red-500";

/// Accent applied to the like control when the viewer does not like the review.
pub const NOT_LIKED_CLASS: &str = "text-gray-500";

/// Class toggled to hide menus and the report modal.
pub const HIDDEN_CLASS: &str = "hidden";

/// Identifier of the report modal.
pub const REPORT_MODAL_ID: &str = "signalementModal";

/// Label of the full-text control while the body is truncated.
pub const READ_MORE_LABEL: &str = "Lire plus";

/// Label of the full-text control while the full body is shown.
pub const READ_LESS_LABEL: &str = "Lire moins";

/// Builds the element identifier of a review's menu (`avis-menu-{id}`).
#[must_use]
pub fn menu_element_id(review: ReviewId) -> String {
    format!("{MENU_ID_PREFIX}{review}")
}

/// Builds the attribute selector matching a review's card.
#[must_use]
pub fn card_selector(review: ReviewId) -> String {
    format!("[{REVIEW_ID_ATTRIBUTE}=\"{review}\"]")
}
