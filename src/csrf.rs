//! Anti-forgery token read from the page.

use crate::page::Page;
use crate::page::markup::CSRF_FIELD_NAME;

/// Token sent with every state-changing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wraps a token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Reads the token from the page's hidden `csrfmiddlewaretoken` field.
    ///
    /// A page without the field yields an empty token; requests still go out
    /// and the server decides.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        Self::new(page.hidden_field(CSRF_FIELD_NAME).unwrap_or_default())
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}
