//! Text areas that grow with their content.

use std::collections::BTreeSet;

use crate::page::{PageHandle, TextAreaHeight, TextAreaId};

/// Resizes the text areas present when it was attached.
#[derive(Debug, Clone)]
pub struct TextAreaAutosizer {
    page: PageHandle,
    attached: BTreeSet<TextAreaId>,
}

impl TextAreaAutosizer {
    /// Attaches to every text area currently in the page.
    ///
    /// Areas inserted afterwards are not resized.
    #[must_use]
    pub fn attach(page: &PageHandle) -> Self {
        let attached: BTreeSet<_> = page.read(|current| current.text_area_ids().cloned().collect());
        tracing::debug!("autosizing {} text areas", attached.len());
        Self {
            page: page.clone(),
            attached,
        }
    }

    /// Whether `area` is resized on input.
    #[must_use]
    pub fn is_attached(&self, area: &TextAreaId) -> bool {
        self.attached.contains(area)
    }

    /// Stores typed `value` and fits the area's height to it.
    pub fn on_input(&self, area: &TextAreaId, value: &str) {
        let resize = self.is_attached(area);
        self.page.update(|page| {
            let Some(text_area) = page.text_area_mut(area) else {
                return;
            };
            text_area.set_value(value);
            if resize {
                text_area.set_height(TextAreaHeight::Auto);
                let fitted = text_area.scroll_height();
                text_area.set_height(TextAreaHeight::Pixels(fitted));
            }
        });
    }
}
