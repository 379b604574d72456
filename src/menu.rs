//! Per-review contextual menus.
//!
//! The controller is the single owner of the document-wide click handling:
//! opening one review's menu closes any other, and a click that does not
//! come from a menu trigger closes them all.

use crate::page::markup::menu_element_id;
use crate::page::{Page, PageHandle, ReviewId};

/// Where a document click originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentClick {
    /// Inside the menu trigger of a review.
    MenuTrigger(ReviewId),
    /// Anywhere else.
    Elsewhere,
}

/// Opens and closes review menus.
#[derive(Debug, Clone)]
pub struct MenuController {
    page: PageHandle,
}

impl MenuController {
    /// Creates a controller over `page`.
    #[must_use]
    pub const fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Toggles the menu of `review`, hiding every other menu.
    ///
    /// Returns whether the menu is visible afterwards; a review without a
    /// menu is left alone and reported as hidden.
    pub fn toggle_menu(&self, review: ReviewId) -> bool {
        self.page.update(|page| {
            if !page.has_menu(review) {
                tracing::debug!("no menu element {}", menu_element_id(review));
                return false;
            }
            let opening = !page.is_menu_visible(review);
            page.set_open_menu(opening.then_some(review));
            opening
        })
    }

    /// Applies the outside-click rule to a document click.
    pub fn handle_document_click(&self, click: DocumentClick) {
        if let DocumentClick::Elsewhere = click {
            self.close_all();
        }
    }

    /// Hides every menu.
    pub fn close_all(&self) {
        self.page.update(|page| page.set_open_menu(None));
    }

    /// The visible menu, if any.
    #[must_use]
    pub fn open_menu(&self) -> Option<ReviewId> {
        self.page.read(Page::open_menu)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{DocumentClick, MenuController};
    use crate::page::{Page, PageHandle, ReviewCard, ReviewId};

    fn review(value: u64) -> ReviewId {
        ReviewId::new(value).expect("review id should be positive")
    }

    #[fixture]
    fn menus() -> MenuController {
        let page = (1..=3).fold(Page::new(), |page, id| {
            page.with_card_and_menu(ReviewCard::new(review(id)))
        });
        MenuController::new(PageHandle::new(page))
    }

    fn visible_count(controller: &MenuController) -> usize {
        controller.page.read(|page| {
            (1..=3)
                .filter(|id| page.is_menu_visible(review(*id)))
                .count()
        })
    }

    #[rstest]
    fn opening_a_menu_closes_the_others(menus: MenuController) {
        assert!(menus.toggle_menu(review(1)));
        assert!(menus.toggle_menu(review(2)));

        assert_eq!(menus.open_menu(), Some(review(2)));
        assert_eq!(visible_count(&menus), 1);
    }

    #[rstest]
    fn toggling_twice_restores_visibility(menus: MenuController) {
        assert!(menus.toggle_menu(review(3)));
        assert!(!menus.toggle_menu(review(3)));

        assert_eq!(menus.open_menu(), None);
    }

    #[rstest]
    fn unknown_review_is_a_no_op(menus: MenuController) {
        menus.toggle_menu(review(1));

        assert!(!menus.toggle_menu(review(99)));
        assert_eq!(menus.open_menu(), Some(review(1)));
    }

    #[rstest]
    #[case::outside(DocumentClick::Elsewhere, None)]
    #[case::trigger(DocumentClick::MenuTrigger(review(2)), Some(review(2)))]
    fn outside_click_closes_menus(
        menus: MenuController,
        #[case] click: DocumentClick,
        #[case] expected: Option<ReviewId>,
    ) {
        menus.toggle_menu(review(2));

        menus.handle_document_click(click);

        assert_eq!(menus.open_menu(), expected);
    }

    #[rstest]
    fn toggle_sequences_keep_at_most_one_menu_open(menus: MenuController) {
        let sequence = [1, 2, 2, 3, 1, 1, 3, 2, 99, 3];
        for id in sequence {
            menus.toggle_menu(review(id));
            assert!(visible_count(&menus) <= 1, "more than one menu after {id}");
        }
    }
}
