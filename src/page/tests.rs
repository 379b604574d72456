//! Unit tests for the page model.

use rstest::{fixture, rstest};

use super::markup::{LIKE_BUTTON_CLASS, card_selector, menu_element_id};
use super::{CardTransition, Page, PageHandle, ReviewCard, ReviewId};
use crate::error::InteractionError;

fn review(value: u64) -> ReviewId {
    ReviewId::new(value).expect("review id should be positive")
}

#[fixture]
fn page() -> Page {
    Page::new()
        .with_card_and_menu(ReviewCard::new(review(1)).with_likes(3, false))
        .with_card_and_menu(ReviewCard::new(review(2)))
}

#[rstest]
fn review_id_rejects_zero() {
    assert_eq!(
        ReviewId::new(0),
        Err(InteractionError::InvalidReviewId("0".to_owned()))
    );
}

#[rstest]
#[case::plain("12", Some(12))]
#[case::padded(" 7 ", Some(7))]
#[case::zero("0", None)]
#[case::text("abc", None)]
fn parses_review_ids(#[case] input: &str, #[case] expected: Option<u64>) {
    let parsed = input.parse::<ReviewId>().ok().map(ReviewId::get);
    assert_eq!(parsed, expected, "parsing {input:?}");
}

#[rstest]
fn markup_helpers_follow_template_contract() {
    assert_eq!(menu_element_id(review(42)), "avis-menu-42");
    assert_eq!(card_selector(review(42)), "[data-avis-id=\"42\"]");
}

#[rstest]
fn open_menu_ignores_reviews_without_menu(mut page: Page) {
    page.set_open_menu(Some(review(9)));

    assert_eq!(page.open_menu(), None);
}

#[rstest]
fn removing_card_closes_its_menu(mut page: Page) {
    page.set_open_menu(Some(review(1)));

    let removed = page.remove_card(review(1));

    assert_eq!(removed.map(|card| card.like_count()), Some(3));
    assert_eq!(page.open_menu(), None);
    assert!(!page.has_menu(review(1)));
    assert!(page.card(review(2)).is_some());
}

#[rstest]
fn exiting_card_is_not_interactive(mut page: Page) {
    if let Some(card) = page.card_mut(review(2)) {
        card.begin_exit();
    }

    assert!(page.is_interactive(review(1)));
    assert!(!page.is_interactive(review(2)));
    let transition = page.card(review(2)).map(ReviewCard::transition);
    assert_eq!(transition, Some(CardTransition::Exiting));
    assert_eq!(CardTransition::Exiting.transform(), "translateX(-100%)");
}

#[rstest]
#[case::resting(CardTransition::Resting, "1", "none", None)]
#[case::exiting(CardTransition::Exiting, "0", "translateX(-100%)", Some("all 0.3s ease"))]
fn transitions_map_to_card_styles(
    #[case] transition: CardTransition,
    #[case] opacity: &str,
    #[case] transform: &str,
    #[case] declaration: Option<&str>,
) {
    assert_eq!(transition.opacity(), opacity);
    assert_eq!(transition.transform(), transform);
    assert_eq!(transition.transition(), declaration);
}

#[rstest]
fn like_control_class_carries_the_accent(page: Page) {
    let classes: Vec<String> = page.cards().map(ReviewCard::like_control_class).collect();

    assert_eq!(
        classes,
        vec![
            format!("{LIKE_BUTTON_CLASS} text-gray-500"),
            format!("{LIKE_BUTTON_CLASS} text-gray-500"),
        ]
    );

    let liked = ReviewCard::new(review(3)).with_likes(1, true);
    assert_eq!(liked.like_control_class(), "like-button text-red-500");
}

#[rstest]
fn release_ignores_superseded_emphasis() {
    let mut card = ReviewCard::new(review(3));

    let first = card.emphasise_like();
    let second = card.emphasise_like();
    card.release_like_emphasis(first);
    assert!(card.is_like_emphasised());

    card.release_like_emphasis(second);
    assert!(!card.is_like_emphasised());
}

#[rstest]
fn handle_shares_mutations(page: Page) {
    let handle = PageHandle::new(page);
    let other = handle.clone();

    handle.update(|page| page.set_open_menu(Some(review(2))));

    assert!(other.read(|page| page.is_menu_visible(review(2))));
    assert_eq!(other.snapshot().open_menu(), Some(review(2)));
}
