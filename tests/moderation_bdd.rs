//! Behavioural tests for quick moderation against a mock review server.

mod support;

use std::io;
use std::time::Duration;

use avis_interactions::dialogs::test_support::ScriptedDialogs;
use avis_interactions::{NotificationKind, Page, ReviewId};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{
    LiveInteractions, PAGE_TOKEN, SharedRuntime, connect, ensure_runtime_and_server,
    page_with_review, received_bodies, unquote,
};

#[derive(ScenarioState, Default)]
struct ModerationState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    page: Slot<Page>,
    confirms: Slot<bool>,
    reason: Slot<String>,
    interactions: Slot<LiveInteractions>,
}

#[fixture]
fn moderation_state() -> ModerationState {
    ModerationState::default()
}

fn runtime(moderation_state: &ModerationState) -> Result<SharedRuntime, io::Error> {
    moderation_state
        .runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised"))
}

fn mount(moderation_state: &ModerationState, mock: Mock) -> Result<(), io::Error> {
    let runtime = ensure_runtime_and_server(&moderation_state.runtime, &moderation_state.server)?;
    moderation_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or_else(|| io::Error::other("mock server not initialised"))
}

fn moderation_mock(review: u64, response: ResponseTemplate) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!("/avis/avis/{review}/moderer/")))
        .and(header("x-csrftoken", PAGE_TOKEN))
        .respond_with(response)
}

fn dialogs(moderation_state: &ModerationState) -> ScriptedDialogs {
    let mut dialogs = ScriptedDialogs::default();
    if let Some(confirms) = moderation_state.confirms.get() {
        dialogs = dialogs.confirming(confirms);
    }
    if let Some(reason) = moderation_state.reason.get() {
        dialogs = dialogs.answering(Some(reason.as_str()));
    }
    dialogs
}

fn review_id(review: u64) -> Result<ReviewId, io::Error> {
    ReviewId::new(review).map_err(io::Error::other)
}

fn notifications_of(
    moderation_state: &ModerationState,
    kind: NotificationKind,
) -> Result<Vec<String>, io::Error> {
    moderation_state
        .interactions
        .with_ref(|interactions| {
            interactions
                .notifications()
                .visible()
                .iter()
                .filter(|banner| banner.kind() == kind)
                .map(|banner| banner.message().to_owned())
                .collect()
        })
        .ok_or_else(|| io::Error::other("interactions not initialised"))
}

fn has_card(moderation_state: &ModerationState, review: u64) -> Result<bool, io::Error> {
    let id = review_id(review)?;
    moderation_state
        .interactions
        .with_ref(|interactions| interactions.page().read(|page| page.card(id).is_some()))
        .ok_or_else(|| io::Error::other("interactions not initialised"))
}

fn expect_notification(
    moderation_state: &ModerationState,
    kind: NotificationKind,
    message: &str,
) -> Result<(), io::Error> {
    let expected = unquote(message);
    let shown = notifications_of(moderation_state, kind)?;
    if shown.iter().any(|text| text == expected) {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected {kind} notification {expected:?}, found {shown:?}"
        )))
    }
}

#[given("a moderation page with review {review:u64}")]
fn seed_page(moderation_state: &ModerationState, review: u64) -> Result<(), io::Error> {
    ensure_runtime_and_server(&moderation_state.runtime, &moderation_state.server)?;
    moderation_state.page.set(page_with_review(review, 0)?);
    Ok(())
}

#[given("the moderator confirms the approval")]
fn confirm_approval(moderation_state: &ModerationState) {
    moderation_state.confirms.set(true);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("the moderator gives the reason {reason}")]
fn give_reason(moderation_state: &ModerationState, reason: String) {
    moderation_state.reason.set(unquote(&reason).to_owned());
}

#[given("the server accepts moderation of review {review:u64}")]
fn seed_acceptance(moderation_state: &ModerationState, review: u64) -> Result<(), io::Error> {
    mount(
        moderation_state,
        moderation_mock(
            review,
            ResponseTemplate::new(200).set_body_json(json!({ "success": true })),
        ),
    )
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("the server refuses moderation of review {review:u64} with message {message}")]
fn seed_refusal(
    moderation_state: &ModerationState,
    review: u64,
    message: String,
) -> Result<(), io::Error> {
    let body = json!({ "success": false, "message": unquote(&message) });
    mount(
        moderation_state,
        moderation_mock(review, ResponseTemplate::new(200).set_body_json(body)),
    )
}

fn run_decision(
    moderation_state: &ModerationState,
    review: u64,
    approve: bool,
) -> Result<(), io::Error> {
    let runtime = runtime(moderation_state)?;
    let page = moderation_state
        .page
        .take()
        .ok_or_else(|| io::Error::other("page not seeded"))?;
    let id = review_id(review)?;

    let interactions = runtime.block_on(async {
        let interactions = connect(&moderation_state.server, page, dialogs(moderation_state))?;
        if approve {
            interactions.moderation().approve(id).await;
        } else {
            interactions.moderation().reject(id).await;
        }
        Ok::<_, io::Error>(interactions)
    })?;
    moderation_state.interactions.set(interactions);
    Ok(())
}

#[when("the moderator approves review {review:u64}")]
fn approve_review(moderation_state: &ModerationState, review: u64) -> Result<(), io::Error> {
    run_decision(moderation_state, review, true)
}

#[when("the moderator rejects review {review:u64}")]
fn reject_review(moderation_state: &ModerationState, review: u64) -> Result<(), io::Error> {
    run_decision(moderation_state, review, false)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("a success notification reads {message}")]
fn assert_success(moderation_state: &ModerationState, message: String) -> Result<(), io::Error> {
    expect_notification(moderation_state, NotificationKind::Success, &message)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("an error notification reads {message}")]
fn assert_error(moderation_state: &ModerationState, message: String) -> Result<(), io::Error> {
    expect_notification(moderation_state, NotificationKind::Error, &message)
}

#[then("review {review:u64} is removed after the exit transition")]
fn assert_removed(moderation_state: &ModerationState, review: u64) -> Result<(), io::Error> {
    runtime(moderation_state)?.wait(Duration::from_millis(450));
    if has_card(moderation_state, review)? {
        Err(io::Error::other(format!("review {review} is still attached")))
    } else {
        Ok(())
    }
}

#[then("review {review:u64} is still on the page")]
fn assert_present(moderation_state: &ModerationState, review: u64) -> Result<(), io::Error> {
    runtime(moderation_state)?.wait(Duration::from_millis(450));
    if has_card(moderation_state, review)? {
        Ok(())
    } else {
        Err(io::Error::other(format!("review {review} was removed")))
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the server received a rejection with reason {reason}")]
fn assert_rejection_body(
    moderation_state: &ModerationState,
    reason: String,
) -> Result<(), io::Error> {
    let bodies = received_bodies(&runtime(moderation_state)?, &moderation_state.server)?;
    let expected = json!({
        "statut_moderation": "rejete",
        "raison_rejet": unquote(&reason),
    });
    if bodies == vec![expected.clone()] {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "expected a single body {expected}, found {bodies:?}"
        )))
    }
}

#[then("no moderation request was sent")]
fn assert_nothing_sent(moderation_state: &ModerationState) -> Result<(), io::Error> {
    let bodies = received_bodies(&runtime(moderation_state)?, &moderation_state.server)?;
    if bodies.is_empty() {
        Ok(())
    } else {
        Err(io::Error::other(format!("unexpected requests: {bodies:?}")))
    }
}

#[scenario(path = "tests/features/moderation.feature", index = 0)]
fn approval_removes_review(moderation_state: ModerationState) {
    let _ = moderation_state;
}

#[scenario(path = "tests/features/moderation.feature", index = 1)]
fn rejection_sends_reason(moderation_state: ModerationState) {
    let _ = moderation_state;
}

#[scenario(path = "tests/features/moderation.feature", index = 2)]
fn blank_reason_sends_nothing(moderation_state: ModerationState) {
    let _ = moderation_state;
}

#[scenario(path = "tests/features/moderation.feature", index = 3)]
fn refused_decision_keeps_review(moderation_state: ModerationState) {
    let _ = moderation_state;
}
