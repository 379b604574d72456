//! Shared helpers for the behavioural tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use avis_interactions::dialogs::test_support::ScriptedDialogs;
use avis_interactions::page::markup::CSRF_FIELD_NAME;
use avis_interactions::{
    AvisInteractions, InteractionSettings, Page, ReqwestAvisGateway, ReviewCard, ReviewId,
};
use rstest_bdd::Slot;
use serde_json::Value;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Token placed in the page's hidden field.
pub const PAGE_TOKEN: &str = "bdd-csrf-token";

/// Interactions wired to the mock server.
pub type LiveInteractions = AvisInteractions<ReqwestAvisGateway, ScriptedDialogs>;

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    /// Drives `future` to completion on the shared runtime.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }

    /// Lets delayed page updates scheduled on the runtime run.
    pub fn wait(&self, duration: Duration) {
        self.block_on(async { tokio::time::sleep(duration).await });
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created or if the slots
/// behave unexpectedly.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Builds a page holding one review card, its menu and the CSRF field.
///
/// # Errors
///
/// Returns an error when `review` is zero.
pub fn page_with_review(review: u64, like_count: u64) -> Result<Page, io::Error> {
    let id = ReviewId::new(review).map_err(io::Error::other)?;
    Ok(Page::new()
        .with_card_and_menu(ReviewCard::new(id).with_likes(like_count, false))
        .with_hidden_field(CSRF_FIELD_NAME, PAGE_TOKEN))
}

/// Wires interactions for `page` against the mock server.
///
/// # Errors
///
/// Returns an error when the server URL cannot be used as a base URL.
pub fn connect(
    server: &Slot<MockServer>,
    page: Page,
    dialogs: ScriptedDialogs,
) -> Result<LiveInteractions, io::Error> {
    let base_url = server
        .with_ref(MockServer::uri)
        .ok_or_else(|| io::Error::other("mock server not initialised"))?;
    let gateway = ReqwestAvisGateway::new(&base_url, Duration::from_secs(5))
        .map_err(io::Error::other)?;
    Ok(AvisInteractions::initialise(
        page,
        gateway,
        dialogs,
        InteractionSettings::default(),
    ))
}

/// JSON bodies of every request the mock server received.
///
/// # Errors
///
/// Returns an error when the server is missing or a body is not JSON.
pub fn received_bodies(
    runtime: &SharedRuntime,
    server: &Slot<MockServer>,
) -> Result<Vec<Value>, io::Error> {
    let requests = server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .ok_or_else(|| io::Error::other("mock server not initialised"))?
        .unwrap_or_default();
    requests
        .iter()
        .map(|request| request.body_json::<Value>().map_err(io::Error::other))
        .collect()
}

/// Strips the quotes captured around a step argument.
#[must_use]
pub fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}
