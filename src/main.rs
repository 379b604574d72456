//! Avis command-line driver running one review interaction against a server.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use avis_interactions::page::markup::{CSRF_FIELD_NAME, LIKE_COUNT_CLASS};
use avis_interactions::{
    Action, AvisConfig, AvisInteractions, InteractionError, InteractionSettings, LikeOutcome,
    ModerationOutcome, NoopTelemetrySink, Page, ReqwestAvisGateway, ReviewCard, ReviewId,
    StderrJsonlTelemetrySink, TelemetrySink, TerminalDialogs,
};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Runs the configured action and reports whether the server applied it.
async fn run() -> Result<bool, InteractionError> {
    let config = load_config()?;

    let base_url = config.require_base_url()?;
    let review = config.require_review_id()?;
    let action = config.require_action()?;

    let gateway = ReqwestAvisGateway::new(base_url, config.request_timeout())?;
    let dialogs = TerminalDialogs::new(config.assume_yes, config.reason.clone());
    let settings = InteractionSettings {
        notifications: config.notification_settings(),
    };
    let telemetry: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };
    let interactions = AvisInteractions::initialise_with_telemetry(
        single_card_page(&config, review),
        gateway,
        dialogs,
        settings,
        telemetry,
    );

    let applied = match action {
        Action::Like => matches!(
            interactions.likes().toggle_like(review).await,
            LikeOutcome::Applied { .. }
        ),
        Action::Approve => matches!(
            interactions.moderation().approve(review).await,
            ModerationOutcome::Applied(_)
        ),
        Action::Reject => matches!(
            interactions.moderation().reject(review).await,
            ModerationOutcome::Applied(_)
        ),
    };

    write_summary(&interactions, review, action)?;
    Ok(applied)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`InteractionError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<AvisConfig, InteractionError> {
    AvisConfig::load().map_err(|error| InteractionError::Configuration {
        message: error.to_string(),
    })
}

fn single_card_page(config: &AvisConfig, review: ReviewId) -> Page {
    let page = Page::new().with_card_and_menu(ReviewCard::new(review));
    match &config.csrf_token {
        Some(token) => page.with_hidden_field(CSRF_FIELD_NAME, token.as_str()),
        None => page,
    }
}

fn write_summary(
    interactions: &AvisInteractions<ReqwestAvisGateway, TerminalDialogs>,
    review: ReviewId,
    action: Action,
) -> Result<(), InteractionError> {
    let page = interactions.page().snapshot();
    let mut message = format!("Review {review} after {action}:");
    if page.card(review).is_none() {
        message.push_str(" removed");
    }
    for card in page.cards() {
        message.push_str(&format!("\n{}", describe_card(card)));
    }
    for banner in interactions.notifications().visible() {
        message.push_str(&format!("\n[{}] {}", banner.kind(), banner.message()));
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|error| InteractionError::Io {
        message: error.to_string(),
    })
}

fn describe_card(card: &ReviewCard) -> String {
    let transition = card.transition();
    let mut line = format!(
        "  card {} [{}] {}={} opacity={}",
        card.id(),
        card.like_control_class(),
        LIKE_COUNT_CLASS,
        card.like_count(),
        transition.opacity(),
    );
    if let Some(declaration) = transition.transition() {
        line.push_str(&format!(" transition=\"{declaration}\" (leaving the page)"));
    }
    line
}
