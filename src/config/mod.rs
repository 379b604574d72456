//! Command-line driver configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.avis.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `AVIS_BASE_URL`, `AVIS_CSRF_TOKEN`, ...
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--review-id`/`-i`, ...
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "https://avis.example.org/"
//! csrf_token = "abc123"
//! review_id = 42
//! action = "reject"
//! reason = "Contenu hors sujet"
//! notification_dwell_ms = 3000
//! notification_limit = 5
//! request_timeout_seconds = 10
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::InteractionError;
use crate::notify::NotificationSettings;
use crate::page::ReviewId;

const DEFAULT_NOTIFICATION_DWELL_MS: u64 = 3000;
const DEFAULT_NOTIFICATION_LIMIT: usize = 5;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Interaction run by the command-line driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Toggle the viewer's like.
    Like,
    /// Approve the review.
    Approve,
    /// Reject the review.
    Reject,
}

impl Action {
    /// Name accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = InteractionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            _ => Err(InteractionError::UnknownAction(value.to_owned())),
        }
    }
}

/// Driver configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use avis_interactions::AvisConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = AvisConfig::load().expect("failed to load configuration");
/// let base_url = config.require_base_url().expect("base URL required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "AVIS",
    discovery(
        dotfile_name = ".avis.toml",
        config_file_name = "avis.toml",
        app_name = "avis"
    )
)]
pub struct AvisConfig {
    /// Base URL the review endpoints are resolved against.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `AVIS_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: Option<String>,

    /// Anti-forgery token placed in the page's hidden field.
    ///
    /// Can be provided via:
    /// - CLI: `--csrf-token <TOKEN>` or `-c <TOKEN>`
    /// - Environment: `AVIS_CSRF_TOKEN`
    /// - Config file: `csrf_token = "..."`
    #[ortho_config(cli_short = 'c')]
    pub csrf_token: Option<String>,

    /// Review the action applies to.
    ///
    /// Can be provided via:
    /// - CLI: `--review-id <ID>` or `-i <ID>`
    /// - Environment: `AVIS_REVIEW_ID`
    /// - Config file: `review_id = 42`
    #[ortho_config(cli_short = 'i')]
    pub review_id: Option<u64>,

    /// Action to run: `like`, `approve` or `reject`.
    ///
    /// Can be provided via:
    /// - CLI: `--action <ACTION>` or `-a <ACTION>`
    /// - Environment: `AVIS_ACTION`
    /// - Config file: `action = "..."`
    #[ortho_config(cli_short = 'a')]
    pub action: Option<String>,

    /// Rejection reason; when absent the reason is asked on the terminal.
    #[ortho_config(cli_short = 'r')]
    pub reason: Option<String>,

    /// Confirms the approval question without asking.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so use the CLI flag `--assume-yes`/`-y` or the
    /// configuration file.
    #[ortho_config(cli_short = 'y')]
    pub assume_yes: bool,

    /// Time a notification stays on screen, in milliseconds.
    #[ortho_config()]
    pub notification_dwell_ms: u64,

    /// Maximum number of notifications on screen at once.
    #[ortho_config()]
    pub notification_limit: usize,

    /// Timeout applied to every request, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Writes interaction telemetry as JSON lines on stderr.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for AvisConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            csrf_token: None,
            review_id: None,
            action: None,
            reason: None,
            assume_yes: false,
            notification_dwell_ms: DEFAULT_NOTIFICATION_DWELL_MS,
            notification_limit: DEFAULT_NOTIFICATION_LIMIT,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            telemetry: false,
        }
    }
}

impl AvisConfig {
    /// Returns the base URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::MissingBaseUrl`] when no URL is configured.
    pub fn require_base_url(&self) -> Result<&str, InteractionError> {
        self.base_url
            .as_deref()
            .ok_or(InteractionError::MissingBaseUrl)
    }

    /// Returns the review identifier or an error if missing or zero.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::MissingReviewId`] when no identifier is
    /// configured and [`InteractionError::InvalidReviewId`] when it is zero.
    pub fn require_review_id(&self) -> Result<ReviewId, InteractionError> {
        let value = self.review_id.ok_or(InteractionError::MissingReviewId)?;
        ReviewId::new(value)
    }

    /// Returns the parsed action.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::MissingAction`] when no action is
    /// configured and [`InteractionError::UnknownAction`] when the name is
    /// not recognised.
    pub fn require_action(&self) -> Result<Action, InteractionError> {
        self.action
            .as_deref()
            .ok_or(InteractionError::MissingAction)?
            .parse()
    }

    /// Notification settings with the configured dwell time and limit.
    ///
    /// A dwell shorter than the slide-in delay is raised to that delay.
    #[must_use]
    pub fn notification_settings(&self) -> NotificationSettings {
        let defaults = NotificationSettings::default();
        NotificationSettings {
            dwell: Duration::from_millis(self.notification_dwell_ms).max(defaults.enter_delay),
            max_visible: self.notification_limit.max(1),
            ..defaults
        }
    }

    /// Timeout applied to every request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests;
