use tracing::{debug, instrument};

use crate::collection::BadgeCollection;
use crate::config::BadgeServiceConfig;
use crate::display::{self, BadgePanel};
use crate::error::{BadgeError, Result};
use crate::model::{BadgeClass, EarnedBadge};
use crate::service;

/// The main entry point for talking to the badge service.
///
/// `BadgeClient` wraps a [`reqwest::Client`] and exposes methods to
/// fetch the learner's earned badges and a course's badge classes, and
/// to render the joined result into a [`BadgePanel`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> badgelets::Result<()> {
/// use badgelets::{BadgeClient, BadgePanel, BadgeServiceConfig};
///
/// let config = BadgeServiceConfig::new(
///     "https://badges.example.com/",
///     "learner@example.com",
///     "course-v1:edX+DemoX+2026",
/// );
/// let client = BadgeClient::new(config)?;
///
/// let template = "{{#each badgeclasses}}<img src=\"{{image}}\"/>{{/each}}";
/// let mut panel = BadgePanel::hidden();
/// client.render_into(template, &mut panel).await?;
/// # Ok(())
/// # }
/// ```
pub struct BadgeClient {
    http: reqwest::Client,
    config: BadgeServiceConfig,
}

impl BadgeClient {
    /// Create a new client, applying the configured request timeout
    /// when one is set.
    pub fn new(config: BadgeServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(BadgeError::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, TLS, etc.
    /// beyond the timeout the config covers.
    pub fn with_client(config: BadgeServiceConfig, client: reqwest::Client) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// Fetch the first page of badges the learner has earned for the
    /// configured course.
    #[instrument(skip(self), fields(course_id = %self.config.course_id))]
    pub async fn get_earned_badges(&self) -> Result<Vec<EarnedBadge>> {
        service::badges::get_earned_badges(&self.http, &self.config).await
    }

    /// Fetch the first page of badge classes issuable for the
    /// configured course.
    #[instrument(skip(self), fields(course_id = %self.config.course_id))]
    pub async fn get_badge_classes(&self) -> Result<Vec<BadgeClass>> {
        service::badge_classes::get_badge_classes(&self.http, &self.config).await
    }

    /// Fetch both lists concurrently and join them.
    ///
    /// The two requests are issued together and the call resolves once
    /// both have; their resolution order does not affect the result.
    /// If either fails, the error is returned and no collection is
    /// built.
    #[instrument(skip(self), fields(course_id = %self.config.course_id))]
    pub async fn get_collection(&self) -> Result<BadgeCollection> {
        let (earned, badge_classes) = tokio::try_join!(
            service::badges::get_earned_badges(&self.http, &self.config),
            service::badge_classes::get_badge_classes(&self.http, &self.config),
        )?;
        Ok(BadgeCollection::new(badge_classes, earned))
    }

    /// Fetch, join, and render into `panel`.
    ///
    /// On a fetch or render error the panel is left untouched, so a
    /// hidden panel stays hidden. A course with no badge classes is not
    /// an error; the panel is likewise left alone. Only a successful
    /// render of a non-empty badge list replaces the panel's markup and
    /// reveals it.
    #[instrument(skip(self, template, panel), fields(course_id = %self.config.course_id))]
    pub async fn render_into(&self, template: &str, panel: &mut BadgePanel) -> Result<()> {
        let collection = self.get_collection().await?;
        if collection.is_empty() {
            debug!("course has no badge classes; leaving panel hidden");
            return Ok(());
        }

        let markup = display::render_badge_markup(template, &collection)?;
        panel.apply(markup);
        Ok(())
    }
}
