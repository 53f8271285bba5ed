use std::time::Duration;

/// Connection settings for the badge service, supplied by the host
/// application.
///
/// `badge_service_url` must end with a trailing slash; it is prepended
/// verbatim to the endpoint paths. None of the fields are validated or
/// url-encoded before being interpolated into request URLs.
#[derive(Debug, Clone)]
pub struct BadgeServiceConfig {
    /// Base URL of the badge service, trailing slash included.
    pub badge_service_url: String,
    /// Learner email the earned-badge query filters on.
    pub email: String,
    /// Course the issuer queries filter on.
    pub course_id: String,
    /// Per-request timeout. `None` (the default) lets a slow service
    /// hold the pipeline open indefinitely.
    pub request_timeout: Option<Duration>,
}

impl BadgeServiceConfig {
    pub fn new(
        badge_service_url: impl Into<String>,
        email: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self {
            badge_service_url: badge_service_url.into(),
            email: email.into(),
            course_id: course_id.into(),
            request_timeout: None,
        }
    }

    /// Set a per-request timeout, turning a hanging badge service into
    /// a request error instead of an indefinite wait.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
