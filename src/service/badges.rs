use tracing::{debug, instrument};

use crate::config::BadgeServiceConfig;
use crate::error::Result;
use crate::model::{EarnedBadge, ResultsPage};
use crate::service;

#[instrument(skip(client, config), fields(course_id = %config.course_id))]
pub(crate) async fn get_earned_badges(
    client: &reqwest::Client,
    config: &BadgeServiceConfig,
) -> Result<Vec<EarnedBadge>> {
    let url = format!(
        "{}v1/badges/?format=json&email={}&badgeclass__issuer__course={}",
        config.badge_service_url, config.email, config.course_id
    );
    let page: ResultsPage<EarnedBadge> = service::get_json(client, &url).await?;

    debug!(count = page.results.len(), "fetched earned badges");

    Ok(page.results)
}
