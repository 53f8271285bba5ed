use tracing::{debug, instrument};

use crate::config::BadgeServiceConfig;
use crate::error::Result;
use crate::model::{BadgeClass, ResultsPage};
use crate::service;

#[instrument(skip(client, config), fields(course_id = %config.course_id))]
pub(crate) async fn get_badge_classes(
    client: &reqwest::Client,
    config: &BadgeServiceConfig,
) -> Result<Vec<BadgeClass>> {
    let url = format!(
        "{}v1/badgeclasses/?format=json&issuer__course={}",
        config.badge_service_url, config.course_id
    );
    let page: ResultsPage<BadgeClass> = service::get_json(client, &url).await?;

    debug!(count = page.results.len(), "fetched badge classes");

    Ok(page.results)
}
