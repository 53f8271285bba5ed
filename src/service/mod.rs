pub(crate) mod badge_classes;
pub(crate) mod badges;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BadgeError, Result};

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching badge data");

    let response = client.get(url).send().await.map_err(|e| BadgeError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(BadgeError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| BadgeError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}
