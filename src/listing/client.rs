use crate::configuration::Settings;
use log::{debug, error, info};
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Fetches the listing page with a single GET.
pub struct ListingClient {
    http: reqwest::Client,
    url: Url,
    log_failures: bool,
}

impl ListingClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(ListingClient {
            http,
            url: settings.target_url.clone(),
            log_failures: settings.log_fetch_failures,
        })
    }

    /// Downloads and parses the page. Any transport error or non-2xx status gives `None`.
    pub async fn fetch_document(&self) -> Option<Html> {
        match self.fetch_body().await {
            Ok(body) => Some(Html::parse_document(&body)),
            Err(e) => {
                if self.log_failures {
                    error!("Unable to fetch {}: {}", self.url, e);
                } else {
                    debug!("Unable to fetch {}: {}", self.url, e);
                }
                None
            }
        }
    }

    async fn fetch_body(&self) -> reqwest::Result<String> {
        info!("Fetching {}", self.url);
        let res = self.http.get(self.url.clone()).send().await?.error_for_status()?;
        let body = res.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
