//! HTTP client for the forecast feed.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::error::FeedError;
use crate::types::FeedBulletin;

const ENDPOINT_BASE: &str =
    "https://data.weather.gov.hk/weatherAPI/opendata/weather.php?dataType=fnd";

/// The HKO open-data 9-day forecast endpoint, English bulletin.
pub const DEFAULT_ENDPOINT: &str =
    "https://data.weather.gov.hk/weatherAPI/opendata/weather.php?dataType=fnd&lang=en";

/// Endpoint for one of the feed's bulletin languages (`en`, `tc`, `sc`).
pub fn endpoint_for_lang(lang: &str) -> String {
    format!("{ENDPOINT_BASE}&lang={lang}")
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    endpoint: String,
}

impl FeedClient {
    /// Build a client against the default endpoint.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Build a client against a specific endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the bulletin once. No retries: the caller shows an error
    /// banner on failure and that is the end of it.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_bulletin(&self) -> Result<FeedBulletin, FeedError> {
        tracing::info!(endpoint = %self.endpoint, "fetching forecast bulletin");

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "feed responded with non-success status");
            return Err(FeedError::Status(status));
        }

        let bulletin: FeedBulletin = response
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        tracing::info!(
            days = bulletin.weather_forecast.len(),
            has_general_situation = bulletin.general_situation.is_some(),
            "bulletin fetched"
        );
        Ok(bulletin)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> FeedClient {
        FeedClient::with_endpoint(format!("{}/weather.php", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn fetches_a_bulletin() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "generalSituation": "Mainly fine with isolated showers.",
                "weatherForecast": [
                    {"forecastDate": "20241215", "week": "Sunday"},
                    {"forecastDate": "20241216", "week": "Monday"}
                ]
            })))
            .mount(&server)
            .await;

        let bulletin = client_for(&server).await.fetch_bulletin().await.unwrap();

        assert_eq!(
            bulletin.general_situation.as_deref(),
            Some("Mainly fine with isolated showers.")
        );
        assert_eq!(bulletin.weather_forecast.len(), 2);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather.php"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server).await.fetch_bulletin().await;
        assert!(matches!(
            result,
            Err(FeedError::Status(status)) if status.as_u16() == 500
        ));
    }

    #[tokio::test]
    async fn unreadable_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).await.fetch_bulletin().await;
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Nothing is listening here.
        let client = FeedClient::with_endpoint("http://127.0.0.1:9/weather.php").unwrap();
        let result = client.fetch_bulletin().await;
        assert!(matches!(result, Err(FeedError::Network(_))));
    }

    #[tokio::test]
    async fn tolerates_a_sparse_bulletin() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "generalSituation": "Quiet."
            })))
            .mount(&server)
            .await;

        let bulletin = client_for(&server).await.fetch_bulletin().await.unwrap();
        assert!(bulletin.weather_forecast.is_empty());
    }
}
