use crate::core::{ConfigProvider, Prediction, Predictor};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.genderize.io/";

/// Client for a genderize.io compatible endpoint.
pub struct GenderizeClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GenderizeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let mut client = Self {
            client: builder.build()?,
            endpoint: config.api_endpoint().to_string(),
            api_key: None,
        };
        if let Some(key) = config.api_key() {
            client = client.with_api_key(key);
        }
        Ok(client)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Predictor for GenderizeClient {
    async fn predict(&self, name: &str) -> Result<Prediction> {
        let mut query = vec![("name", name)];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("apikey", key));
        }

        tracing::debug!("GET {} name={:?}", self.endpoint, name);
        let response = self.client.get(&self.endpoint).query(&query).send().await?;

        let status = response.status();
        tracing::debug!("Prediction response status: {}", status);

        if !status.is_success() {
            return Err(FormError::RemoteStatusError {
                status: status.as_u16(),
            });
        }

        let prediction: Prediction = response.json().await?;
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Gender;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_predict_sends_name_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/").query_param("name", "Mary Ann");
            then.status(200).json_body(serde_json::json!({
                "count": 3, "name": "Mary Ann", "gender": "female", "probability": 0.88
            }));
        });

        let client = GenderizeClient::new(server.url("/"));
        let prediction = client.predict("Mary Ann").await.unwrap();

        mock.assert();
        assert_eq!(prediction.gender, Some(Gender::Female));
        assert_eq!(prediction.percentage(), "88.0");
    }

    #[tokio::test]
    async fn test_predict_passes_api_key() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .query_param("name", "Bob")
                .query_param("apikey", "secret");
            then.status(200)
                .json_body(serde_json::json!({"gender": "male", "probability": 0.99}));
        });

        let client = GenderizeClient::new(server.url("/")).with_api_key("secret");
        let prediction = client.predict("Bob").await.unwrap();

        mock.assert();
        assert_eq!(prediction.gender, Some(Gender::Male));
    }

    #[tokio::test]
    async fn test_from_config_uses_api_key() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .query_param("name", "Kim")
                .query_param("apikey", "from-config");
            then.status(200)
                .json_body(serde_json::json!({"gender": "female", "probability": 0.51}));
        });

        let mut config = crate::config::FormConfig::default();
        config.api.endpoint = server.url("/");
        config.api.api_key = Some("from-config".to_string());
        config.api.timeout_seconds = Some(5);

        let client = GenderizeClient::from_config(&config).unwrap();
        client.predict("Kim").await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_predict_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(429).body("Request limit reached");
        });

        let client = GenderizeClient::new(server.url("/"));
        let err = client.predict("Alice").await.unwrap_err();

        assert!(matches!(err, FormError::RemoteStatusError { status: 429 }));
    }

    #[tokio::test]
    async fn test_predict_invalid_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<html>oops</html>");
        });

        let client = GenderizeClient::new(server.url("/"));
        let err = client.predict("Alice").await.unwrap_err();

        assert!(matches!(err, FormError::ApiError(_)));
    }
}
