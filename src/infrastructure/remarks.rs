//! # Remark Service Client
//!
//! Fetches a plain-text joke over HTTP. The reqwest client carries the timeout, so a
//! stalled service costs one message at most `remarks.timeout_seconds`.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::domain::config::RemarksConfig;
use crate::domain::error::TransportError;
use crate::domain::traits::RemarkSource;

pub struct HttpRemarkSource {
    client: Client,
    endpoint: String,
}

impl HttpRemarkSource {
    pub fn new(config: &RemarksConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl RemarkSource for HttpRemarkSource {
    async fn fetch(&self) -> Result<String, TransportError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "text/plain")
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(TransportError::from_reqwest)?;
        let body = body.trim();
        if body.is_empty() {
            return Err(TransportError::EmptyBody);
        }
        Ok(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(endpoint: String) -> HttpRemarkSource {
        HttpRemarkSource::new(&RemarksConfig {
            endpoint,
            timeout_seconds: 2,
            user_agent: "dadbot-tests".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("accept", "text/plain")
            .match_header("user-agent", "dadbot-tests")
            .with_status(200)
            .with_body("What do you call a fake noodle? An impasta.\n")
            .create_async()
            .await;

        let joke = source(format!("{}/", server.url())).fetch().await.unwrap();
        assert_eq!(joke, "What do you call a fake noodle? An impasta.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(503)
            .with_body("down for maintenance")
            .create_async()
            .await;

        let err = source(format!("{}/", server.url())).fetch().await.unwrap_err();
        assert!(matches!(err, TransportError::Status(503)));
    }

    #[tokio::test]
    async fn test_blank_body_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("   \n")
            .create_async()
            .await;

        let err = source(format!("{}/", server.url())).fetch().await.unwrap_err();
        assert!(matches!(err, TransportError::EmptyBody));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_error() {
        // Port 1 is reserved and closed on test hosts
        let err = source("http://127.0.0.1:1/".to_string()).fetch().await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Request(_) | TransportError::Timeout
        ));
    }
}
