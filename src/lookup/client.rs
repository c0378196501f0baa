//! HTTP client for the BIN lookup source.

use std::future::Future;

use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use super::{Fragment, LookupError};
use crate::config::LookupSettings;

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Source of raw lookup responses for a fragment.
pub trait BinSource {
    /// Fetches the raw response body for `fragment`.
    ///
    /// Transport failures are reported as [`LookupError::LookupUnavailable`].
    fn fetch_record_html(
        &self,
        fragment: &Fragment,
    ) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// Client for the `bins.su` search form.
#[derive(Debug, Clone)]
pub struct BinsSuClient {
    http: Client,
    endpoint: String,
}

impl BinsSuClient {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::LookupUnavailable`] if the HTTP client cannot be
    /// built or the configured user agent is not a valid header value.
    pub fn new(settings: &LookupSettings) -> Result<Self, LookupError> {
        let user_agent = HeaderValue::from_str(&settings.user_agent).map_err(|e| {
            LookupError::LookupUnavailable(format!("invalid user agent: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(header::USER_AGENT, user_agent);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LookupError::LookupUnavailable(format!("failed to build client: {e}")))?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_search(&self, fragment: &Fragment) -> Result<String, reqwest::Error> {
        let form = search_form(fragment);

        let response = self
            .http
            .post(&self.endpoint)
            .form(form.as_slice())
            .send()
            .await?
            .error_for_status()?;

        debug!("Lookup for {} returned {}", fragment, response.status());
        response.text().await
    }
}

impl BinSource for BinsSuClient {
    async fn fetch_record_html(&self, fragment: &Fragment) -> Result<String, LookupError> {
        debug!("Looking up {} at {}", fragment, self.endpoint);

        self.post_search(fragment).await.map_err(|e| {
            warn!("Lookup for {} failed: {}", fragment, e);
            LookupError::from(e)
        })
    }
}

/// Form fields for a single-BIN search.
fn search_form(fragment: &Fragment) -> [(&'static str, &str); 4] {
    [
        ("action", "searchbins"),
        ("bins", fragment.as_str()),
        ("bank", ""),
        ("country", ""),
    ]
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves one canned HTTP response on loopback and returns its URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![0_u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/")
    }

    fn client_for(endpoint: String) -> BinsSuClient {
        let settings = LookupSettings {
            endpoint,
            ..LookupSettings::default()
        };
        BinsSuClient::new(&settings).unwrap()
    }

    #[test]
    fn test_search_form_fields() {
        let fragment = Fragment::from_param("457179").unwrap();
        assert_eq!(
            search_form(&fragment),
            [
                ("action", "searchbins"),
                ("bins", "457179"),
                ("bank", ""),
                ("country", ""),
            ]
        );
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let settings = LookupSettings {
            endpoint: "http://127.0.0.1:9/".to_owned(),
            ..LookupSettings::default()
        };
        let client = BinsSuClient::new(&settings).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/");
    }

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        let settings = LookupSettings {
            user_agent: "bad\nagent".to_owned(),
            ..LookupSettings::default()
        };
        assert!(matches!(
            BinsSuClient::new(&settings),
            Err(LookupError::LookupUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_refused_connection_is_unavailable() {
        // Port 9 (discard) is closed on loopback in test environments.
        let settings = LookupSettings {
            endpoint: "http://127.0.0.1:9/".to_owned(),
            ..LookupSettings::default()
        };
        let client = BinsSuClient::new(&settings).unwrap();
        let fragment = Fragment::from_param("457179").unwrap();

        let result = client.fetch_record_html(&fragment).await;
        assert!(matches!(result, Err(LookupError::LookupUnavailable(_))));
    }

    #[tokio::test]
    async fn test_error_status_is_unavailable() {
        let endpoint = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let fragment = Fragment::from_param("457179").unwrap();

        let result = client_for(endpoint).fetch_record_html(&fragment).await;
        match result {
            Err(LookupError::LookupUnavailable(reason)) => assert!(reason.contains("503"), "{reason}"),
            other => panic!("expected LookupUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let endpoint = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 15\r\nConnection: close\r\n\r\n<html>ok</html>",
        )
        .await;
        let fragment = Fragment::from_param("457179").unwrap();

        let body = client_for(endpoint).fetch_record_html(&fragment).await;
        assert_eq!(body, Ok("<html>ok</html>".to_owned()));
    }
}
