// SPDX-License-Identifier: MPL-2.0
//! `reqwest` based implementation of [`GallerySource`].
//!
//! One [`reqwest::Client`] is built at startup and shared by every request;
//! cloning it is cheap (it is an `Arc` internally).

use super::envelope::decode_page;
use crate::application::port::gallery::{GallerySource, ImageResult, PageResult};
use crate::domain::gallery::PageRequest;
use crate::error::{Error, FetchError};
use futures_util::future::BoxFuture;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use std::time::Duration;

/// Base endpoint of the Korea Tourism Organization photo gallery service.
pub const DEFAULT_BASE_URL: &str = "https://apis.data.go.kr/B551011/PhotoGalleryService1";

/// Default connect/read timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Path of the list operation, relative to the base URL.
const LIST_ENDPOINT: &str = "galleryList1";

/// Fixed device/app identifier pair expected by the portal.
const MOBILE_OS: &str = "AND";
const MOBILE_APP: &str = "app";

/// Sort order code: `A` orders by title.
const ARRANGE: &str = "A";

/// Response format code.
const RESPONSE_TYPE: &str = "json";

/// Upper bound for a single downloaded image.
const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

/// Connection settings for [`HttpGalleryClient`].
#[derive(Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// Opaque service credential, sent as `serviceKey`.
    pub service_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url)
            .field("service_key_set", &!self.service_key.is_empty())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Gallery API client.
#[derive(Debug, Clone)]
pub struct HttpGalleryClient {
    http: Client,
    settings: ClientSettings,
}

impl HttpGalleryClient {
    /// Builds the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the TLS backend cannot be initialised.
    pub fn new(settings: ClientSettings) -> Result<Self, Error> {
        let http = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(settings.timeout)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if settings.service_key.is_empty() {
            tracing::warn!("no gallery service key configured; requests will be rejected");
        }

        Ok(Self { http, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Full URL of the list endpoint.
    ///
    /// # Errors
    ///
    /// A base URL that does not parse is reported as a network failure, so
    /// the caller still gets a classified outcome.
    pub fn list_url(&self) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/{LIST_ENDPOINT}"))
            .map_err(|e| FetchError::Network(format!("invalid request URL: {e}")))
    }
}

/// Query parameters for one page, in the order the portal documents them.
#[must_use]
pub fn list_query(request: PageRequest, service_key: &str) -> Vec<(&'static str, String)> {
    vec![
        ("pageNo", request.page.value().to_string()),
        ("numOfRows", request.size.value().to_string()),
        ("MobileOS", MOBILE_OS.to_string()),
        ("MobileApp", MOBILE_APP.to_string()),
        ("arrange", ARRANGE.to_string()),
        ("_type", RESPONSE_TYPE.to_string()),
        ("serviceKey", service_key.to_string()),
    ]
}

impl GallerySource for HttpGalleryClient {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, PageResult> {
        let http = self.http.clone();
        let url = self.list_url();
        let query = list_query(request, &self.settings.service_key);

        Box::pin(async move {
            let url = url?;
            tracing::debug!(
                page = request.page.value(),
                size = request.size.value(),
                endpoint = %url,
                "requesting gallery page"
            );

            let response = http
                .get(url)
                .query(&query)
                .send()
                .await
                .map_err(|e| FetchError::from_transport(&e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Server(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::from_transport(&e))?;

            let page = decode_page(&body)?;
            tracing::debug!(
                received = page.items.len(),
                total = ?page.total_count,
                "gallery page decoded"
            );
            Ok(page.items)
        })
    }

    fn fetch_image(&self, url: &str) -> BoxFuture<'static, ImageResult> {
        let http = self.http.clone();
        let url =
            Url::parse(url).map_err(|e| FetchError::Network(format!("invalid image URL: {e}")));

        Box::pin(async move {
            let response = http
                .get(url?)
                .send()
                .await
                .map_err(|e| FetchError::from_transport(&e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Server(status.as_u16()));
            }

            let expected = response.content_length().unwrap_or(0).min(MAX_IMAGE_BYTES as u64);
            let mut bytes = Vec::with_capacity(expected as usize);
            let mut stream = response.bytes_stream();

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| FetchError::from_transport(&e))?;
                if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                    return Err(FetchError::Decode(format!(
                        "image larger than {MAX_IMAGE_BYTES} bytes"
                    )));
                }
                bytes.extend_from_slice(&chunk);
            }

            if bytes.is_empty() {
                return Err(FetchError::Empty);
            }
            Ok(bytes)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{PageNumber, PageSize};

    fn client(base_url: &str) -> HttpGalleryClient {
        HttpGalleryClient::new(ClientSettings {
            base_url: base_url.to_string(),
            service_key: "secret/key==".to_string(),
            timeout: Duration::from_secs(1),
        })
        .expect("client should build")
    }

    #[test]
    fn list_query_carries_fixed_parameters() {
        let request = PageRequest {
            page: PageNumber::new(3),
            size: PageSize::new(25),
        };
        let query = list_query(request, "abc");

        let names: Vec<_> = query.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["pageNo", "numOfRows", "MobileOS", "MobileApp", "arrange", "_type", "serviceKey"]
        );
        assert!(query.contains(&("pageNo", "3".to_string())));
        assert!(query.contains(&("numOfRows", "25".to_string())));
        assert!(query.contains(&("MobileOS", "AND".to_string())));
        assert!(query.contains(&("MobileApp", "app".to_string())));
        assert!(query.contains(&("arrange", "A".to_string())));
        assert!(query.contains(&("_type", "json".to_string())));
        assert!(query.contains(&("serviceKey", "abc".to_string())));
    }

    #[test]
    fn list_url_tolerates_trailing_slash() {
        let with_slash = client("https://apis.example.org/gallery/");
        let without = client("https://apis.example.org/gallery");
        assert_eq!(
            with_slash.list_url().unwrap().as_str(),
            "https://apis.example.org/gallery/galleryList1"
        );
        assert_eq!(with_slash.list_url(), without.list_url());
    }

    #[test]
    fn invalid_base_url_is_network_error() {
        let client = client("not a url");
        assert!(matches!(client.list_url(), Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn invalid_base_url_resolves_fetch_to_network_error() {
        let client = client("::::");
        let result = client.fetch_page(PageRequest::default()).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn invalid_image_url_is_network_error() {
        let client = client(DEFAULT_BASE_URL);
        let result = client.fetch_image("no scheme here").await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
