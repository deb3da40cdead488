//! Catalog Client
//!
//! Fetches one page of artworks from the remote catalog. The public boundary is
//! [`load_page`], which never fails: network, status and decode errors become an
//! empty page with an error message attached.
//!
//! ## Wire format
//!
//! ```text
//! GET {base_url}/artworks?page={n}&limit=12&fields=title,...
//!
//! { "pagination": { "total": 126079, ... }, "data": [ { "title": ..., ... } ] }
//! ```

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;
use snafu::ResultExt;

use crate::constants::ROWS_PER_PAGE;
use crate::domain::artwork::{Artwork, ArtworkField};
use crate::domain::config::CatalogConfig;
use crate::error::{DecodeSnafu, Error, HttpSnafu, Result};

/// A successfully fetched page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    /// Rows in catalog order, at most one page
    pub rows: Vec<Artwork>,
    /// Catalog size reported by the response, if any
    pub total: Option<u64>,
}

/// Anything that can serve catalog pages
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch a 1-based page
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<CatalogPage>> + Send;
}

/// Result of a page fetch as seen by the UI and the reconcilers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLoad {
    pub page: u32,
    pub rows: Vec<Artwork>,
    pub total: Option<u64>,
    /// Set when the fetch failed; `rows` is then empty
    pub error: Option<Arc<str>>,
}

impl PageLoad {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Fetch a page, converting every failure into an empty result plus an error flag
pub async fn load_page<S: CatalogSource>(source: &S, page: u32) -> PageLoad {
    if page == 0 {
        let error = Error::Invalid {
            message: "page numbers start at 1".to_string(),
        };
        tracing::warn!(page, error = %error, "Rejected page request");
        return PageLoad {
            page,
            error: Some(error.to_string().into()),
            ..Default::default()
        };
    }

    match source.fetch_page(page).await {
        Ok(fetched) => {
            tracing::debug!(page, rows = fetched.rows.len(), "Page fetched");
            PageLoad {
                page,
                rows: fetched.rows,
                total: fetched.total,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!(page, error = %e, "Error fetching data");
            PageLoad {
                page,
                error: Some(e.to_string().into()),
                ..Default::default()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    data: Vec<Artwork>,
    #[serde(default)]
    pagination: Option<CatalogPagination>,
}

#[derive(Debug, Deserialize)]
struct CatalogPagination {
    #[serde(default)]
    total: Option<u64>,
}

/// Decode a response body into a page
pub fn decode_page(page: u32, body: &[u8]) -> Result<CatalogPage> {
    let response: CatalogResponse = serde_json::from_slice(body).context(DecodeSnafu { page })?;
    Ok(CatalogPage {
        rows: response.data,
        total: response.pagination.and_then(|p| p.total),
    })
}

/// HTTP catalog backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpCatalog {
    /// Create a client for the configured endpoint
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Invalid {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').into(),
        })
    }

    /// Collection URL for the artworks resource
    pub fn artworks_url(&self) -> String {
        format!("{}/artworks", self.base_url)
    }

    fn query(page: u32) -> [(&'static str, String); 3] {
        let fields = ArtworkField::all()
            .iter()
            .map(|f| f.field())
            .collect::<Vec<_>>()
            .join(",");
        [
            ("page", page.to_string()),
            ("limit", ROWS_PER_PAGE.to_string()),
            ("fields", fields),
        ]
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage> {
        let response = self
            .client
            .get(self.artworks_url())
            .query(&Self::query(page))
            .send()
            .await
            .map_err(|source| {
                if source.is_timeout() {
                    Error::Timeout {
                        message: format!("page {page}"),
                    }
                } else {
                    Error::Http { page, source }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.context(HttpSnafu { page })?;
        decode_page(page, &body)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashSet;

    use parking_lot::Mutex;

    use super::*;
    use crate::domain::selection::sample_rows;

    /// In-memory catalog with optional failing pages
    pub struct FakeCatalog {
        total_rows: usize,
        failing: HashSet<u32>,
        pub requested: Mutex<Vec<u32>>,
    }

    impl FakeCatalog {
        pub fn with_rows(total_rows: usize) -> Self {
            Self {
                total_rows,
                failing: HashSet::new(),
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_on(mut self, page: u32) -> Self {
            self.failing.insert(page);
            self
        }

        pub fn rows_for(&self, page: u32) -> Vec<Artwork> {
            let start = (page as usize - 1) * ROWS_PER_PAGE;
            let count = self.total_rows.saturating_sub(start).min(ROWS_PER_PAGE);
            sample_rows(page, count)
        }
    }

    impl CatalogSource for FakeCatalog {
        async fn fetch_page(&self, page: u32) -> Result<CatalogPage> {
            self.requested.lock().push(page);
            // Later pages answer sooner, so a pipeline that relies on completion
            // order would misassign rows.
            let delay = 20u64.saturating_sub(page as u64 % 20);
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;

            if self.failing.contains(&page) {
                return Err(Error::Status { page, status: 503 });
            }
            Ok(CatalogPage {
                rows: self.rows_for(page),
                total: Some(self.total_rows as u64),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeCatalog;
    use super::*;

    #[test]
    fn test_decode_page_with_pagination() {
        let body = br#"{
            "pagination": {"total": 126079, "limit": 12, "offset": 0, "total_pages": 10507, "current_page": 1},
            "data": [
                {"title": "Starry Night and the Astronauts", "place_of_origin": "United States",
                 "artist_display": "Alma Thomas", "inscriptions": null, "date_start": 1972, "date_end": 1972}
            ],
            "info": {"license_text": "..."}
        }"#;

        let page = decode_page(1, body).expect("decode");
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].artist_display, "Alma Thomas");
        assert_eq!(page.total, Some(126079));
    }

    #[test]
    fn test_decode_page_without_pagination() {
        let page = decode_page(3, br#"{"data": []}"#).expect("decode");
        assert!(page.rows.is_empty());
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_decode_error_names_page() {
        let err = decode_page(7, b"<html>Bad Gateway</html>").expect_err("should fail");
        assert!(matches!(err, Error::Decode { page: 7, .. }));
    }

    #[test]
    fn test_artworks_url() {
        let catalog = HttpCatalog::new(&CatalogConfig {
            base_url: "https://example.org/api/v1/".to_string(),
            ..Default::default()
        })
        .expect("client");
        assert_eq!(catalog.artworks_url(), "https://example.org/api/v1/artworks");

        let query = HttpCatalog::query(4);
        assert_eq!(query[0], ("page", "4".to_string()));
        assert_eq!(query[1], ("limit", "12".to_string()));
        assert!(query[2].1.starts_with("title,place_of_origin"));
    }

    #[tokio::test]
    async fn test_load_page_converts_failure_to_empty() {
        let catalog = FakeCatalog::with_rows(100).failing_on(2);

        let load = load_page(&catalog, 2).await;
        assert!(load.failed());
        assert!(load.rows.is_empty());

        let load = load_page(&catalog, 1).await;
        assert!(!load.failed());
        assert_eq!(load.rows.len(), 12);
        assert_eq!(load.total, Some(100));
    }

    #[tokio::test]
    async fn test_load_page_rejects_page_zero_without_fetching() {
        let catalog = FakeCatalog::with_rows(100);
        let load = load_page(&catalog, 0).await;
        assert!(load.failed());
        assert!(catalog.requested.lock().is_empty());
    }

    #[tokio::test]
    async fn test_short_last_page() {
        let catalog = FakeCatalog::with_rows(30);
        assert_eq!(load_page(&catalog, 3).await.rows.len(), 6);
        assert!(load_page(&catalog, 4).await.rows.is_empty());
    }
}
