use serde::{Deserialize, Deserializer};
use tracing::debug;
use url::{ParseError, Url};

use crate::client::{ApiError, ApiResponse, HttpClient};
use crate::health::{HealthCheck, HealthStatus};

/// Page size requested when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 5;

/// Client for the blog REST API.
///
/// `base_url` is the API root (e.g. `http://localhost:5000/api`); the
/// health and blog endpoints hang directly off it.
#[derive(Debug, Clone)]
pub struct BlogClient {
    http: HttpClient,
}

// --- Response types ---

/// The `{success, data, pagination, message}` wrapper every endpoint uses.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Take the payload out of a successful envelope.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingField("data"))
    }

    /// Take the payload and its pagination block out of a list response.
    pub fn into_page(self) -> Result<(T, Pagination), ApiError> {
        let pagination = self.pagination.ok_or(ApiError::MissingField("pagination"))?;
        let data = self.data.ok_or(ApiError::MissingField("data"))?;
        Ok((data, pagination))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub pages: u64,
}

/// One blog post. Rows are decoded leniently: absent or `null` fields fall
/// back to their defaults so a single odd row does not sink a whole page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default, rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Filters for `GET /api/blogs`. Unset fields are left off the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            page: None,
            limit: Some(DEFAULT_LIMIT),
            category: None,
            search: None,
        }
    }
}

impl BlogQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

impl BlogClient {
    /// Create a new blog API client rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }

    /// GET `/api/health`, keeping the payload as raw JSON.
    pub async fn health(&self) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        self.http.fetch("health").await
    }

    /// GET `/api/health`, decoded into [`HealthStatus`].
    pub async fn health_status(&self) -> Result<ApiResponse<HealthStatus>, ApiError> {
        self.http.fetch("health").await
    }

    /// GET `/api/blogs?page=..&limit=..&category=..&search=..`
    pub async fn list_blogs(
        &self,
        query: &BlogQuery,
    ) -> Result<ApiResponse<Envelope<Vec<Blog>>>, ApiError> {
        let mut url = self.http.url("blogs")?;
        let pairs = query.pairs();
        if !pairs.is_empty() {
            let mut qs = url.query_pairs_mut();
            for (key, value) in &pairs {
                qs.append_pair(key, value);
            }
        }
        debug!(?query, "listing blogs");
        self.http.fetch_url(url).await
    }

    /// GET `/api/blogs/{slug}`
    pub async fn get_blog(&self, slug: &str) -> Result<ApiResponse<Envelope<Blog>>, ApiError> {
        let mut url = self.http.url("blogs")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(slug);
        self.http.fetch_url(url).await
    }
}

impl HealthCheck for BlogClient {
    async fn is_healthy(&self) -> Result<bool, ApiError> {
        let resp = self.health_status().await?;
        Ok(resp.body.is_healthy(resp.status))
    }
}
