use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported base URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
    #[error("API returned {status} with a body that is not the expected JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("response is missing the '{0}' field")]
    MissingField(&'static str),
}

/// A decoded response together with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared HTTP client for the blog API.
///
/// Wraps [`reqwest::Client`] with a base URL. Paths passed to the request
/// methods are relative and resolve underneath the base path, so a client
/// built for `http://localhost:5000/api` sends `get("health")` to
/// `http://localhost:5000/api/health`.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new client for the given base URL.
    ///
    /// The URL must be an absolute `http` or `https` URL; `localhost:5000/api`
    /// parses with a `localhost` scheme and is rejected here.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::UnsupportedScheme(base_url.scheme().to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let inner = reqwest::Client::builder().build()?;

        Ok(Self { inner, base_url })
    }

    /// Resolve `path` against the base URL.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// GET `{base_url}/{path}` and decode the JSON body whatever the status.
    ///
    /// The blog API answers failures with a JSON envelope
    /// (`{"success": false, "message": ...}`), so a 404 or 500 still carries
    /// a body worth reading.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let url = self.url(path)?;
        self.fetch_url(url).await
    }

    /// Same as [`HttpClient::fetch`] for an already resolved URL.
    pub async fn fetch_url<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<ApiResponse<T>, ApiError> {
        debug!(%url, "GET");
        let resp = self.inner.get(url).send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        debug!(status, bytes = text.len(), "response received");
        let body =
            serde_json::from_str(&text).map_err(|source| ApiError::Decode { status, source })?;
        Ok(ApiResponse { status, body })
    }

    /// Return the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
