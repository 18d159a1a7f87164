use std::fmt::Debug;
use std::sync::LazyLock;

use http::uri::{PathAndQuery, Scheme};
use url::Url;

use crate::SnippetError;

static DEFAULT_PAGE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://127.0.0.1/").expect("a valid URL"));

/// The documentation page location snippets are rendered for.
///
/// Relative server URLs (e.g. `/api/v3`) are resolved against this page, the
/// way a browser resolves a relative link.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::SnippetConfig;
///
/// let config = SnippetConfig::from_url("https://petstore.example.com/docs/")?;
/// assert_eq!(
///     config.resolve_url("/api/v3/pet/1")?,
///     "https://petstore.example.com/api/v3/pet/1"
/// );
/// assert_eq!(
///     config.resolve_url("http://other.example.com/pet")?,
///     "http://other.example.com/pet"
/// );
/// # Ok::<(), reqsnip_core::SnippetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetConfig {
    page_url: Url,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.clone(),
        }
    }
}

impl SnippetConfig {
    /// Creates a builder, see [`SnippetConfigBuilder`].
    pub fn builder() -> SnippetConfigBuilder {
        SnippetConfigBuilder::default()
    }

    /// Uses an absolute page URL.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::UrlError`] if the URL is not absolute.
    pub fn from_url(page_url: &str) -> Result<Self, SnippetError> {
        let page_url = Url::parse(page_url)?;
        Ok(Self { page_url })
    }

    /// The page URL.
    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    /// Returns an absolute URL: absolute input is kept verbatim, anything else
    /// is joined onto the page URL.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::UrlError`] if the URL cannot be joined.
    pub fn resolve_url(&self, url: &str) -> Result<String, SnippetError> {
        if Url::parse(url).is_ok() {
            return Ok(url.to_string());
        }
        let resolved = self.page_url.join(url)?;
        Ok(resolved.into())
    }
}

/// Builder for [`SnippetConfig`] from the page location parts.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP (use `with_scheme()` to change to HTTPS)
/// - **Host**: 127.0.0.1 (localhost)
/// - **Port**: 80 (standard HTTP port)
/// - **Base path**: None (page at the root path)
///
/// # Example
///
/// ```rust
/// use http::uri::Scheme;
/// use reqsnip_core::SnippetConfig;
///
/// let config = SnippetConfig::builder()
///     .with_scheme(Scheme::HTTPS)
///     .with_host("docs.example.com")
///     .with_port(8443)
///     .with_base_path("/reference/")?
///     .build()?;
///
/// assert_eq!(config.page_url().as_str(), "https://docs.example.com:8443/reference/");
/// # Ok::<(), reqsnip_core::SnippetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnippetConfigBuilder {
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
}

impl Default for SnippetConfigBuilder {
    fn default() -> Self {
        Self {
            scheme: Scheme::HTTP,
            host: "127.0.0.1".to_string(),
            port: 80,
            base_path: None,
        }
    }
}

impl SnippetConfigBuilder {
    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::InvalidBaseUrl`] if the parts do not form a valid URL.
    pub fn build(self) -> Result<SnippetConfig, SnippetError> {
        let Self {
            scheme,
            host,
            port,
            base_path,
        } = self;

        let path_and_query = base_path.as_ref().map_or("/", PathAndQuery::as_str);
        let page_url = format!("{scheme}://{host}:{port}{path_and_query}");
        let page_url = Url::parse(&page_url).map_err(|err| SnippetError::InvalidBaseUrl {
            error: err.to_string(),
        })?;

        Ok(SnippetConfig { page_url })
    }

    /// Sets the page scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the page host name or IP address.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the page port. Default ports are omitted from the page URL.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the page path, with an optional query string.
    ///
    /// Relative URLs are resolved like links of that page: a path ending with
    /// `/` is a directory, otherwise its last segment is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::InvalidBaseUrl`] if the path contains invalid characters
    /// (such as spaces) or cannot be parsed as a valid URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, SnippetError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| SnippetError::InvalidBaseUrl {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }
}
