use serde::{Deserialize, Serialize};

/// Where an API key credential is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    /// Passed as a request header (e.g., `X-API-Key: secret`)
    Header,
    /// Passed as a query parameter (e.g., `?api_key=secret`)
    Query,
    /// Passed as a cookie (e.g., `Cookie: api_key=secret`)
    Cookie,
}

/// A configured credential to inject into the rendered request.
///
/// The `display_name` is the value shown in the snippet in place of the real
/// secret, e.g. `YOUR_API_KEY`.
///
/// # Example
///
/// ```rust
/// use reqsnip_core::{ApiKeyLocation, SecurityScheme};
///
/// let scheme = SecurityScheme::new("X-API-Key", ApiKeyLocation::Header, "<api-key>");
/// assert_eq!(scheme.display_name, "<api-key>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// Name of the header, query parameter, or cookie.
    pub name: String,
    /// Where the credential is passed.
    #[serde(rename = "in")]
    pub location: ApiKeyLocation,
    /// The credential placeholder value.
    pub display_name: String,
}

impl SecurityScheme {
    /// Creates a credential injection point.
    pub fn new(
        name: impl Into<String>,
        location: ApiKeyLocation,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            display_name: display_name.into(),
        }
    }
}
