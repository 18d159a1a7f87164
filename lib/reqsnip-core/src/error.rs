/// Errors that can occur while assembling or rendering a request snippet.
///
/// Snippet generation assumes documentation examples are well-formed, so most
/// variants describe an example that does not have the shape its media type
/// requires. They are reported to the caller rather than papered over.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum SnippetError {
    /// URL parsing error when resolving a relative fetch URL against the page location.
    UrlError(url::ParseError),

    /// Form serialization error when rendering `application/x-www-form-urlencoded` text.
    FormEncodingError(serde_urlencoded::ser::Error),

    /// JSON serialization error.
    JsonValueError(serde_json::Error),

    /// Invalid page location configuration.
    ///
    /// Occurs when the scheme, host, port and base path cannot form a valid URL.
    #[display("Invalid base URL: {error}")]
    #[from(skip)]
    InvalidBaseUrl {
        /// Description of why the base URL is invalid.
        error: String,
    },

    /// The HTTP method of the operation is not a valid token.
    #[display("Invalid HTTP method '{method}'")]
    #[from(skip)]
    InvalidMethod {
        /// The rejected method.
        method: String,
    },

    /// A media type declares an (empty) example map but no example value.
    #[display("Media type '{media_type}' has no example value")]
    #[from(skip)]
    MissingExample {
        /// The media type name.
        media_type: String,
    },

    /// A media type requires an object example but got something else.
    #[display("Media type '{media_type}' expects an object example. Got: {value}")]
    #[from(skip)]
    ExampleNotAnObject {
        /// The media type name.
        media_type: String,
        /// The offending example value.
        value: serde_json::Value,
    },

    /// A deep path assignment went through a value that is not an object.
    #[display("Cannot set '{path}': segment '{segment}' is not an object")]
    #[from(skip)]
    PathNotAnObject {
        /// The full dotted path.
        path: String,
        /// The segment whose value cannot hold children.
        segment: String,
    },

    /// A deep path assignment was requested with no segment.
    #[display("Cannot set a value with an empty path")]
    #[from(skip)]
    EmptyPath,

    /// The operation description could not be parsed.
    #[display("Invalid operation description: {message}")]
    #[from(skip)]
    InvalidDescription {
        /// Parser error message.
        message: String,
    },
}
