//! YAML loading support using serde-saphyr.
//!
//! Only available when the `yaml` feature is enabled.

use crate::{Operation, SnippetError};

impl Operation {
    /// Loads an operation from its YAML description.
    ///
    /// The description uses the same camelCase fields as the JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::InvalidDescription`] if the YAML is malformed or
    /// does not describe an operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reqsnip_core::Operation;
    ///
    /// let operation = Operation::from_yaml(
    ///     r#"
    /// method: get
    /// path: /pet/{petId}
    /// serverUrl: https://petstore.example.com
    /// parameters:
    ///   - name: petId
    ///     in: path
    ///     example: 123
    /// "#,
    /// )?;
    ///
    /// assert_eq!(operation.build_fetch_url().full_url, "https://petstore.example.com/pet/123");
    /// # Ok::<(), reqsnip_core::SnippetError>(())
    /// ```
    pub fn from_yaml(description: &str) -> Result<Self, SnippetError> {
        serde_saphyr::from_str(description).map_err(|err| SnippetError::InvalidDescription {
            message: err.to_string(),
        })
    }
}
