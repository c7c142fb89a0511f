//! Fluent construction of [`FdfDocument`]s.

use crate::config::WriterConfig;
use crate::error::Result;
use crate::fdf::document::FdfDocument;

/// Builder for [`FdfDocument`].
///
/// Fields are collected in call order and checked for duplicate names
/// when [`build`](Self::build) runs.
///
/// # Example
///
/// ```
/// use fdf_forge::fdf::FdfDocument;
///
/// let doc = FdfDocument::builder()
///     .form_url("http://example.com/form.pdf")
///     .field("Name", "Bob")
///     .field("Secret", "42")
///     .hidden("Secret")
///     .readonly("Name")
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FdfDocumentBuilder {
    form_url: Option<String>,
    fields: Vec<(String, String)>,
    hidden: Vec<String>,
    readonly: Vec<String>,
    config: WriterConfig,
}

impl FdfDocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form URL.
    pub fn form_url(mut self, url: impl Into<String>) -> Self {
        self.form_url = Some(url.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append several fields.
    pub fn fields<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Mark a field as hidden.
    pub fn hidden(mut self, name: impl Into<String>) -> Self {
        self.hidden.push(name.into());
        self
    }

    /// Mark a field as read-only.
    pub fn readonly(mut self, name: impl Into<String>) -> Self {
        self.readonly.push(name.into());
        self
    }

    /// Set the writer configuration.
    pub fn config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the document.
    ///
    /// Fails with [`Error::DuplicateField`](crate::error::Error::DuplicateField)
    /// if a field name was added twice.
    pub fn build(self) -> Result<FdfDocument> {
        let doc = FdfDocument::from_pairs(self.form_url, self.fields, self.hidden, self.readonly)?;
        Ok(doc.with_config(self.config))
    }
}
