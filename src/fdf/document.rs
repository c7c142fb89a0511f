//! FDF document model and writer.
//!
//! Produces FDF 1.2 output with one `/Fields` array inside the catalog
//! object. Every string is written as a BOM-prefixed UTF-16BE literal.

use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::fdf::builder::FdfDocumentBuilder;
use crate::fdf::encoding::{escape_nul_parens, write_literal, write_utf16be, UTF16_BOM};
use crate::fdf::flags::{write_hidden_entry, write_readonly_entry};
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// File header, including the binary marker comment.
pub(crate) const HEADER: &[u8] = b"%FDF-1.2\n%\xE2\xE3\xCF\xD3\n\n";
/// Opens the catalog object and its `/Fields` array.
pub(crate) const FIELDS_OPEN: &[u8] = b"1 0 obj\n<<\n/FDF\n<<\n/Fields [\n";
/// Closes the `/Fields` array and the catalog object.
pub(crate) const FIELDS_CLOSE: &[u8] = b"]\n>>\n>>\nendobj\n";
/// Trailer pointing at the catalog.
pub(crate) const TRAILER: &[u8] = b"trailer\n\n<<\n/Root 1 0 R\n>>\n%%EOF\n\n";

/// A set of form field values ready to be written as FDF.
///
/// Field records are written in insertion order. Names listed as hidden
/// or read-only only take effect when a field with that name exists;
/// other names are ignored.
///
/// # Example
///
/// ```
/// use fdf_forge::fdf::FdfDocument;
///
/// let mut doc = FdfDocument::new();
/// doc.insert_field("Name", "Bob");
/// doc.make_readonly("Name");
///
/// let bytes = doc.to_bytes().unwrap();
/// assert!(bytes.starts_with(b"%FDF-1.2\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdfDocument {
    /// URL of the form the data belongs to (`/F` entry)
    #[serde(default)]
    form_url: Option<String>,
    /// Field name to value, in output order
    #[serde(default)]
    fields: IndexMap<String, String>,
    /// Names whose widgets are hidden
    #[serde(default)]
    hidden_fields: IndexSet<String>,
    /// Names whose fields are read-only
    #[serde(default)]
    readonly_fields: IndexSet<String>,
    #[serde(skip)]
    config: WriterConfig,
}

impl FdfDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a document.
    pub fn builder() -> FdfDocumentBuilder {
        FdfDocumentBuilder::new()
    }

    /// Create a document from an existing ordered field map.
    pub fn from_map<H, R>(
        form_url: Option<String>,
        fields: IndexMap<String, String>,
        hidden: H,
        readonly: R,
    ) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            form_url,
            fields,
            hidden_fields: hidden.into_iter().map(Into::into).collect(),
            readonly_fields: readonly.into_iter().map(Into::into).collect(),
            config: WriterConfig::default(),
        }
    }

    /// Create a document from `(name, value)` pairs, keeping their order.
    ///
    /// Fails with [`Error::DuplicateField`] if a name appears twice.
    pub fn from_pairs<I, K, V, H, R>(
        form_url: Option<String>,
        pairs: I,
        hidden: H,
        readonly: R,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let pairs = pairs.into_iter();
        let mut fields = IndexMap::with_capacity(pairs.size_hint().0);
        for (name, value) in pairs {
            match fields.entry(name.into()) {
                Entry::Occupied(entry) => {
                    return Err(Error::DuplicateField(entry.key().clone()));
                },
                Entry::Vacant(entry) => {
                    entry.insert(value.into());
                },
            }
        }
        Ok(Self::from_map(form_url, fields, hidden, readonly))
    }

    /// Replace the writer configuration.
    pub fn with_config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Writer configuration in use.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Form URL, if any.
    pub fn form_url(&self) -> Option<&str> {
        self.form_url.as_deref()
    }

    /// Set or clear the form URL.
    pub fn set_form_url(&mut self, url: Option<String>) {
        self.form_url = url;
    }

    /// Field values in output order.
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// Mutable access to the field values.
    pub fn fields_mut(&mut self) -> &mut IndexMap<String, String> {
        &mut self.fields
    }

    /// Names of hidden fields.
    pub fn hidden_fields(&self) -> &IndexSet<String> {
        &self.hidden_fields
    }

    /// Mutable access to the hidden field names.
    pub fn hidden_fields_mut(&mut self) -> &mut IndexSet<String> {
        &mut self.hidden_fields
    }

    /// Names of read-only fields.
    pub fn readonly_fields(&self) -> &IndexSet<String> {
        &self.readonly_fields
    }

    /// Mutable access to the read-only field names.
    pub fn readonly_fields_mut(&mut self) -> &mut IndexSet<String> {
        &mut self.readonly_fields
    }

    /// Insert or update a field value.
    ///
    /// A new name goes to the end; an existing name keeps its position.
    /// Returns the previous value.
    pub fn insert_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Mark a field as hidden.
    pub fn hide_field(&mut self, name: impl Into<String>) {
        self.hidden_fields.insert(name.into());
    }

    /// Mark a field as read-only.
    pub fn make_readonly(&mut self, name: impl Into<String>) {
        self.readonly_fields.insert(name.into());
    }

    /// Whether `name` is in the hidden set.
    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden_fields.contains(name)
    }

    /// Whether `name` is in the read-only set.
    pub fn is_readonly(&self, name: &str) -> bool {
        self.readonly_fields.contains(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Form URL as it will be written, or `None` when the `/F` entry is omitted.
    fn effective_form_url(&self) -> Option<&str> {
        let url = self.form_url.as_deref()?;
        if url.trim().is_empty() {
            return None;
        }
        if self.config.trim_form_url {
            Some(url.trim())
        } else {
            Some(url)
        }
    }

    /// Write the complete FDF document to `sink`.
    ///
    /// Output depends only on the document state, so repeated calls
    /// produce identical bytes. On error the sink contents are undefined.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let form_url = self.effective_form_url();
        log::debug!(
            "Writing FDF with {} fields (form URL: {})",
            self.fields.len(),
            form_url.is_some()
        );
        self.warn_unmatched_names();

        sink.write_all(HEADER)?;
        sink.write_all(FIELDS_OPEN)?;

        for (name, value) in &self.fields {
            self.write_field(sink, name, value)?;
        }

        if let Some(url) = form_url {
            sink.write_all(b"/F (")?;
            sink.write_all(&UTF16_BOM)?;
            write_utf16be(sink, url)?;
            sink.write_all(b")\n")?;
        }

        sink.write_all(FIELDS_CLOSE)?;
        sink.write_all(TRAILER)?;
        Ok(())
    }

    /// Write one field dictionary.
    fn write_field<W: Write + ?Sized>(&self, sink: &mut W, name: &str, value: &str) -> Result<()> {
        let hidden = self.is_hidden(name);
        let readonly = self.is_readonly(name);
        log::trace!("Field '{}' (hidden: {}, readonly: {})", name, hidden, readonly);

        sink.write_all(b"<<\n/V ")?;
        write_literal(sink, &escape_nul_parens(value))?;
        sink.write_all(b"\n/T ")?;
        write_literal(sink, &escape_nul_parens(name))?;
        sink.write_all(b"\n")?;
        write_hidden_entry(sink, hidden)?;
        sink.write_all(b"\n")?;
        write_readonly_entry(sink, readonly)?;
        sink.write_all(b"\n>>\n")?;
        Ok(())
    }

    fn warn_unmatched_names(&self) {
        if !log::log_enabled!(log::Level::Warn) {
            return;
        }
        for name in &self.hidden_fields {
            if !self.fields.contains_key(name) {
                log::warn!("Hidden field '{}' has no value; ignoring", name);
            }
        }
        for name in &self.readonly_fields {
            if !self.fields.contains_key(name) {
                log::warn!("Read-only field '{}' has no value; ignoring", name);
            }
        }
    }

    /// Generate FDF data as bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(self.config.buffer_capacity);
        self.write_to(&mut output)?;
        Ok(output)
    }

    /// Write FDF data to a file, replacing any existing contents.
    ///
    /// The document is rendered in memory first, so a serialization
    /// failure never touches the destination.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        log::info!("Saved FDF to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}
