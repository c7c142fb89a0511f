//! Configuration for FDF serialization.

/// Default initial capacity of the in-memory output buffer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// FDF writer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Initial capacity of the buffer used by `to_bytes` and `save`.
    ///
    /// Only a sizing hint; it never changes the bytes produced.
    pub buffer_capacity: usize,

    /// Trim surrounding whitespace from the form URL before encoding it.
    pub trim_form_url: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WriterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            trim_form_url: false,
        }
    }

    /// Set the initial output buffer capacity.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Trim the form URL before writing it.
    pub fn with_trim_form_url(mut self, enable: bool) -> Self {
        self.trim_form_url = enable;
        self
    }
}
