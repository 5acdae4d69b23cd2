//! Extraction options

/// What to write for each object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// The object's bytes as stored, `<Class>/<path_id>.bin`
    #[default]
    Raw,
    /// Decoded objects as JSON, `<Class>/<path_id>.json`
    Decoded,
}

impl ExtractMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractMode::Raw => "raw",
            ExtractMode::Decoded => "decoded",
        }
    }
}

/// Options for [`extract`](super::extract).
///
/// # Example
///
/// ```no_run
/// use hsdisunity::export::{ExtractMode, ExtractOptions};
///
/// let options = ExtractOptions::new()
///     .with_mode(ExtractMode::Decoded)
///     .with_skip_unsupported(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Output format
    pub mode: ExtractMode,

    /// Leave out objects of classes without a decoder.
    /// Only affects raw mode; decoded mode never writes them.
    pub skip_unsupported: bool,
}

impl ExtractOptions {
    /// Create new options: raw mode, every object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for decoded extraction.
    #[must_use]
    pub fn decoded() -> Self {
        Self::new().with_mode(ExtractMode::Decoded)
    }

    /// Set the output format.
    #[must_use]
    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether to leave out unsupported classes.
    #[must_use]
    pub fn with_skip_unsupported(mut self, skip: bool) -> Self {
        self.skip_unsupported = skip;
        self
    }
}
